//! Rolling upcoming-birthday window for the admin dashboard.
//!
//! Each member's next birthday is the birth month/day in the current year,
//! or in the following year once that date has passed. A birthday falling
//! on `today` is day 0 and is never pushed to next year. Feb 29 birthdays
//! are celebrated on Mar 1 in non-leap years.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::Member;

pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Birthdays this close get the urgent badge.
pub const URGENT_WITHIN_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BirthdaySeverity {
    Today,
    Urgent,
    Normal,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingBirthday<'a> {
    pub member: &'a Member,
    pub next_occurrence: NaiveDate,
    pub days_until_next: i64,
    pub label: String,
    pub severity: BirthdaySeverity,
}

/// Members with a birthday in `[today, today + window_days]`, soonest first.
///
/// The full sorted list is returned; cutting it down for display is up to
/// the caller.
pub fn upcoming_birthdays(
    members: &[Member],
    today: NaiveDate,
    window_days: i64,
) -> Vec<UpcomingBirthday<'_>> {
    let mut upcoming: Vec<UpcomingBirthday<'_>> = members
        .iter()
        .filter_map(|member| {
            let born = member.date_of_birth?;
            let next = next_occurrence(born, today)?;
            let days = (next - today).num_days();
            if !(0..=window_days).contains(&days) {
                return None;
            }
            let (label, severity) = badge(days);
            Some(UpcomingBirthday {
                member,
                next_occurrence: next,
                days_until_next: days,
                label,
                severity,
            })
        })
        .collect();

    // sort_by_key is stable, equal distances keep roster order
    upcoming.sort_by_key(|b| b.days_until_next);
    upcoming
}

/// Next date on or after `today` that falls on the birth month/day.
pub fn next_occurrence(born: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(born, today.year())?;
    if this_year >= today {
        Some(this_year)
    } else {
        anniversary_in(born, today.year() + 1)
    }
}

fn anniversary_in(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

pub fn badge(days_until_next: i64) -> (String, BirthdaySeverity) {
    match days_until_next {
        0 => ("Today!".to_string(), BirthdaySeverity::Today),
        d if d <= URGENT_WITHIN_DAYS => (format!("{} days", d), BirthdaySeverity::Urgent),
        d => (format!("{} days", d), BirthdaySeverity::Normal),
    }
}
