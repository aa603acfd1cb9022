use chrono::NaiveDate;

use crate::models::Activity;

/// How many upcoming activities the public home page shows.
pub const DEFAULT_UPCOMING_LIMIT: usize = 3;

/// Activities dated `today` or later, earliest first, at most `limit`.
pub fn upcoming_activities(activities: &[Activity], today: NaiveDate, limit: usize) -> Vec<Activity> {
    let mut upcoming: Vec<Activity> = activities
        .iter()
        .filter(|a| a.date >= today)
        .cloned()
        .collect();
    upcoming.sort_by_key(|a| a.date);
    upcoming.truncate(limit);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::activity;

    #[test]
    fn test_past_activities_hidden_and_limited() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let d = |day| NaiveDate::from_ymd_opt(2025, 5, day).unwrap();
        let activities = vec![
            activity("Drive", d(20)),
            activity("Past", d(9)),
            activity("Today", d(10)),
            activity("Cleanup", d(12)),
            activity("Gala", d(30)),
        ];

        let upcoming = upcoming_activities(&activities, today, DEFAULT_UPCOMING_LIMIT);
        let titles: Vec<_> = upcoming.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Today", "Cleanup", "Drive"]);
    }
}
