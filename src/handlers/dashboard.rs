//! Read-only admin views computed from fresh store snapshots.

use axum::extract::State;
use axum::response::Response;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::Member;
use crate::services::birthdays::upcoming_birthdays;
use crate::services::matching::find_matching_donors;
use crate::services::requests::time_ago;
use crate::services::summary::{blood_group_distribution, summarize, Summary};
use crate::services::UpcomingBirthday;
use crate::state::AppState;
use crate::utils::extract::Query;
use crate::utils::response::success;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct DonorQuery {
    pub blood_group: String,
}

#[derive(Serialize)]
struct DonorMatches<'a> {
    blood_group: &'a str,
    count: usize,
    donors: Vec<&'a Member>,
}

/// GET /api/admin/donors?blood_group=O-
pub async fn donors(
    State(state): State<AppState>,
    Query(query): Query<DonorQuery>,
) -> AppResult<Response> {
    let members = state.store.list_members().await?;
    let donors = find_matching_donors(&members, &query.blood_group);

    tracing::debug!(blood_group = %query.blood_group, matches = donors.len(), "Donor lookup");
    Ok(success(
        DonorMatches {
            blood_group: &query.blood_group,
            count: donors.len(),
            donors,
        },
        "Matching donors loaded",
    ))
}

#[derive(Debug, Deserialize)]
pub struct BirthdayQuery {
    pub window_days: Option<i64>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct BirthdayList<'a> {
    window_days: i64,
    total: usize,
    /// Entries left out by `limit`, shown as "+N more"
    remaining: usize,
    birthdays: Vec<UpcomingBirthday<'a>>,
}

/// GET /api/admin/birthdays?window_days=30&limit=5
pub async fn birthdays(
    State(state): State<AppState>,
    Query(query): Query<BirthdayQuery>,
) -> AppResult<Response> {
    let window_days = query.window_days.unwrap_or(state.config.birthday_window_days);
    if !(0..=366).contains(&window_days) {
        return Err(AppError::ValidationError(
            "window_days must be between 0 and 366".to_string(),
        ));
    }

    let members = state.store.list_members().await?;
    let mut birthdays = upcoming_birthdays(&members, super::today(), window_days);

    let total = birthdays.len();
    if let Some(limit) = query.limit {
        birthdays.truncate(limit);
    }

    Ok(success(
        BirthdayList {
            window_days,
            total,
            remaining: total - birthdays.len(),
            birthdays,
        },
        "Upcoming birthdays loaded",
    ))
}

#[derive(Serialize)]
struct SummaryPayload {
    #[serde(flatten)]
    summary: Summary,
    most_recent_request_age: Option<String>,
}

/// GET /api/admin/summary
pub async fn summary(State(state): State<AppState>) -> AppResult<Response> {
    let store = &state.store;
    let (members, activities, staff, public) = tokio::try_join!(
        store.list_members(),
        store.list_activities(),
        store.list_staff_requests(),
        store.list_public_requests()
    )?;

    let summary = summarize(&members, &activities, &staff, &public);
    let now = Utc::now();
    let most_recent_request_age = summary
        .most_recent_request
        .as_ref()
        .map(|r| time_ago(r.created_at, now));

    Ok(success(
        SummaryPayload {
            summary,
            most_recent_request_age,
        },
        "Summary loaded",
    ))
}

/// GET /api/admin/analytics/blood-groups
pub async fn blood_groups(State(state): State<AppState>) -> AppResult<Response> {
    let members = state.store.list_members().await?;
    Ok(success(
        blood_group_distribution(&members),
        "Blood group distribution loaded",
    ))
}
