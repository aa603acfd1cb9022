use axum::extract::State;
use axum::response::Response;
use axum::Extension;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AdminIdentity;
use crate::models::NewActivity;
use crate::services::activities::DEFAULT_UPCOMING_LIMIT;
use crate::services::validation::validate_new_activity;
use crate::state::AppState;
use crate::utils::extract::{Json, Path, Query};
use crate::utils::response::{created, empty_success, success};
use crate::utils::AppResult;

const MAX_UPCOMING_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    pub limit: Option<usize>,
}

/// GET /api/activities/upcoming
pub async fn upcoming(
    State(state): State<AppState>,
    Query(query): Query<UpcomingQuery>,
) -> AppResult<Response> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_UPCOMING_LIMIT)
        .min(MAX_UPCOMING_LIMIT);
    let activities = state
        .store
        .list_upcoming_activities(super::today(), limit)
        .await?;
    Ok(success(activities, "Upcoming activities loaded"))
}

/// GET /api/admin/activities
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let activities = state.store.list_activities().await?;
    Ok(success(activities, "Activities loaded"))
}

/// POST /api/admin/activities
pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
    Json(payload): Json<NewActivity>,
) -> AppResult<Response> {
    let activity = validate_new_activity(payload)?;
    let activity = state.store.insert_activity(activity).await?;

    tracing::info!(
        activity_id = %activity.id,
        date = %activity.date,
        admin = %admin.username,
        "Activity created"
    );
    Ok(created(activity, "Activity added"))
}

/// DELETE /api/admin/activities/{id}
pub async fn delete(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    state.store.delete_activity(id).await?;
    tracing::info!(activity_id = %id, admin = %admin.username, "Activity deleted");
    Ok(empty_success("Activity has been removed"))
}
