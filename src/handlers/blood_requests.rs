use axum::extract::State;
use axum::response::Response;
use axum::Extension;
use uuid::Uuid;

use crate::auth::AdminIdentity;
use crate::models::{NewPublicRequest, NewStaffRequest};
use crate::services::requests::merge_and_sort;
use crate::services::validation::{validate_public_request, validate_staff_request};
use crate::state::AppState;
use crate::utils::extract::{Json, Path};
use crate::utils::response::{created, empty_success, success};
use crate::utils::AppResult;

/// POST /api/blood-requests - public submission
pub async fn submit_public(
    State(state): State<AppState>,
    Json(payload): Json<NewPublicRequest>,
) -> AppResult<Response> {
    let request = validate_public_request(payload)?;
    let request = state.store.insert_public_request(request).await?;

    tracing::info!(
        request_id = %request.id,
        blood_group = %request.blood_group,
        urgency = %request.urgency,
        "Public blood request submitted"
    );
    Ok(created(
        request,
        "Your request has been submitted successfully. Our team will contact you soon.",
    ))
}

/// GET /api/admin/blood-requests - both origins, newest first
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let (staff, public) = tokio::try_join!(
        state.store.list_staff_requests(),
        state.store.list_public_requests()
    )?;
    Ok(success(merge_and_sort(&staff, &public), "Blood requests loaded"))
}

/// POST /api/admin/blood-requests
pub async fn create_staff(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
    Json(payload): Json<NewStaffRequest>,
) -> AppResult<Response> {
    let request = validate_staff_request(payload)?;
    let request = state.store.insert_staff_request(request).await?;

    tracing::info!(
        request_id = %request.id,
        blood_group = %request.blood_group,
        admin = %admin.username,
        "Staff blood request created"
    );
    Ok(created(request, "Blood request added"))
}

/// DELETE /api/admin/blood-requests/staff/{id}
pub async fn delete_staff(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    state.store.delete_staff_request(id).await?;
    tracing::info!(request_id = %id, admin = %admin.username, "Staff blood request deleted");
    Ok(empty_success("Blood request has been removed"))
}

/// DELETE /api/admin/blood-requests/public/{id}
pub async fn delete_public(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    state.store.delete_public_request(id).await?;
    tracing::info!(request_id = %id, admin = %admin.username, "Public blood request deleted");
    Ok(empty_success("Public blood request has been removed"))
}
