use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use uuid::Uuid;

use crate::auth::AdminIdentity;
use crate::models::{MemberPatch, NewMember};
use crate::services::editor::MemberEditor;
use crate::services::export::{export_file_name, members_csv};
use crate::services::validation::validate_new_member;
use crate::state::AppState;
use crate::utils::extract::{Json, Path};
use crate::utils::response::{created, empty_success, success};
use crate::utils::{AppError, AppResult};

/// POST /api/members - public registration
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<NewMember>,
) -> AppResult<Response> {
    let new_member = validate_new_member(payload)?;
    let member = state.store.insert_member(new_member).await?;

    tracing::info!(member_id = %member.id, blood_group = %member.blood_group, "Member registered");
    Ok(created(member, "Registration successful"))
}

/// GET /api/admin/members
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let members = state.store.list_members().await?;
    Ok(success(members, "Members loaded"))
}

/// PUT /api/admin/members/{id}
pub async fn update(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<Uuid>,
    Json(patch): Json<MemberPatch>,
) -> AppResult<Response> {
    let member = state
        .store
        .find_member(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Member with id '{}' was not found", id)))?;

    let mut editor = MemberEditor::new();
    editor.begin_edit(&member).apply(patch);
    let changes = editor.commit_edit(id)?;

    let updated = state.store.update_member(id, changes).await?;
    tracing::info!(member_id = %id, admin = %admin.username, "Member updated");
    Ok(success(updated, "Member information has been saved"))
}

/// DELETE /api/admin/members/{id}
pub async fn delete(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    state.store.delete_member(id).await?;
    tracing::info!(member_id = %id, admin = %admin.username, "Member deleted");
    Ok(empty_success("Member has been removed from the system"))
}

/// GET /api/admin/members/export - CSV download
pub async fn export(State(state): State<AppState>) -> AppResult<Response> {
    let members = state.store.list_members().await?;
    let body = members_csv(&members);
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(super::today())
    );

    tracing::info!(rows = members.len(), "Exported member roster");
    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
