use axum::extract::DefaultBodyLimit;
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_admin;
use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{
    activities, auth, blood_requests, dashboard, health_check, members, uploads,
};
use crate::state::AppState;
use crate::uploads::MAX_AVATAR_BYTES;

/// Room for multipart framing around a maximum-size image.
const AVATAR_BODY_LIMIT: usize = MAX_AVATAR_BYTES + 64 * 1024;

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/members", post(members::register))
        .route("/api/activities/upcoming", get(activities::upcoming))
        .route("/api/blood-requests", post(blood_requests::submit_public))
        .route(
            "/api/uploads/avatar",
            post(uploads::upload_avatar).layer(DefaultBodyLimit::max(AVATAR_BODY_LIMIT)),
        )
}

fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list))
        .route("/members/export", get(members::export))
        .route("/members/:id", put(members::update).delete(members::delete))
        .route("/donors", get(dashboard::donors))
        .route("/birthdays", get(dashboard::birthdays))
        .route("/summary", get(dashboard::summary))
        .route("/analytics/blood-groups", get(dashboard::blood_groups))
        .route("/activities", get(activities::list).post(activities::create))
        .route("/activities/:id", delete(activities::delete))
        .route(
            "/blood-requests",
            get(blood_requests::list).post(blood_requests::create_staff),
        )
        .route(
            "/blood-requests/staff/:id",
            delete(blood_requests::delete_staff),
        )
        .route(
            "/blood-requests/public/:id",
            delete(blood_requests::delete_public),
        )
        // everything above requires a token, login below does not
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route("/login", post(auth::login))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

pub fn create_routes(state: AppState) -> Router {
    let config = state.config.clone();

    Router::new()
        .route("/health", get(health_check))
        .merge(public_routes())
        .nest("/api/admin", admin_routes(&state))
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer(&config))
        .layer(create_cors_layer(&config))
}
