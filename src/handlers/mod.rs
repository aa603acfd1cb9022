use axum::response::Response;
use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::utils::response::success;

pub mod activities;
pub mod auth;
pub mod blood_requests;
pub mod dashboard;
pub mod members;
pub mod uploads;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "donor-club-api",
    };

    success(payload, "Health check successful")
}

/// Calendar date used for birthday and activity windows.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
