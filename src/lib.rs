//! HTTP API for a community blood-donor club: public registration and blood
//! request forms, plus an authenticated admin dashboard for members,
//! activities and requests.
//!
//! The dashboard logic (donor matching, request triage, upcoming birthdays,
//! summary counts) lives in [`services`] as plain functions over record
//! snapshots loaded from a [`store::RecordStore`].

pub mod auth;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod uploads;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;
