//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data boundary, services work
//! with them, and controllers convert them into DTOs with `into_dto()`.

pub mod activity;
pub mod auth;
pub mod dashboard;
pub mod document;
pub mod notification;
pub mod page;
pub mod poll;
pub mod schedule;
pub mod user;
