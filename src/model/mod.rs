//! Wire DTOs for requests and responses.
//!
//! Response bodies use camelCase field names; request bodies keep snake_case except where
//! the mobile client sends camelCase (`idToken`).

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod document;
pub mod notification;
pub mod poll;
pub mod schedule;
pub mod user;
