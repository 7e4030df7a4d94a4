//! HTTP handlers.
//!
//! Each handler authenticates through `AuthGuard`, converts DTOs into domain params, calls a
//! service and converts the result back into a DTO.

pub mod auth;
pub mod dashboard;
pub mod document;
pub mod extract;
pub mod health;
pub mod notification;
pub mod param;
pub mod poll;
pub mod schedule;
pub mod user;

#[cfg(test)]
mod test;
