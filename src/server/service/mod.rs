//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. They enforce each resource's rules
//! (poll still open, caller may share a document, ...) and wrap every mutation together
//! with its activity feed entry in one database transaction.

pub mod auth;
pub mod dashboard;
pub mod document;
pub mod notification;
pub mod poll;
pub mod schedule;
pub mod user;

#[cfg(test)]
mod test;
