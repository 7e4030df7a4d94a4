//! SeaORM entity definitions for every table the API persists.

pub mod prelude;

pub mod activity;
pub mod document;
pub mod document_share;
pub mod notification;
pub mod poll;
pub mod poll_vote;
pub mod schedule;
pub mod user;
