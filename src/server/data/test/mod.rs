mod document;
mod notification;
mod poll;
mod schedule;
mod user;
