//! Database repository layer.
//!
//! One repository per table. Each borrows any `ConnectionTrait` so services can run several
//! repositories inside one transaction, and returns domain models from `server::model`.

pub mod activity;
pub mod document;
pub mod notification;
pub mod poll;
pub mod schedule;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::sea_query::{Expr, ExprTrait, Func, IntoColumnRef};

/// `LOWER(column) LIKE '%needle%'`, portable across SQLite and Postgres.
pub(crate) fn contains_ignore_case<C>(column: C, needle: &str) -> Expr
where
    C: IntoColumnRef,
{
    Expr::expr(Func::lower(Expr::col(column))).like(format!("%{}%", needle.to_lowercase()))
}
