//! Next Step Test Utils
//!
//! Shared testing utilities for the Next Step API. Tests get an in-memory SQLite database
//! whose schema is generated straight from the SeaORM entities, plus factories that insert
//! rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for choosing which tables a test needs
//! - **TestContext**: Holds the database connection for the test
//! - **TestError**: Errors raised while setting the context up
//! - **factory**: Builders that insert users, schedules, documents, polls and notifications
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn finds_user() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_table(User).build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
