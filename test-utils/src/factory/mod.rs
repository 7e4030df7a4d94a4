//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` shorthand that
//! inserts a row with defaults. Foreign keys are passed in explicitly, so create the parent
//! rows (usually a user) first.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let admin = factory::user::UserFactory::new(&db).admin().build().await?;
//! let poll = factory::poll::PollFactory::new(&db, admin.id)
//!     .option(1, "Yes")
//!     .option(2, "No")
//!     .build()
//!     .await?;
//! factory::create_vote(&db, poll.id, admin.id, 1).await?;
//! ```

pub mod activity;
pub mod document;
pub mod helpers;
pub mod notification;
pub mod poll;
pub mod schedule;
pub mod user;

pub use activity::create_activity;
pub use document::{create_document, create_share};
pub use notification::create_notification;
pub use poll::{create_poll, create_vote};
pub use schedule::create_schedule;
pub use user::{create_admin, create_user};
