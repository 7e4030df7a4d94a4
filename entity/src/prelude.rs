pub use super::activity::Entity as Activity;
pub use super::document::Entity as Document;
pub use super::document_share::Entity as DocumentShare;
pub use super::notification::Entity as Notification;
pub use super::poll::Entity as Poll;
pub use super::poll_vote::Entity as PollVote;
pub use super::schedule::Entity as Schedule;
pub use super::user::Entity as User;
