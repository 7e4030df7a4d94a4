//! Query string parameters shared by the list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::notification::NotificationKindDto,
    server::model::page::Page,
};

fn default_limit() -> u64 {
    50
}

fn default_activity_limit() -> u64 {
    20
}

/// `skip`/`limit` pagination, limit capped at 100.
#[derive(Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParam {
    /// Rows to skip (default 0)
    #[serde(default)]
    pub skip: u64,
    /// Rows to return, 1 to 100 (default 50)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
}

impl PageParam {
    pub fn page(&self) -> Page {
        Page::new(self.skip, self.limit)
    }
}

#[derive(Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListParam {
    /// Exact department match
    pub department: Option<String>,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
}

#[derive(Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActivityParam {
    /// Entries to return, 1 to 100 (default 20)
    #[serde(default = "default_activity_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScheduleListParam {
    /// Case-insensitive substring of the department
    pub search: Option<String>,
    /// `Active`, `Draft` or `Archived`; other values match no schedule
    pub status: Option<String>,
}

#[derive(Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DocumentListParam {
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive substring of the title
    pub search: Option<String>,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PollListParam {
    /// `active`, `completed`, anything else for all
    pub status: Option<String>,
}

#[derive(Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NotificationListParam {
    #[serde(default)]
    pub unread_only: bool,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BroadcastParam {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub notification_type: NotificationKindDto,
}
