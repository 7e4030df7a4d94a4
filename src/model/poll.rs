use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PollOptionResultDto {
    pub id: i32,
    pub text: String,
    pub votes: u64,
    /// Share of all votes in percent, one decimal.
    pub percentage: f64,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PollDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub options: Vec<PollOptionResultDto>,
    pub is_active: bool,
    pub total_votes: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PollOptionDto {
    pub id: i32,
    pub text: String,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreatePollDto {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub options: Vec<PollOptionDto>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, ToSchema)]
pub struct VoteDto {
    pub option_id: i32,
}
