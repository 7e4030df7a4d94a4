use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_staff: u64,
    /// e.g. `"+12 this month"`
    pub staff_trend: String,
    pub active_schedules: u64,
    pub notifications_sent: u64,
    pub total_documents: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ActivityDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}
