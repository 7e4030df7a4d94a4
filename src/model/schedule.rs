use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleStatusDto {
    Active,
    Draft,
    Archived,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub id: String,
    pub department: String,
    pub class_count: i32,
    pub staff_count: i32,
    pub status: ScheduleStatusDto,
    pub last_updated: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateScheduleDto {
    pub department: String,
    #[serde(default)]
    pub class_count: i32,
    #[serde(default)]
    pub staff_count: i32,
    pub status: Option<ScheduleStatusDto>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateScheduleDto {
    pub department: Option<String>,
    pub class_count: Option<i32>,
    pub staff_count: Option<i32>,
    pub status: Option<ScheduleStatusDto>,
}
