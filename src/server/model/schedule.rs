//! Department schedule domain models and parameters.

use chrono::{DateTime, Utc};
use entity::schedule::ScheduleStatus;

use crate::model::schedule::{ScheduleDto, ScheduleStatusDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: i32,
    pub department: String,
    pub class_count: i32,
    pub staff_count: i32,
    pub status: ScheduleStatus,
    pub last_updated: DateTime<Utc>,
}

impl Schedule {
    pub fn from_entity(entity: entity::schedule::Model) -> Self {
        Self {
            id: entity.id,
            department: entity.department,
            class_count: entity.class_count,
            staff_count: entity.staff_count,
            status: entity.status,
            last_updated: entity.last_updated,
        }
    }

    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            id: self.id.to_string(),
            department: self.department,
            class_count: self.class_count,
            staff_count: self.staff_count,
            status: ScheduleStatusDto::from(self.status),
            last_updated: self.last_updated,
        }
    }
}

impl From<ScheduleStatusDto> for ScheduleStatus {
    fn from(status: ScheduleStatusDto) -> Self {
        match status {
            ScheduleStatusDto::Active => ScheduleStatus::Active,
            ScheduleStatusDto::Draft => ScheduleStatus::Draft,
            ScheduleStatusDto::Archived => ScheduleStatus::Archived,
        }
    }
}

impl From<ScheduleStatus> for ScheduleStatusDto {
    fn from(status: ScheduleStatus) -> Self {
        match status {
            ScheduleStatus::Active => ScheduleStatusDto::Active,
            ScheduleStatus::Draft => ScheduleStatusDto::Draft,
            ScheduleStatus::Archived => ScheduleStatusDto::Archived,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateScheduleParams {
    pub department: String,
    pub class_count: i32,
    pub staff_count: i32,
    pub status: ScheduleStatus,
}

/// Partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateScheduleParams {
    pub department: Option<String>,
    pub class_count: Option<i32>,
    pub staff_count: Option<i32>,
    pub status: Option<ScheduleStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    /// Case-insensitive substring of the department.
    pub search: Option<String>,
    pub status: Option<ScheduleStatus>,
}

/// `status` value of the schedule list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatusQuery {
    /// Absent or empty.
    Any,
    Exactly(ScheduleStatus),
    /// Not a status name; matches nothing.
    Unknown,
}

impl ScheduleStatusQuery {
    /// Names are matched exactly, so `active` is unknown.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") => Self::Any,
            Some("Active") => Self::Exactly(ScheduleStatus::Active),
            Some("Draft") => Self::Exactly(ScheduleStatus::Draft),
            Some("Archived") => Self::Exactly(ScheduleStatus::Archived),
            Some(_) => Self::Unknown,
        }
    }
}
