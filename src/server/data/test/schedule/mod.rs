use chrono::{Duration, Utc};
use entity::schedule::ScheduleStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::schedule::ScheduleRepository,
    model::schedule::{ScheduleFilter, UpdateScheduleParams},
};

mod get_all;
mod update;
