use chrono::{Duration, Utc};
use entity::poll::PollOption;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::poll::PollRepository,
    model::poll::{CreatePollParams, PollStatusFilter},
};

mod create;
mod find_with_results;
mod get_all_with_results;
