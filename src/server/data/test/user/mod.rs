use chrono::{Duration, Utc};
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::user::UserRepository,
    model::{
        page::Page,
        user::{CreateUserParams, UpdateProfileParams, UserFilter},
    },
};

mod create;
mod find_missing_ids;
mod get_all;
mod link_google_account;
mod update_profile;
