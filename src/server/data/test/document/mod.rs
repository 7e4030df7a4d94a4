use chrono::{Duration, Utc};
use entity::document::DocumentSource;
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::document::DocumentRepository,
    model::{
        document::{CreateDocumentParams, DocumentFilter},
        page::Page,
    },
};

mod create;
mod get_all;
mod get_shared_with;
