//! OpenAPI document metadata.
//!
//! Paths are collected from the `#[utoipa::path]` handlers as they are registered in
//! `router::router()`.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::controller::{
    auth::AUTH_TAG, dashboard::DASHBOARD_TAG, document::DOCUMENT_TAG, health::HEALTH_TAG,
    notification::NOTIFICATION_TAG, poll::POLL_TAG, schedule::SCHEDULE_TAG, user::USER_TAG,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Next Step API", description = "School administration backend"),
    modifiers(&BearerAuth),
    tags(
        (name = AUTH_TAG, description = "Registration and login"),
        (name = USER_TAG, description = "User accounts and profiles"),
        (name = DASHBOARD_TAG, description = "Dashboard counters and activity feed"),
        (name = SCHEDULE_TAG, description = "Department schedules"),
        (name = DOCUMENT_TAG, description = "Documents, Drive imports and sharing"),
        (name = POLL_TAG, description = "Polls and voting"),
        (name = NOTIFICATION_TAG, description = "In-app notifications"),
        (name = HEALTH_TAG, description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` JWT scheme referenced by protected handlers.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
