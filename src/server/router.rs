use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, dashboard, document, health, notification, poll, schedule, user},
    docs::ApiDoc,
    state::AppState,
};

/// Every API route, with the OpenAPI paths collected alongside.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::root))
        .routes(routes!(health::health))
        .nest("/api/v1/auth", auth_routes())
        .nest("/api/v1/users", user_routes())
        .nest("/api/v1/dashboard", dashboard_routes())
        .nest("/api/v1/schedules", schedule_routes())
        .nest("/api/v1/documents", document_routes())
        .nest("/api/v1/polls", poll_routes())
        .nest("/api/v1/notifications", notification_routes())
}

/// The complete application: routes, Swagger UI, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let (router, openapi) = router().split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::google_login))
        .routes(routes!(auth::me))
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(user::get_users))
        .routes(routes!(user::update_profile))
        .routes(routes!(user::get_user))
}

fn dashboard_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(dashboard::get_stats))
        .routes(routes!(dashboard::get_activity))
}

fn schedule_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(schedule::get_schedules, schedule::create_schedule))
        .routes(routes!(
            schedule::get_schedule,
            schedule::update_schedule,
            schedule::delete_schedule
        ))
}

fn document_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(document::get_documents, document::create_document))
        .routes(routes!(document::import_from_drive))
        .routes(routes!(document::get_shared_with_me))
        .routes(routes!(document::get_document, document::delete_document))
        .routes(routes!(document::share_document))
}

fn poll_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(poll::get_polls, poll::create_poll))
        .routes(routes!(poll::get_poll))
        .routes(routes!(poll::vote))
        .routes(routes!(poll::close_poll))
}

fn notification_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(notification::get_notifications))
        .routes(routes!(notification::get_unread_count))
        .routes(routes!(notification::mark_read))
        .routes(routes!(notification::mark_all_read))
        .routes(routes!(notification::send_notification))
        .routes(routes!(notification::broadcast))
}
