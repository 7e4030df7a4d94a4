use axum::http::{Method, StatusCode};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use super::{send, token_for};

/// Tests the schedule lifecycle through the API as an admin.
///
/// Expected: 201 on create, 200 on update, 204 on delete, then 404
#[tokio::test]
async fn admin_manages_schedule() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .with_table(entity::prelude::Activity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await.unwrap();
    let token = token_for(admin.id);

    let (status, created) = send(
        db,
        Method::POST,
        "/api/v1/schedules",
        Some(&token),
        Some(json!({ "department": "Science", "class_count": 4 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["department"], "Science");
    assert_eq!(created["status"], "Active");
    assert_eq!(created["classCount"], 4);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        db,
        Method::PUT,
        &format!("/api/v1/schedules/{}", id),
        Some(&token),
        Some(json!({ "status": "Archived" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "Archived");

    let (status, body) = send(
        db,
        Method::DELETE,
        &format!("/api/v1/schedules/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, body) = send(
        db,
        Method::GET,
        &format!("/api/v1/schedules/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Schedule not found");
}

#[tokio::test]
async fn student_cannot_create_schedule() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .with_table(entity::prelude::Activity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_user(db).await.unwrap();

    let (status, _) = send(
        db,
        Method::POST,
        "/api/v1/schedules",
        Some(&token_for(student.id)),
        Some(json!({ "department": "Art" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

/// Tests listing filters by status and requires a token.
///
/// Expected: 401 anonymously, 200 with only archived schedules otherwise
#[tokio::test]
async fn list_filters_by_status() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.unwrap();
    factory::schedule::ScheduleFactory::new(db)
        .department("Music")
        .status(entity::schedule::ScheduleStatus::Archived)
        .build()
        .await
        .unwrap();
    factory::create_schedule(db).await.unwrap();

    let (status, _) = send(db, Method::GET, "/api/v1/schedules", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        db,
        Method::GET,
        "/api/v1/schedules?status=Archived",
        Some(&token_for(user.id)),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let schedules = body.as_array().unwrap();
    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0]["department"], "Music");
}

/// Tests status values outside the known set and an empty status.
///
/// Expected: 200 with no schedules for `Pending`, 200 with every schedule for `status=`
#[tokio::test]
async fn list_with_unknown_or_empty_status() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let token = token_for(factory::create_user(db).await.unwrap().id);
    factory::create_schedule(db).await.unwrap();
    factory::schedule::ScheduleFactory::new(db)
        .status(entity::schedule::ScheduleStatus::Draft)
        .build()
        .await
        .unwrap();

    let (status, body) = send(
        db,
        Method::GET,
        "/api/v1/schedules?status=Pending",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) =
        send(db, Method::GET, "/api/v1/schedules?status=", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}
