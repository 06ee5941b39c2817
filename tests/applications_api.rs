mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::common::{application, error_message, TestApp};

#[sqlx::test(migrator = "job_tracker::MIGRATOR")]
async fn list_is_empty_for_new_user(pool: SqlitePool) {
    let app = TestApp::new(pool);
    let token = app.register_and_login("alice").await;

    let (status, list_json) = app.get_json("/applications", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list_json, json!({ "results": [] }));
}

#[sqlx::test(migrator = "job_tracker::MIGRATOR")]
async fn users_only_see_their_own_applications(pool: SqlitePool) {
    let app = TestApp::new(pool);
    let alice = app.register_and_login("alice").await;
    let bob = app.register_and_login("bob").await;

    let a1 = app
        .add_application(&alice, application("Alice 1", "2024-05-01"))
        .await;
    let b1 = app
        .add_application(&bob, application("Bob 1", "2024-05-02"))
        .await;
    let a2 = app
        .add_application(&alice, application("Alice 2", "2024-05-03"))
        .await;

    assert_eq!(app.list_ids(&alice).await, vec![a2, a1]);
    assert_eq!(app.list_ids(&bob).await, vec![b1]);
}

#[sqlx::test(migrator = "job_tracker::MIGRATOR")]
async fn list_orders_by_application_date_then_id_descending(pool: SqlitePool) {
    let app = TestApp::new(pool);
    let token = app.register_and_login("alice").await;

    let older = app
        .add_application(&token, application("Older", "2024-01-10"))
        .await;
    let newer = app
        .add_application(&token, application("Newer", "2024-03-01"))
        .await;
    let same_day = app
        .add_application(&token, application("Same day", "2024-01-10"))
        .await;

    assert_eq!(app.list_ids(&token).await, vec![newer, same_day, older]);
}

#[sqlx::test(migrator = "job_tracker::MIGRATOR")]
async fn add_normalizes_blank_optional_fields(pool: SqlitePool) {
    let app = TestApp::new(pool);
    let token = app.register_and_login("alice").await;

    app.add_application(
        &token,
        json!({
            "job_title": "Eng",
            "company_name": "Acme",
            "status": "Gave up",
            "notes": "   ",
            "job_url": "",
            "resume_version": " v2 ",
            "is_marked": 1
        }),
    )
    .await;

    let (_, list_json) = app.get_json("/applications", Some(&token)).await;
    let row = &list_json["results"][0];
    assert_eq!(row["notes"], Value::Null);
    assert_eq!(row["job_url"], Value::Null);
    assert_eq!(row["resume_version"], " v2 ");
    assert_eq!(row["status"], "Gave up");
    assert_eq!(row["is_marked"], 1);
}

#[sqlx::test(migrator = "job_tracker::MIGRATOR")]
async fn add_rejects_invalid_payloads(pool: SqlitePool) {
    let app = TestApp::new(pool);
    let token = app.register_and_login("alice").await;

    let (status, error_json) = app
        .post_json(
            "/applications/add",
            json!({ "company_name": "Acme", "status": "Applied" }),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&error_json),
        Some("Missing required field: job_title")
    );

    let (status, _) = app
        .post_json(
            "/applications/add",
            json!({ "job_title": "Eng", "company_name": "Acme", "status": "Ghosted" }),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post_json(
            "/applications/add",
            json!({
                "job_title": "Eng",
                "company_name": "Acme",
                "status": "Applied",
                "is_marked": "maybe"
            }),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(app.list_ids(&token).await.is_empty());
}

#[sqlx::test(migrator = "job_tracker::MIGRATOR")]
async fn edit_updates_every_field_of_own_application(pool: SqlitePool) {
    let app = TestApp::new(pool);
    let token = app.register_and_login("alice").await;
    let id = app
        .add_application(&token, application("Eng", "2024-05-01"))
        .await;

    let (status, edit_json) = app
        .post_json(
            "/applications/edit",
            json!({
                "id": id,
                "job_title": "Senior Eng",
                "company_name": "Acme",
                "status": "Interviewing",
                "notes": "onsite next week",
                "is_marked": true
            }),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edit_json, json!({ "success": true }));

    let (_, list_json) = app.get_json("/applications", Some(&token)).await;
    let row = &list_json["results"][0];
    assert_eq!(row["job_title"], "Senior Eng");
    assert_eq!(row["status"], "Interviewing");
    assert_eq!(row["notes"], "onsite next week");
    assert_eq!(row["is_marked"], 1);
    // full update: fields left out of the body are cleared
    assert_eq!(row["application_date"], Value::Null);
}

#[sqlx::test(migrator = "job_tracker::MIGRATOR")]
async fn edit_cannot_touch_another_users_application(pool: SqlitePool) {
    let app = TestApp::new(pool);
    let alice = app.register_and_login("alice").await;
    let mallory = app.register_and_login("mallory").await;
    let id = app
        .add_application(&alice, application("Eng", "2024-05-01"))
        .await;

    let (status, _) = app
        .post_json(
            "/applications/edit",
            json!({
                "id": id,
                "job_title": "Hijacked",
                "company_name": "Evil",
                "status": "Rejected"
            }),
            Some(&mallory),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list_json) = app.get_json("/applications", Some(&alice)).await;
    assert_eq!(list_json["results"][0]["job_title"], "Eng");
}

#[sqlx::test(migrator = "job_tracker::MIGRATOR")]
async fn edit_without_id_returns_bad_request(pool: SqlitePool) {
    let app = TestApp::new(pool);
    let token = app.register_and_login("alice").await;

    let (status, _) = app
        .post_json(
            "/applications/edit",
            application("Eng", "2024-05-01"),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrator = "job_tracker::MIGRATOR")]
async fn deleting_the_same_id_twice_counts_once(pool: SqlitePool) {
    let app = TestApp::new(pool);
    let token = app.register_and_login("alice").await;
    let id = app
        .add_application(&token, application("Eng", "2024-05-01"))
        .await;

    let (status, delete_json) = app
        .post_json(
            "/applications/delete",
            json!({ "application_id": [id] }),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(delete_json, json!({ "success": 1 }));

    let (status, delete_json) = app
        .post_json(
            "/applications/delete",
            json!({ "application_id": [id] }),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(delete_json, json!({ "success": 0 }));
}

#[sqlx::test(migrator = "job_tracker::MIGRATOR")]
async fn bulk_delete_skips_foreign_and_unknown_ids(pool: SqlitePool) {
    let app = TestApp::new(pool);
    let alice = app.register_and_login("alice").await;
    let bob = app.register_and_login("bob").await;

    let a1 = app
        .add_application(&alice, application("A1", "2024-05-01"))
        .await;
    let a2 = app
        .add_application(&alice, application("A2", "2024-05-02"))
        .await;
    let b1 = app
        .add_application(&bob, application("B1", "2024-05-03"))
        .await;

    let (status, delete_json) = app
        .post_json(
            "/applications/delete",
            json!({ "application_id": [a1, b1, 9999, a2] }),
            Some(&alice),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(delete_json, json!({ "success": 2 }));

    assert!(app.list_ids(&alice).await.is_empty());
    assert_eq!(app.list_ids(&bob).await, vec![b1]);
}

#[sqlx::test(migrator = "job_tracker::MIGRATOR")]
async fn delete_requires_an_id_array(pool: SqlitePool) {
    let app = TestApp::new(pool);
    let token = app.register_and_login("alice").await;

    let (status, _) = app
        .post_json("/applications/delete", json!({}), Some(&token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post_json(
            "/applications/delete",
            json!({ "application_id": 3 }),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
