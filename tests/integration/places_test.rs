//! Place API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::assert_error_response;
use crate::common::*;

#[tokio::test]
async fn test_create_place_with_defaults() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    let response = server
        .post("/places")
        .json(&json!({ "name": "H-Thai-ML", "cuisines": "Thai", "founded": 1989 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["placeId"].as_i64().unwrap() > 0);
    assert_eq!(body["name"], "H-Thai-ML");
    assert_eq!(body["pic"], "http://placekitten.com/400/400");
    assert_eq!(body["city"], "Anytown");
    assert_eq!(body["state"], "USA");
    assert_eq!(body["founded"], 1989);
}

#[tokio::test]
async fn test_create_place_overrides_defaults() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    let body: Value = server
        .post("/places")
        .json(&json!({
            "name": "Coding Cafe",
            "pic": "/images/cafe.jpg",
            "city": "Phoenix",
            "state": "AZ",
            "wifi": true
        }))
        .await
        .json();

    assert_eq!(body["pic"], "/images/cafe.jpg");
    assert_eq!(body["city"], "Phoenix");
    assert_eq!(body["state"], "AZ");
    assert_eq!(body["wifi"], true);
}

#[tokio::test]
async fn test_create_place_ignores_client_ids() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());
    db.insert_place_with_id(500, "Taken").await;

    let body: Value = server
        .post("/places")
        .json(&json!({ "name": "New", "placeId": 500 }))
        .await
        .json();

    assert_ne!(body["placeId"], 500);
    assert_eq!(db.count("places").await, 2);
}

#[tokio::test]
async fn test_create_place_rejects_wrong_types() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    let response = server
        .post("/places")
        .json(&json!({ "name": "Diner", "founded": "a while ago" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(db.count("places").await, 0);
}

#[tokio::test]
async fn test_create_place_rejects_non_object() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    let response = server.post("/places").json(&json!(["not", "an", "object"])).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_places() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    for name in ["First", "Second"] {
        server.post("/places").json(&json!({ "name": name })).await.assert_status_ok();
    }

    let body: Value = server.get("/places").await.json();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_list_places_empty() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    let body: Value = server.get("/places").await.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_place_with_comments_and_authors() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());
    let user = create_test_user(db.pool(), "test@example.com", "password123").await;
    db.insert_place_with_id(7, "Thai Place").await;

    login_with_session(&server, &user).await;
    server
        .post("/places/7/comments")
        .json(&json!({ "content": "Loved it", "stars": 5 }))
        .await
        .assert_status_ok();

    let body: Value = server.get("/places/7").await.json();
    assert_eq!(body["placeId"], 7);
    assert_eq!(body["name"], "Thai Place");

    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "Loved it");
    assert_eq!(comments[0]["author"]["userId"], user.user_id);
    assert!(comments[0]["author"].get("passwordDigest").is_none());
}

#[tokio::test]
async fn test_get_missing_place() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    assert_error_response!(
        server.get("/places/99").await,
        StatusCode::NOT_FOUND,
        "Could not find place with id \"99\""
    );
}

#[tokio::test]
async fn test_invalid_place_id() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    assert_error_response!(
        server.get("/places/abc").await,
        StatusCode::NOT_FOUND,
        "Invalid id \"NaN\""
    );
    assert_error_response!(
        server.delete("/places/abc").await,
        StatusCode::NOT_FOUND,
        "Invalid id \"NaN\""
    );
    assert_error_response!(
        server.put("/places/abc").json(&json!({ "name": "x" })).await,
        StatusCode::NOT_FOUND,
        "Invalid id \"NaN\""
    );
}

#[tokio::test]
async fn test_update_merges_submitted_keys() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    let created: Value = server
        .post("/places")
        .json(&json!({ "name": "Diner", "cuisines": "American", "founded": 1970, "wifi": false }))
        .await
        .json();
    let id = created["placeId"].as_i64().unwrap();

    let response = server
        .put(&format!("/places/{}", id))
        .json(&json!({ "name": "Night Diner", "wifi": true, "placeId": 1000 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["placeId"], id);
    assert_eq!(updated["name"], "Night Diner");
    assert_eq!(updated["cuisines"], "American");
    assert_eq!(updated["founded"], 1970);
    assert_eq!(updated["city"], "Anytown");
    assert_eq!(updated["wifi"], true);
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let reloaded: Value = server.get(&format!("/places/{}", id)).await.json();
    assert_eq!(reloaded["name"], "Night Diner");
}

#[tokio::test]
async fn test_update_missing_place() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    assert_error_response!(
        server.put("/places/42").json(&json!({ "name": "x" })).await,
        StatusCode::NOT_FOUND,
        "Could not find place with id \"42\""
    );
}

#[tokio::test]
async fn test_delete_place_returns_deleted_state() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());
    db.insert_place_with_id(3, "Doomed").await;

    let response = server.delete("/places/3").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["placeId"], 3);
    assert_eq!(body["name"], "Doomed");

    assert_eq!(db.count("places").await, 0);
    assert_eq!(server.get("/places/3").await.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_place() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    assert_error_response!(
        server.delete("/places/5").await,
        StatusCode::NOT_FOUND,
        "Could not find place with id \"5\""
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    assert_error_response!(
        server.get("/restaurants").await,
        StatusCode::NOT_FOUND,
        "Not found"
    );
}

#[tokio::test]
async fn test_unsupported_method_is_json() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());
    db.insert_place_with_id(7, "Thai Place").await;

    assert_error_response!(
        server.get("/places/7/comments").await,
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed"
    );
    assert_error_response!(
        server.patch("/places/7").json(&json!({ "name": "x" })).await,
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed"
    );
}

#[tokio::test]
async fn test_undecodable_place_id() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    assert_error_response!(
        server.get("/places/%FF").await,
        StatusCode::NOT_FOUND,
        "Invalid id \"NaN\""
    );
    assert_error_response!(
        server.delete("/places/7/comments/%C3%28").await,
        StatusCode::NOT_FOUND,
        "Invalid id \"NaN\""
    );
}
