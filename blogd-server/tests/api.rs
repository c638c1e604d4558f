//! End-to-end route tests against an in-memory database.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use blogd_server::db::{migrations, pool::create_pool_with_options};
use blogd_server::{build_router, AppState};

async fn test_app() -> Router {
    // One connection keeps every request on the same in-memory DB.
    let pool = create_pool_with_options("sqlite::memory:", 1)
        .await
        .expect("pool");
    migrations::run(&pool).await.expect("migrations");
    build_router(AppState::new(pool))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_user(app: &Router, name: &str, email: &str) -> Value {
    let response = send(
        app,
        "POST",
        "/api/users",
        Some(json!({"name": name, "email": email, "password": "secret1"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn health_is_ok() {
    let app = test_app().await;
    let response = send(&app, "GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn list_endpoints_start_empty_with_envelope() {
    let app = test_app().await;
    for uri in [
        "/api/users",
        "/api/posts",
        "/api/comments",
        "/api/likes",
    ] {
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["result"], 200);
        assert_eq!(body["data"], json!([]));
    }
}

#[tokio::test]
async fn user_create_then_get_round_trips() {
    let app = test_app().await;
    let created = create_user(&app, "Ann", "ann@x.com").await;
    assert_eq!(created["result"], 200);
    assert!(created["data"]["id"].is_i64());
    assert_eq!(created["data"]["email"], "ann@x.com");

    let id = created["data"]["id"].as_i64().unwrap();
    let response = send(&app, "GET", &format!("/api/users/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Ann");
    assert_eq!(body["data"]["password"], "secret1");
}

#[tokio::test]
async fn blog_scenario_create_include_delete() {
    let app = test_app().await;
    let ann = create_user(&app, "Ann", "ann@x.com").await;
    let ann_id = ann["data"]["id"].as_i64().unwrap();

    let response = send(
        &app,
        "POST",
        "/api/posts",
        Some(json!({"title": "T", "content": "C", "userId": ann_id})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let post = body_json(response).await;
    assert_eq!(post["data"]["userId"], ann_id);
    assert_eq!(post["data"]["published"], false);
    let post_id = post["data"]["id"].as_i64().unwrap();

    // Include projection: owning user attached, collections empty.
    let response = send(&app, "GET", &format!("/api/posts/{post_id}/include"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let loaded = body_json(response).await;
    assert_eq!(loaded["data"]["User"]["email"], "ann@x.com");
    assert_eq!(loaded["data"]["Comments"], json!([]));
    assert_eq!(loaded["data"]["Likes"], json!([]));

    let response = send(&app, "DELETE", &format!("/api/posts/{post_id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let deleted = body_json(response).await;
    assert_eq!(deleted["data"], 1);

    let response = send(&app, "GET", &format!("/api/posts/{post_id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn comment_validation_always_names_missing_content() {
    let app = test_app().await;
    for body in [
        json!({}),
        json!({"postId": 1}),
        json!({"postId": 1, "userId": 2}),
    ] {
        let response = send(&app, "POST", "/api/comments", Some(body)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let errors = body_json(response).await;
        let named: Vec<&str> = errors["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["param"].as_str().unwrap())
            .collect();
        assert!(named.contains(&"content"));
    }
}

#[tokio::test]
async fn validation_failure_performs_no_side_effect() {
    let app = test_app().await;
    let response = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({"name": "Ann", "email": "bad", "password": "secret1"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = send(&app, "GET", "/api/users", None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn non_numeric_id_is_rejected_on_every_single_resource_route() {
    let app = test_app().await;
    for uri in [
        "/api/users/abc",
        "/api/posts/abc",
        "/api/comments/abc",
        "/api/likes/abc",
        "/api/posts/abc/include",
    ] {
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["location"], "params");
        assert_eq!(body["errors"][0]["msg"], "id should be numeric");
    }
}

#[tokio::test]
async fn absent_ids_map_to_404() {
    let app = test_app().await;

    let response = send(&app, "GET", "/api/users/99", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(
        &app,
        "PUT",
        "/api/users/99",
        Some(json!({"name": "X", "email": "x@x.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "DELETE", "/api/users/99", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_echoes_affected_count() {
    let app = test_app().await;
    let ann = create_user(&app, "Ann", "ann@x.com").await;
    let id = ann["data"]["id"].as_i64().unwrap();

    let response = send(
        &app,
        "PUT",
        &format!("/api/users/{id}"),
        Some(json!({"name": "Anne", "email": "ann@x.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"], 1);

    let response = send(&app, "GET", &format!("/api/users/{id}"), None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Anne");
}

#[tokio::test]
async fn duplicate_email_surfaces_as_500() {
    let app = test_app().await;
    create_user(&app, "Ann", "ann@x.com").await;

    let response = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({"name": "Ann2", "email": "ann@x.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Internal Server Error");
}

#[tokio::test]
async fn like_create_answers_201_and_include_uses_inverted_path() {
    let app = test_app().await;
    let ann = create_user(&app, "Ann", "ann@x.com").await;
    let ann_id = ann["data"]["id"].as_i64().unwrap();

    let response = send(
        &app,
        "POST",
        "/api/posts",
        Some(json!({"title": "T", "content": "C", "userId": ann_id})),
    )
    .await;
    let post_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = send(
        &app,
        "POST",
        "/api/likes",
        Some(json!({"postId": post_id, "userId": ann_id})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let like = body_json(response).await;
    assert_eq!(like["result"], 201);
    let like_id = like["data"]["id"].as_i64().unwrap();

    let response = send(&app, "GET", &format!("/api/likes/include/{like_id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let loaded = body_json(response).await;
    assert_eq!(loaded["data"]["Post"]["id"], post_id);
    assert_eq!(loaded["data"]["User"]["id"], ann_id);
}

#[tokio::test]
async fn fk_filters_answer_200_with_empty_lists() {
    let app = test_app().await;
    for uri in [
        "/api/posts/user/42",
        "/api/comments/post/42",
        "/api/comments/user/42",
        "/api/likes/post/42",
        "/api/likes/user/42",
    ] {
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body["data"], json!([]), "{uri}");
    }
}

#[tokio::test]
async fn malformed_json_body_is_400() {
    let app = test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid JSON");
}

#[tokio::test]
async fn missing_content_type_falls_through_to_validation() {
    let app = test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/comments")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unmatched_route_gets_the_catch_all_body() {
    let app = test_app().await;
    let response = send(&app, "GET", "/api/nothing-here", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Internal Server Error");
}
