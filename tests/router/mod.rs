//! Requests sent through the full router, covering extractor rejections and the
//! OpenAPI document.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use holocron::server::router::routes;
use holocron_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_json, body_msg, TestContextExt};

fn app(test: &TestContext) -> Router {
    routes().with_state(test.into_app_state())
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn get_request(uri: &str, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);

    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::empty()).expect("request should build")
}

/// Expect 401 when the Authorization header is absent
#[tokio::test]
async fn private_without_token_is_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test)
        .oneshot(get_request("/private", None))
        .await
        .expect("router is infallible");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_msg(resp).await, "Missing Authorization Header");

    Ok(())
}

/// Expect 401 for a token that is not a valid JWT
#[tokio::test]
async fn private_with_garbage_token_is_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test)
        .oneshot(get_request("/private", Some("not.a.token")))
        .await
        .expect("router is infallible");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_msg(resp).await, "Invalid token");

    Ok(())
}

/// Expect a token from signing up then logging in to authenticate as the new user
#[tokio::test]
async fn signup_login_then_private() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    let signup_body = format!(
        r#"{{"username":"han","email":"han@falcon.test","password":"{}","first_name":"Han","last_name":"Solo"}}"#,
        TEST_PASSWORD
    );
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/signup", &signup_body))
        .await
        .expect("router is infallible");
    assert_eq!(resp.status(), StatusCode::OK);

    let login_body = format!(r#"{{"username":"han","password":"{}"}}"#, TEST_PASSWORD);
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/login", &login_body))
        .await
        .expect("router is infallible");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let user_id = body["user"]["id"].clone();
    let token = body["access_token"].as_str().unwrap_or_default().to_string();

    let resp = app
        .oneshot(get_request("/private", Some(&token)))
        .await
        .expect("router is infallible");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["user"]["id"], user_id);
    assert_eq!(body["user"]["username"], "han");

    Ok(())
}

/// Expect a non-numeric ID to be rendered as a 400 message
#[tokio::test]
async fn non_numeric_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test)
        .oneshot(get_request("/planets/abc", None))
        .await
        .expect("router is infallible");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_msg(resp).await.starts_with("Invalid path parameter"));

    Ok(())
}

/// Expect an ID outside the i32 range to be rendered as a 400 message
#[tokio::test]
async fn out_of_range_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test)
        .oneshot(get_request("/users/99999999999/favorite", None))
        .await
        .expect("router is infallible");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_msg(resp).await.starts_with("Invalid path parameter"));

    Ok(())
}

/// Expect missing fields to be reported together in one 400 message
#[tokio::test]
async fn create_planet_reports_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request("POST", "/planets", r#"{"name":"Tatooine"}"#))
        .await
        .expect("router is infallible");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let msg = body_msg(resp).await;
    assert!(msg.starts_with("Missing required fields:"));
    assert!(msg.contains("diameter"));
    assert!(msg.contains("surface_water"));
    assert!(!msg.contains("name"));

    Ok(())
}

/// Expect a body that is not JSON to be rendered as a 400 message
#[tokio::test]
async fn malformed_body_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request("POST", "/vehicles", "{not json"))
        .await
        .expect("router is infallible");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_msg(resp).await.starts_with("Invalid request body"));

    Ok(())
}

/// Expect the favorite routes to parse both path segments
#[tokio::test]
async fn add_favorite_through_router() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalogue().insert_mock_planet("Tatooine").await?;

    let uri = format!("/users/{}/favorite/planet", user.id);
    let body = format!(r#"{{"planet_id":{}}}"#, planet.id);

    let resp = app(&test)
        .oneshot(json_request("POST", &uri, &body))
        .await
        .expect("router is infallible");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "Planeta agregado a favorito con Exito");

    Ok(())
}

/// Expect the OpenAPI document to describe every route and the bearer scheme
#[tokio::test]
async fn openapi_document_is_served() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test)
        .oneshot(get_request("/api/docs/openapi.json", None))
        .await
        .expect("router is infallible");
    assert_eq!(resp.status(), StatusCode::OK);

    let doc = body_json(resp).await;
    for path in [
        "/signup",
        "/login",
        "/private",
        "/users",
        "/users/{id}",
        "/people/{id}",
        "/planets/{id}",
        "/vehicles/{id}",
        "/favorite",
        "/favorite/{id}",
        "/users/{id}/favorite",
        "/users/{id}/favorite/{kind}",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing path {}", path);
    }
    assert!(doc["components"]["securitySchemes"]
        .get("bearer_auth")
        .is_some());

    Ok(())
}
