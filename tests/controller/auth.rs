//! Tests for the signup, login and private endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::{
    model::auth::LoginPayload,
    server::controller::{
        auth::{login, private, signup},
        util::{auth::AuthUser, payload::Payload},
    },
};

use super::*;

/// Expect 200 with the created message for a new username
#[tokio::test]
async fn signup_creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = signup(State(test.into_app_state()), Payload(user_payload("luke")))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "El usuario fue creado con exito");

    Ok(())
}

/// Expect 400 when the username is already registered
#[tokio::test]
async fn signup_rejects_existing_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke")
        .build()
        .await?;

    let resp = signup(State(test.into_app_state()), Payload(user_payload("luke")))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "User exist in the system");

    Ok(())
}

/// Expect 400 listing the missing fields when the body is incomplete
#[tokio::test]
async fn signup_rejects_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let payload = UserPayload {
        username: Some("luke".to_string()),
        ..Default::default()
    };

    let resp = signup(State(test.into_app_state()), Payload(payload))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_msg(resp).await,
        "Missing required fields: email, password, first_name, last_name"
    );

    Ok(())
}

/// Expect signup then login to issue a token the private endpoint accepts for the same user
#[tokio::test]
async fn signup_login_token_authenticates_private() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state = test.into_app_state();

    let resp = signup(State(state.clone()), Payload(user_payload("leia")))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let payload = LoginPayload {
        username: Some("leia".to_string()),
        password: Some(TEST_PASSWORD.to_string()),
    };

    let resp = login(State(state.clone()), Payload(payload))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["user"]["username"], "leia");
    assert!(body["user"].get("password").is_none());

    let signed_up_id = body["user"]["id"].as_i64().unwrap_or_default();
    let token = body["access_token"].as_str().unwrap_or_default();
    let user_id = state.jwt.verify(token).expect("issued token should verify");
    assert_eq!(i64::from(user_id), signed_up_id);

    let resp = private(State(state), AuthUser(user_id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "true");
    assert_eq!(body["user"]["id"], user_id);

    Ok(())
}

/// Expect 401 for a wrong password and for an unknown username alike
#[tokio::test]
async fn login_rejects_bad_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("leia")
        .build()
        .await?;
    let state = test.into_app_state();

    for (username, password) in [("leia", "wrong_password"), ("vader", TEST_PASSWORD)] {
        let payload = LoginPayload {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        };

        let resp = login(State(state.clone()), Payload(payload))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_msg(resp).await, "Bad username or password");
    }

    Ok(())
}

/// Expect 404 when the token's user has since been deleted
#[tokio::test]
async fn private_rejects_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = private(State(test.into_app_state()), AuthUser(42))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
