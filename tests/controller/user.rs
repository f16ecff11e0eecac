//! Tests for the user endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::controller::{
    user::{create_user, delete_user, get_user, list_users, update_user},
    util::{path::Path, payload::Payload},
};

use super::*;

/// Expect serialized users to never include a password
#[tokio::test]
async fn list_omits_passwords() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke")
        .with_user("leia")
        .build()
        .await?;

    let resp = list_users(State(test.into_app_state()))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let users = body.as_array().cloned().unwrap_or_default();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|user| user.get("password").is_none()));

    Ok(())
}

/// Expect 400 when the email is already used by another user
#[tokio::test]
async fn create_rejects_taken_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke")
        .build()
        .await?;

    let mut payload = user_payload("lukas");
    payload.email = Some("luke@holocron.test".to_string());

    let resp = create_user(State(test.into_app_state()), Payload(payload))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "User exist in the system");

    Ok(())
}

/// Expect an update keeping the user's own username to succeed
#[tokio::test]
async fn update_keeps_own_username() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let state = test.into_app_state();

    let mut payload = user_payload("luke");
    payload.first_name = Some("Lucas".to_string());

    let resp = update_user(State(state.clone()), Path(user.id), Payload(payload))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "El usuario fue modificado con exito");

    let resp = get_user(State(state), Path(user.id)).await.into_response();
    assert_eq!(body_json(resp).await["first_name"], "Lucas");

    Ok(())
}

/// Expect the user's favorites to be removed with the user
#[tokio::test]
async fn delete_removes_user_and_favorites() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let vehicle = test.catalogue().insert_mock_vehicle("Sand Crawler").await?;
    test.favorite()
        .insert_favorite(user.id, entity::favorite::FavoriteKind::Vehicle, vehicle.id)
        .await?;
    let state = test.into_app_state();

    let resp = delete_user(State(state.clone()), Path(user.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "Eliminación correcta de Usuario");

    let resp = get_user(State(state.clone()), Path(user.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "Usuario no existe");

    let resp = holocron::server::controller::favorite::list_favorites(State(state))
        .await
        .into_response();
    assert_eq!(body_json(resp).await.as_array().map(Vec::len), Some(0));

    Ok(())
}
