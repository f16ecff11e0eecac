//! Tests for the planet endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::controller::{
    planet::{create_planet, delete_planet, get_planet, list_planets, update_planet},
    util::{path::Path, payload::Payload},
};

use super::*;

/// Expect the second create with the same name to be rejected
#[tokio::test]
async fn create_rejects_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state = test.into_app_state();

    let resp = create_planet(State(state.clone()), Payload(planet_payload("Tatooine")))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "El planeta fue creado con exito");

    let resp = create_planet(State(state), Payload(planet_payload("Tatooine")))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "El planeta ya existe en el sistema");

    Ok(())
}

/// Expect the listed planets to include every inserted planet
#[tokio::test]
async fn list_returns_all_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_planet("Tatooine")
        .with_planet("Alderaan")
        .build()
        .await?;

    let resp = list_planets(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect 400 with the not found message for an unknown ID
#[tokio::test]
async fn get_rejects_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = get_planet(State(test.into_app_state()), Path(7))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "Planeta no existe");

    Ok(())
}

/// Expect updated fields to be returned by a following get
#[tokio::test]
async fn update_replaces_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let planet = test.catalogue().insert_mock_planet("Tatooine").await?;
    let state = test.into_app_state();

    let mut payload = planet_payload("Tatooine");
    payload.population = Some(120000);

    let resp = update_planet(State(state.clone()), Path(planet.id), Payload(payload))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "El planeta fue modificado con exito");

    let resp = get_planet(State(state), Path(planet.id))
        .await
        .into_response();
    assert_eq!(body_json(resp).await["population"], 120000);

    Ok(())
}

/// Expect deleting a planet to also remove it from users' favorites
#[tokio::test]
async fn delete_removes_favorites_of_planet() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalogue().insert_mock_planet("Tatooine").await?;
    test.favorite()
        .insert_favorite(user.id, entity::favorite::FavoriteKind::Planet, planet.id)
        .await?;
    let state = test.into_app_state();

    let resp = delete_planet(State(state.clone()), Path(planet.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "Eliminación correcta de Planeta");

    let resp = holocron::server::controller::favorite::list_favorites(State(state))
        .await
        .into_response();
    assert_eq!(body_json(resp).await.as_array().map(Vec::len), Some(0));

    Ok(())
}
