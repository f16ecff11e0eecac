//! Tests for the favorite endpoints.
//!
//! Covers adding and removing each kind of favorite, duplicate and missing favorites,
//! unknown users or targets and malformed `{kind}` segments.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::{
    model::favorite::FavoriteTargetPayload,
    server::controller::{
        favorite::{
            add_favorite, delete_favorite, list_favorites, list_user_favorites, remove_favorite,
        },
        util::{path::Path, payload::Payload},
    },
};

use super::*;

fn planet_target(planet_id: i32) -> FavoriteTargetPayload {
    FavoriteTargetPayload {
        planet_id: Some(planet_id),
        ..Default::default()
    }
}

/// Expect the added planet to show up in the user's favorites
#[tokio::test]
async fn add_planet_then_list_for_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalogue().insert_mock_planet("Tatooine").await?;
    let state = test.into_app_state();

    let resp = add_favorite(
        State(state.clone()),
        Path((user.id, "planet".to_string())),
        Payload(planet_target(planet.id)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "Planeta agregado a favorito con Exito");

    let resp = list_user_favorites(State(state), Path(user.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["kind"], "planet");
    assert_eq!(body[0]["target_id"], planet.id);
    assert_eq!(body[0]["user_id"], user.id);

    Ok(())
}

/// Expect the second add of the same target to be rejected
#[tokio::test]
async fn add_rejects_duplicate() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let person = test
        .catalogue()
        .insert_mock_person("Luke Skywalker", None)
        .await?;
    let state = test.into_app_state();

    let target = FavoriteTargetPayload {
        people_id: Some(person.id),
        ..Default::default()
    };

    let resp = add_favorite(
        State(state.clone()),
        Path((user.id, "people".to_string())),
        Payload(target.clone()),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "Personaje agregado a favorito con Exito");

    let resp = add_favorite(
        State(state),
        Path((user.id, "people".to_string())),
        Payload(target),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_msg(resp).await,
        "Ese usuario ya cuenta con ese personaje en favorito"
    );

    Ok(())
}

/// Expect add then remove to leave the user without favorites, and a second remove to fail
#[tokio::test]
async fn add_then_remove_vehicle() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let vehicle = test.catalogue().insert_mock_vehicle("Sand Crawler").await?;
    let state = test.into_app_state();

    let target = FavoriteTargetPayload {
        vehicle_id: Some(vehicle.id),
        ..Default::default()
    };

    let resp = add_favorite(
        State(state.clone()),
        Path((user.id, "vehicle".to_string())),
        Payload(target.clone()),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = remove_favorite(
        State(state.clone()),
        Path((user.id, "vehicle".to_string())),
        Payload(target.clone()),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "Vehiculo eliminado de favorito con Exito");

    let resp = list_user_favorites(State(state.clone()), Path(user.id))
        .await
        .into_response();
    assert_eq!(body_json(resp).await.as_array().map(Vec::len), Some(0));

    let resp = remove_favorite(
        State(state),
        Path((user.id, "vehicle".to_string())),
        Payload(target),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_msg(resp).await,
        "Ese usuario ya no cuenta con ese vehiculo en favorito"
    );

    Ok(())
}

/// Expect 400 when the user does not exist, even if the target is also missing
#[tokio::test]
async fn add_rejects_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = add_favorite(
        State(test.into_app_state()),
        Path((5, "planet".to_string())),
        Payload(planet_target(3)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "Usuario no existe");

    Ok(())
}

/// Expect 400 when the planet does not exist
#[tokio::test]
async fn add_rejects_unknown_target() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;

    let resp = add_favorite(
        State(test.into_app_state()),
        Path((user.id, "planet".to_string())),
        Payload(planet_target(3)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "Ese planeta no existe");

    Ok(())
}

/// Expect 400 for a kind other than planet, people or vehicle
#[tokio::test]
async fn add_rejects_unknown_kind() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;

    let resp = add_favorite(
        State(test.into_app_state()),
        Path((user.id, "starship".to_string())),
        Payload(planet_target(1)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 naming the field when the body lacks the ID for the path's kind
#[tokio::test]
async fn add_rejects_missing_target_field() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;

    let resp = add_favorite(
        State(test.into_app_state()),
        Path((user.id, "vehicle".to_string())),
        Payload(planet_target(1)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "Missing required fields: vehicle_id");

    Ok(())
}

/// Expect list to return favorites of every user
#[tokio::test]
async fn list_returns_favorites_of_all_users() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let luke = test.user().insert_user("luke").await?;
    let leia = test.user().insert_user("leia").await?;
    let planet = test.catalogue().insert_mock_planet("Alderaan").await?;
    test.favorite()
        .insert_favorite(luke.id, entity::favorite::FavoriteKind::Planet, planet.id)
        .await?;
    test.favorite()
        .insert_favorite(leia.id, entity::favorite::FavoriteKind::Planet, planet.id)
        .await?;

    let resp = list_favorites(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect 400 for listing the favorites of a user that does not exist
#[tokio::test]
async fn list_for_user_rejects_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = list_user_favorites(State(test.into_app_state()), Path(9))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "Usuario no existe");

    Ok(())
}

/// Expect delete by favorite ID to succeed once and fail afterwards
#[tokio::test]
async fn delete_by_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalogue().insert_mock_planet("Tatooine").await?;
    let favorite = test
        .favorite()
        .insert_favorite(user.id, entity::favorite::FavoriteKind::Planet, planet.id)
        .await?;
    let state = test.into_app_state();

    let resp = delete_favorite(State(state.clone()), Path(favorite.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "Eliminación correcta de Favoritos");

    let resp = delete_favorite(State(state), Path(favorite.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "Favoritos no existe");

    Ok(())
}
