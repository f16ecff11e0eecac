//! Tests for the people endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::controller::{
    person::{create_person, delete_person, get_person, list_people, update_person},
    util::{path::Path, payload::Payload},
};

use super::*;

/// Expect a created person to keep its homeworld ID
#[tokio::test]
async fn create_with_homeworld() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let planet = test.catalogue().insert_mock_planet("Tatooine").await?;
    let state = test.into_app_state();

    let resp = create_person(
        State(state.clone()),
        Payload(person_payload("Luke Skywalker", Some(planet.id))),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "El personaje fue creado con exito");

    let resp = list_people(State(state)).await.into_response();
    let body = body_json(resp).await;
    assert_eq!(body[0]["name"], "Luke Skywalker");
    assert_eq!(body[0]["planet_id"], planet.id);

    Ok(())
}

/// Expect a person without homeworld to be accepted
#[tokio::test]
async fn create_without_homeworld() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = create_person(
        State(test.into_app_state()),
        Payload(person_payload("Obi-Wan Kenobi", None)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when renaming a person to another person's name
#[tokio::test]
async fn update_rejects_taken_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    test.catalogue()
        .insert_mock_person("Luke Skywalker", None)
        .await?;
    let leia = test.catalogue().insert_mock_person("Leia Organa", None).await?;

    let resp = update_person(
        State(test.into_app_state()),
        Path(leia.id),
        Payload(person_payload("Luke Skywalker", None)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "El personaje ya existe en el sistema");

    Ok(())
}

/// Expect the person to be gone after delete
#[tokio::test]
async fn delete_then_get_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let person = test.catalogue().insert_mock_person("Han Solo", None).await?;
    let state = test.into_app_state();

    let resp = delete_person(State(state.clone()), Path(person.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_person(State(state), Path(person.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "Personaje no existe");

    Ok(())
}
