//! Tests for the vehicle endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::controller::{
    util::{path::Path, payload::Payload},
    vehicle::{create_vehicle, delete_vehicle, get_vehicle, list_vehicles, update_vehicle},
};

use super::*;

/// Expect get to return the vehicle with the requested ID
#[tokio::test]
async fn get_returns_requested_vehicle() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    test.catalogue().insert_mock_vehicle("Sand Crawler").await?;
    let speeder = test.catalogue().insert_mock_vehicle("T-16 skyhopper").await?;

    let resp = get_vehicle(State(test.into_app_state()), Path(speeder.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], speeder.id);
    assert_eq!(body["name"], "T-16 skyhopper");

    Ok(())
}

/// Expect create to be listed afterwards and a duplicate to be rejected
#[tokio::test]
async fn create_and_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state = test.into_app_state();

    let resp = create_vehicle(State(state.clone()), Payload(vehicle_payload("Sand Crawler")))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "El vehiculo fue creado con exito");

    let resp = create_vehicle(State(state.clone()), Payload(vehicle_payload("Sand Crawler")))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = list_vehicles(State(state)).await.into_response();
    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["length"], 36.8);

    Ok(())
}

/// Expect 400 when updating a vehicle that does not exist
#[tokio::test]
async fn update_rejects_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = update_vehicle(
        State(test.into_app_state()),
        Path(3),
        Payload(vehicle_payload("Sand Crawler")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_msg(resp).await, "Vehiculo no existe");

    Ok(())
}

#[tokio::test]
async fn delete_existing_vehicle() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let vehicle = test.catalogue().insert_mock_vehicle("Sand Crawler").await?;

    let resp = delete_vehicle(State(test.into_app_state()), Path(vehicle.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_msg(resp).await, "Eliminación correcta de Vehiculo");

    Ok(())
}
