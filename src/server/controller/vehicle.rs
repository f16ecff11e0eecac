use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::MessageDto,
        catalogue::{VehicleDto, VehiclePayload},
    },
    server::{
        controller::util::{path::Path, payload::Payload},
        error::Error,
        model::{app::AppState, input::VehicleFields, resource::Resource},
        service::vehicle::VehicleService,
    },
};

pub static VEHICLE_TAG: &str = "vehicle";

#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "All vehicles", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicles = VehicleService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Add a vehicle to the catalogue
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    request_body = VehiclePayload,
    responses(
        (status = 200, description = "Vehicle created", body = MessageDto),
        (status = 400, description = "Vehicle exists or body is malformed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Payload(payload): Payload<VehiclePayload>,
) -> Result<impl IntoResponse, Error> {
    let fields = VehicleFields::try_from(payload)?;

    VehicleService::new(&state.db).create(fields).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::Vehicle.created_msg())),
    ))
}

#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle found", body = VehicleDto),
        (status = 400, description = "Vehicle does not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = VehicleService::new(&state.db).get(vehicle_id).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

#[utoipa::path(
    put,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = VehiclePayload,
    responses(
        (status = 200, description = "Vehicle updated", body = MessageDto),
        (status = 400, description = "Vehicle does not exist, name taken, or body is malformed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
    Payload(payload): Payload<VehiclePayload>,
) -> Result<impl IntoResponse, Error> {
    let fields = VehicleFields::try_from(payload)?;

    VehicleService::new(&state.db)
        .update(vehicle_id, fields)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::Vehicle.updated_msg())),
    ))
}

#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle deleted", body = MessageDto),
        (status = 400, description = "Vehicle does not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    VehicleService::new(&state.db).delete(vehicle_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::Vehicle.deleted_msg())),
    ))
}
