use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::MessageDto,
        catalogue::{PlanetDto, PlanetPayload},
    },
    server::{
        controller::util::{path::Path, payload::Payload},
        error::Error,
        model::{app::AppState, input::PlanetFields, resource::Resource},
        service::planet::PlanetService,
    },
};

pub static PLANET_TAG: &str = "planet";

#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Add a planet to the catalogue
///
/// # Responses
/// - 200 (OK): Planet created
/// - 400 (Bad Request): A planet with that name exists, or a field is missing
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = PlanetPayload,
    responses(
        (status = 200, description = "Planet created", body = MessageDto),
        (status = 400, description = "Planet exists or body is malformed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    Payload(payload): Payload<PlanetPayload>,
) -> Result<impl IntoResponse, Error> {
    let fields = PlanetFields::try_from(payload)?;

    PlanetService::new(&state.db).create(fields).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::Planet.created_msg())),
    ))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet found", body = PlanetDto),
        (status = 400, description = "Planet does not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).get(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Replace every field of a planet
///
/// # Responses
/// - 200 (OK): Planet updated
/// - 400 (Bad Request): Planet does not exist, name taken by another planet, or a field is missing
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    put,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    request_body = PlanetPayload,
    responses(
        (status = 200, description = "Planet updated", body = MessageDto),
        (status = 400, description = "Planet does not exist, name taken, or body is malformed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    Payload(payload): Payload<PlanetPayload>,
) -> Result<impl IntoResponse, Error> {
    let fields = PlanetFields::try_from(payload)?;

    PlanetService::new(&state.db)
        .update(planet_id, fields)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::Planet.updated_msg())),
    ))
}

#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 400, description = "Planet does not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PlanetService::new(&state.db).delete(planet_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::Planet.deleted_msg())),
    ))
}
