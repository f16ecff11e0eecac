use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::MessageDto,
        catalogue::{PersonDto, PersonPayload},
    },
    server::{
        controller::util::{path::Path, payload::Payload},
        error::Error,
        model::{app::AppState, input::PersonFields, resource::Resource},
        service::person::PersonService,
    },
};

pub static PERSON_TAG: &str = "person";

#[utoipa::path(
    get,
    path = "/people",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "All people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PersonService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Add a person to the catalogue
///
/// `planet_id` is optional and is not checked against the planets.
///
/// # Responses
/// - 200 (OK): Person created
/// - 400 (Bad Request): A person with that name exists, or a field is missing
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/people",
    tag = PERSON_TAG,
    request_body = PersonPayload,
    responses(
        (status = 200, description = "Person created", body = MessageDto),
        (status = 400, description = "Person exists or body is malformed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    Payload(payload): Payload<PersonPayload>,
) -> Result<impl IntoResponse, Error> {
    let fields = PersonFields::try_from(payload)?;

    PersonService::new(&state.db).create(fields).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::Person.created_msg())),
    ))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PERSON_TAG,
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person found", body = PersonDto),
        (status = 400, description = "Person does not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let person = PersonService::new(&state.db).get(person_id).await?;

    Ok((StatusCode::OK, Json(person)))
}

/// Replace every field of a person
///
/// # Responses
/// - 200 (OK): Person updated
/// - 400 (Bad Request): Person does not exist, name taken by another person, or a field is missing
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    put,
    path = "/people/{id}",
    tag = PERSON_TAG,
    params(("id" = i32, Path, description = "Person ID")),
    request_body = PersonPayload,
    responses(
        (status = 200, description = "Person updated", body = MessageDto),
        (status = 400, description = "Person does not exist, name taken, or body is malformed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
    Payload(payload): Payload<PersonPayload>,
) -> Result<impl IntoResponse, Error> {
    let fields = PersonFields::try_from(payload)?;

    PersonService::new(&state.db)
        .update(person_id, fields)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::Person.updated_msg())),
    ))
}

#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = PERSON_TAG,
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person deleted", body = MessageDto),
        (status = 400, description = "Person does not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PersonService::new(&state.db).delete(person_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::Person.deleted_msg())),
    ))
}
