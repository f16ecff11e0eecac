use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::MessageDto,
        user::{UserDto, UserPayload},
    },
    server::{
        controller::util::{path::Path, payload::Payload},
        error::Error,
        model::{app::AppState, input::UserFields, resource::Resource},
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Create a user, same as `POST /signup`
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = UserPayload,
    responses(
        (status = 200, description = "User created", body = MessageDto),
        (status = 400, description = "User exists or body is malformed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Payload(payload): Payload<UserPayload>,
) -> Result<impl IntoResponse, Error> {
    let fields = UserFields::try_from(payload)?;

    UserService::new(&state.db).create(fields).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::User.created_msg())),
    ))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "User does not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get(user_id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Replace every field of a user, including the password
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = MessageDto),
        (status = 400, description = "User does not exist, username or email taken, or body is malformed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Payload(payload): Payload<UserPayload>,
) -> Result<impl IntoResponse, Error> {
    let fields = UserFields::try_from(payload)?;

    UserService::new(&state.db).update(user_id, fields).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::User.updated_msg())),
    ))
}

/// Delete a user and their favorites
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 400, description = "User does not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).delete(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::User.deleted_msg())),
    ))
}
