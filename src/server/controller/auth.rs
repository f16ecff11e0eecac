use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::MessageDto,
        auth::{LoginDto, LoginPayload, PrivateDto},
        user::UserPayload,
    },
    server::{
        controller::util::{auth::AuthUser, payload::Payload},
        error::Error,
        model::{
            app::AppState,
            input::{Credentials, UserFields},
            resource::Resource,
        },
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new user
///
/// # Responses
/// - 200 (OK): User created
/// - 400 (Bad Request): Username or email already in use, or a field is missing
/// - 500 (Internal Server Error): Database or password hashing failure
#[utoipa::path(
    post,
    path = "/signup",
    tag = AUTH_TAG,
    request_body = UserPayload,
    responses(
        (status = 200, description = "User created", body = MessageDto),
        (status = 400, description = "User exists or body is malformed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Payload(payload): Payload<UserPayload>,
) -> Result<impl IntoResponse, Error> {
    let fields = UserFields::try_from(payload)?;

    AuthService::new(&state.db, &state.jwt)
        .signup(fields)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(Resource::User.created_msg())),
    ))
}

/// Exchange username and password for an access token
///
/// # Responses
/// - 200 (OK): Access token and the logged in user
/// - 400 (Bad Request): Username or password missing from the body
/// - 401 (Unauthorized): Unknown username or wrong password
/// - 500 (Internal Server Error): Database or token signing failure
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Logged in", body = LoginDto),
        (status = 400, description = "Body is malformed", body = MessageDto),
        (status = 401, description = "Bad username or password", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Payload(payload): Payload<LoginPayload>,
) -> Result<impl IntoResponse, Error> {
    let credentials = Credentials::try_from(payload)?;

    let login = AuthService::new(&state.db, &state.jwt)
        .login(credentials)
        .await?;

    Ok((StatusCode::OK, Json(login)))
}

/// Return the user the bearer token was issued to
///
/// # Responses
/// - 200 (OK): Authenticated user
/// - 401 (Unauthorized): Missing or invalid token
/// - 404 (Not Found): The token's user has been deleted
#[utoipa::path(
    get,
    path = "/private",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = PrivateDto),
        (status = 401, description = "Missing or invalid token", body = MessageDto),
        (status = 404, description = "User does not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn private(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db, &state.jwt)
        .current_user(user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PrivateDto {
            status: "true".to_string(),
            user,
        }),
    ))
}
