use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::MessageDto,
        favorite::{FavoriteDto, FavoriteKind, FavoriteTargetPayload},
    },
    server::{
        controller::util::{path::Path, payload::Payload},
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Parses the `{kind}` path segment and reads the matching ID field from the body
fn parse_target(
    kind: &str,
    payload: &FavoriteTargetPayload,
) -> Result<(FavoriteKind, i32), ValidationError> {
    let kind: FavoriteKind = kind
        .parse()
        .map_err(ValidationError::UnknownFavoriteKind)?;

    let target_id = payload
        .target_id(kind)
        .ok_or_else(|| ValidationError::MissingFields(vec![kind.target_field()]))?;

    Ok((kind, target_id))
}

fn added_msg(kind: FavoriteKind) -> &'static str {
    match kind {
        FavoriteKind::Planet => "Planeta agregado a favorito con Exito",
        FavoriteKind::People => "Personaje agregado a favorito con Exito",
        FavoriteKind::Vehicle => "Vehiculo agregado a favorito con Exito",
    }
}

fn removed_msg(kind: FavoriteKind) -> &'static str {
    match kind {
        FavoriteKind::Planet => "Planeta eliminado de favorito con Exito",
        FavoriteKind::People => "Personaje eliminado de favorito con Exito",
        FavoriteKind::Vehicle => "Vehiculo eliminado de favorito con Exito",
    }
}

/// List the favorites of every user
#[utoipa::path(
    get,
    path = "/favorite",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "All favorites", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Delete a favorite by its own ID
#[utoipa::path(
    delete,
    path = "/favorite/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Favorite ID")),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 400, description = "Favorite does not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    Path(favorite_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db).delete(favorite_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Eliminación correcta de Favoritos")),
    ))
}

/// List the favorites of one user, mixing kinds
#[utoipa::path(
    get,
    path = "/users/{id}/favorite",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Favorites of the user", body = Vec<FavoriteDto>),
        (status = 400, description = "User does not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .list_for_user(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a planet, person or vehicle to a user's favorites
///
/// The body carries the ID under the field matching the kind: `planet_id`, `people_id`
/// or `vehicle_id`.
///
/// # Responses
/// - 200 (OK): Favorite added
/// - 400 (Bad Request): User or target does not exist, already a favorite, unknown kind or
///   the ID field is missing
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/users/{id}/favorite/{kind}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("kind" = String, Path, description = "planet, people or vehicle")
    ),
    request_body = FavoriteTargetPayload,
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 400, description = "User or target does not exist, already a favorite, or body is malformed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Path((user_id, kind)): Path<(i32, String)>,
    Payload(payload): Payload<FavoriteTargetPayload>,
) -> Result<impl IntoResponse, Error> {
    let (kind, target_id) = parse_target(&kind, &payload)?;

    FavoriteService::new(&state.db)
        .add(user_id, kind, target_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(added_msg(kind)))))
}

/// Remove a planet, person or vehicle from a user's favorites
///
/// # Responses
/// - 200 (OK): Favorite removed
/// - 400 (Bad Request): User or target does not exist, not a favorite, unknown kind or
///   the ID field is missing
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    delete,
    path = "/users/{id}/favorite/{kind}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("kind" = String, Path, description = "planet, people or vehicle")
    ),
    request_body = FavoriteTargetPayload,
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "User or target does not exist, not a favorite, or body is malformed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((user_id, kind)): Path<(i32, String)>,
    Payload(payload): Payload<FavoriteTargetPayload>,
) -> Result<impl IntoResponse, Error> {
    let (kind, target_id) = parse_target(&kind, &payload)?;

    FavoriteService::new(&state.db)
        .remove(user_id, kind, target_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(removed_msg(kind)))))
}
