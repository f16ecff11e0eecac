use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::{model::favorite::FavoriteKind, server::error::bad_request};

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("User ID {0} not found in database")]
    UserNotFound(i32),
    #[error("Favorite target {kind} ID {id} not found in database")]
    TargetNotFound { kind: FavoriteKind, id: i32 },
    #[error("User ID {user_id} already has {kind} ID {target_id} as a favorite")]
    AlreadyFavorited {
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    },
    #[error("User ID {user_id} does not have {kind} ID {target_id} as a favorite")]
    NotFavorited {
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    },
    #[error("Favorite ID {0} not found in database")]
    NotFound(i32),
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotFound(_) => bad_request("Usuario no existe"),
            Self::TargetNotFound { kind, .. } => bad_request(format!("Ese {} no existe", kind.noun())),
            Self::AlreadyFavorited { kind, .. } => bad_request(format!(
                "Ese usuario ya cuenta con ese {} en favorito",
                kind.noun()
            )),
            Self::NotFavorited { kind, .. } => bad_request(format!(
                "Ese usuario ya no cuenta con ese {} en favorito",
                kind.noun()
            )),
            Self::NotFound(_) => bad_request("Favoritos no existe"),
        }
    }
}
