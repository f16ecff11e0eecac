use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Body of `POST /login`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    /// Bearer token to send as `Authorization: Bearer <token>`
    pub access_token: String,
    pub user: UserDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrivateDto {
    pub status: String,
    pub user: UserDto,
}
