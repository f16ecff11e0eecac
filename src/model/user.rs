use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Serialized user, the password hash is never included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of `POST /signup`, `POST /users` and `PUT /users/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserPayload {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
