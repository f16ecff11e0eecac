use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::JwtKeys;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt: JwtKeys,
}
