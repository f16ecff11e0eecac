//! HTTP routing and OpenAPI documentation.
//!
//! Every endpoint is registered through utoipa's `OpenApiRouter` so its `#[utoipa::path]`
//! annotation lands in the generated document. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::{
    openapi::{
        security::{Http, HttpAuthScheme, SecurityScheme},
        Components,
    },
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(Components::new)
            .add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
    }
}

/// Builds the application's router with every API endpoint and Swagger UI
///
/// # Registered Endpoints
/// - `POST /signup`, `POST /login`, `GET /private`
/// - `GET/POST /users`, `GET/PUT/DELETE /users/{id}`
/// - `GET/POST /people`, `GET/PUT/DELETE /people/{id}`
/// - `GET/POST /planets`, `GET/PUT/DELETE /planets/{id}`
/// - `GET/POST /vehicles`, `GET/PUT/DELETE /vehicles/{id}`
/// - `GET /favorite`, `DELETE /favorite/{id}`
/// - `GET /users/{id}/favorite`, `POST/DELETE /users/{id}/favorite/{kind}`
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Holocron", description = "Star Wars catalogue API"),
        modifiers(&BearerAuth),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Signup, login and token check"),
            (name = controller::user::USER_TAG, description = "User accounts"),
            (name = controller::person::PERSON_TAG, description = "People of the catalogue"),
            (name = controller::planet::PLANET_TAG, description = "Planets of the catalogue"),
            (name = controller::vehicle::VEHICLE_TAG, description = "Vehicles of the catalogue"),
            (name = controller::favorite::FAVORITE_TAG, description = "Per-user favorites"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::signup))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::private))
        .routes(routes!(
            controller::user::list_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::person::list_people,
            controller::person::create_person
        ))
        .routes(routes!(
            controller::person::get_person,
            controller::person::update_person,
            controller::person::delete_person
        ))
        .routes(routes!(
            controller::planet::list_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::vehicle::list_vehicles,
            controller::vehicle::create_vehicle
        ))
        .routes(routes!(
            controller::vehicle::get_vehicle,
            controller::vehicle::update_vehicle,
            controller::vehicle::delete_vehicle
        ))
        .routes(routes!(controller::favorite::list_favorites))
        .routes(routes!(controller::favorite::delete_favorite))
        .routes(routes!(controller::favorite::list_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
