//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{Extension, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, sitemap::Sitemap},
    model::app::AppState,
};

pub static DOCS_PATH: &str = "/api/docs";
pub static OPENAPI_PATH: &str = "/api/docs/openapi.json";

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected into
/// a unified OpenAPI document. The same document feeds the sitemap served at `/`.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap of every route
/// - `/users`, `/people`, `/vehicles`, `/planets` - CRUD for users & catalog entities
/// - `/user/{id}/favorites` - Favorites of a user, add & remove per kind
/// - `/admin/favorites/{people,vehicles,planets}` - Raw favorite link rows
///
/// # Swagger UI
/// Interactive API documentation is served at `/api/docs`, the OpenAPI specification is
/// available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicle API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "User favorites API routes"),
        (name = controller::admin::ADMIN_TAG, description = "Admin listing of favorite links"),
        (name = controller::sitemap::SITEMAP_TAG, description = "Route listing"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::sitemap::sitemap))
        .routes(routes!(
            controller::user::get_all_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::character::get_all_characters,
            controller::character::create_character
        ))
        .routes(routes!(
            controller::character::get_character,
            controller::character::update_character,
            controller::character::delete_character
        ))
        .routes(routes!(
            controller::vehicle::get_all_vehicles,
            controller::vehicle::create_vehicle
        ))
        .routes(routes!(
            controller::vehicle::get_vehicle,
            controller::vehicle::update_vehicle,
            controller::vehicle::delete_vehicle
        ))
        .routes(routes!(
            controller::planet::get_all_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(controller::favorite::add_favorite_character))
        .routes(routes!(controller::favorite::add_favorite_vehicle))
        .routes(routes!(controller::favorite::add_favorite_planet))
        .routes(routes!(controller::favorite::remove_favorite_character))
        .routes(routes!(controller::favorite::remove_favorite_vehicle))
        .routes(routes!(controller::favorite::remove_favorite_planet))
        .routes(routes!(controller::admin::list_favorite_characters))
        .routes(routes!(controller::admin::list_favorite_vehicles))
        .routes(routes!(controller::admin::list_favorite_planets))
        .split_for_parts();

    let sitemap = Sitemap::new(&api, &[DOCS_PATH]);

    routes
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, api))
        .layer(Extension(sitemap))
}
