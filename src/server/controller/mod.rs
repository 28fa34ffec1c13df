//! HTTP controller endpoints for the Holocron web API.
//!
//! This module contains Axum handlers for the user and catalog CRUD routes, the favorites
//! routes, the read-only admin listing of favorite links and the sitemap. Handlers extract
//! inputs, call into services and convert results into JSON responses, every handler is
//! annotated with utoipa for OpenAPI documentation.

pub mod admin;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod util;
pub mod vehicle;
