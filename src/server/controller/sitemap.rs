use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use utoipa::openapi::OpenApi;

use crate::model::api::ListDto;

pub static SITEMAP_TAG: &str = "sitemap";

/// Every route path registered with the API documentation
#[derive(Clone, Debug, Default)]
pub struct Sitemap(Arc<Vec<String>>);

impl Sitemap {
    /// Collects the documented paths followed by any additional routes served outside of it
    pub fn new(api: &OpenApi, extra: &[&str]) -> Self {
        let mut paths: Vec<String> = api.paths.paths.keys().cloned().collect();
        paths.extend(extra.iter().map(|path| path.to_string()));

        Self(Arc::new(paths))
    }
}

/// List every route served by the API
#[utoipa::path(
    get,
    path = "/",
    tag = SITEMAP_TAG,
    responses(
        (status = 200, description = "Every registered route path", body = ListDto<String>)
    ),
)]
pub async fn sitemap(Extension(sitemap): Extension<Sitemap>) -> impl IntoResponse {
    (StatusCode::OK, Json(ListDto::from(sitemap.0.as_ref().clone())))
}
