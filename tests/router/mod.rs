//! Tests for the assembled router.
//!
//! Requests are sent through the full router with `tower::ServiceExt::oneshot` so path
//! matching, body extraction and response serialization are covered together.

mod catalog;
mod favorite;
mod sitemap;

use axum::http::{Method, StatusCode};
use holocron_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::util::{body_json, empty_request, json_request, TestContextExt};
