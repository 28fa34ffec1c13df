//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors to verify status codes and response
//! bodies for success and error paths.

mod admin;
mod character;
mod favorite;
mod user;
mod vehicle;

use holocron_test_utils::prelude::*;

use crate::util::body_json;
