//! Utilities shared by controllers.

pub mod json;
