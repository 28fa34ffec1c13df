//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers and the database
//! model type aliases used by repositories and services.

pub mod app;
pub mod db;
