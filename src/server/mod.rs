//! Server application core modules.
//!
//! This module contains all server-side functionality for the Holocron application, including
//! HTTP routing, request handlers, services, database repositories and error handling for the
//! catalog of characters, vehicles and planets and the favorites of each user.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
