//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same queries run
//! against a pooled connection or inside a request scoped transaction. They are organized
//! by domain: users, catalog entities and favorite links.

pub mod catalog;
pub mod favorite;
pub mod user;
