//! Catalog data repositories.
//!
//! This module contains repositories for the catalog entities users can mark as favorite:
//! characters, vehicles and planets. Each repository provides lookups by ID, full table
//! listings, creation, partial updates and deletion of a single entity.

pub mod character;
pub mod planet;
pub mod vehicle;
