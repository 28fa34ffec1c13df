//! Service layer for business logic.
//!
//! Services validate request DTOs, hash passwords, check references between entities and
//! apply the delete cascades inside a transaction before handing results back as DTOs.

pub mod character;
pub mod favorite;
pub mod password;
pub mod planet;
pub mod user;
pub mod vehicle;
