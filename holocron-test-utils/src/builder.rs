//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// database fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,      // emails
    characters: Vec<String>, // first names
    vehicles: Vec<String>,   // names
    planets: Vec<String>,    // names
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            users: Vec::new(),
            characters: Vec::new(),
            vehicles: Vec::new(),
            planets: Vec::new(),
        }
    }

    /// Add every Holocron table to the test database.
    ///
    /// Creates User, Character, Vehicle, Planet and the three favorite link tables in
    /// dependency order so foreign keys resolve.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Character)
    ///     .with_table(Vehicle)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided email during `build()`.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert a character with the provided first name during `build()`.
    pub fn with_character(mut self, first_name: impl Into<String>) -> Self {
        self.characters.push(first_name.into());
        self
    }

    /// Insert a vehicle without a driver during `build()`.
    pub fn with_vehicle(mut self, name: impl Into<String>) -> Self {
        self.vehicles.push(name.into());
        self
    }

    /// Insert a planet during `build()`.
    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (catalog tables if specified, then custom tables)
    /// 2. Inserts database fixtures (users, characters, vehicles, planets)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::FavoriteCharacter),
                schema.create_table_from_entity(entity::prelude::FavoriteVehicle),
                schema.create_table_from_entity(entity::prelude::FavoritePlanet),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        for first_name in self.characters {
            setup.catalog().insert_character(&first_name).await?;
        }

        for name in self.vehicles {
            setup.catalog().insert_vehicle(&name, None).await?;
        }

        for name in self.planets {
            setup.catalog().insert_planet(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
