//! Catalog entity database insertion utilities.
//!
//! Fixtures fill required columns with standard test values, optional columns are left
//! unset unless the method takes them as an argument.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CharacterModel, PlanetModel, VehicleModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a human character with the provided first name.
    pub async fn insert_character(&self, first_name: &str) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                first_name: ActiveValue::Set(first_name.to_string()),
                last_name: ActiveValue::Set(None),
                specie: ActiveValue::Set("Human".to_string()),
                height: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a vehicle, optionally driven by the provided character ID.
    pub async fn insert_vehicle(
        &self,
        name: &str,
        driver_id: Option<i32>,
    ) -> Result<VehicleModel, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                max_speed: ActiveValue::Set(None),
                driver_id: ActiveValue::Set(driver_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                population: ActiveValue::Set(None),
                climate: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
