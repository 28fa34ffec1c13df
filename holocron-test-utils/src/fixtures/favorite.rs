use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FavoriteCharacterModel, FavoritePlanetModel, FavoriteVehicleModel},
    TestContext,
};

impl TestContext {
    pub fn favorite<'a>(&'a self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, TestError> {
        Ok(
            entity::prelude::FavoriteCharacter::insert(entity::favorite_character::ActiveModel {
                user_id: ActiveValue::Set(Some(user_id)),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<FavoriteVehicleModel, TestError> {
        Ok(
            entity::prelude::FavoriteVehicle::insert(entity::favorite_vehicle::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                vehicle_id: ActiveValue::Set(vehicle_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, TestError> {
        Ok(
            entity::prelude::FavoritePlanet::insert(entity::favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(Some(user_id)),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
