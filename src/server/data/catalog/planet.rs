use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::model::db::PlanetModel;

/// Columns to overwrite on a planet, `None` leaves the stored value untouched
#[derive(Debug, Default)]
pub struct PlanetChanges {
    pub name: Option<String>,
    pub population: Option<Option<i64>>,
    pub climate: Option<Option<String>>,
}

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        population: Option<i64>,
        climate: Option<String>,
    ) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name),
            population: ActiveValue::Set(population),
            climate: ActiveValue::Set(climate),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites the columns present in `changes`, `Ok(None)` if the planet does not exist
    pub async fn update(
        &self,
        planet_id: i32,
        changes: PlanetChanges,
    ) -> Result<Option<PlanetModel>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.clone().into_active_model();
        if let Some(name) = changes.name {
            planet_am.name = ActiveValue::Set(name);
        }
        if let Some(population) = changes.population {
            planet_am.population = ActiveValue::Set(population);
        }
        if let Some(climate) = changes.climate {
            planet_am.climate = ActiveValue::Set(climate);
        }

        if !planet_am.is_changed() {
            return Ok(Some(planet));
        }

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet, check [`DeleteResult::rows_affected`] to confirm it existed
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
