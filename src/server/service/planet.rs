use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    server::{
        data::{
            catalog::planet::{PlanetChanges, PlanetRepository},
            favorite::planet::FavoritePlanetRepository,
        },
        error::{request::RequestError, resource::ResourceError, Error},
    },
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        Ok(planet_repo.get_by_id(planet_id).await?.map(PlanetDto::from))
    }

    pub async fn get_all_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo.get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    pub async fn create_planet(&self, planet: CreatePlanetDto) -> Result<PlanetDto, Error> {
        let name = planet.name.ok_or(RequestError::MissingField("name"))?;

        let planet_repo = PlanetRepository::new(self.db);
        let planet = planet_repo
            .create(name, planet.population, planet.climate)
            .await?;

        Ok(planet.into())
    }

    pub async fn update_planet(
        &self,
        planet_id: i32,
        changes: UpdatePlanetDto,
    ) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo
            .update(
                planet_id,
                PlanetChanges {
                    name: changes.name,
                    population: changes.population,
                    climate: changes.climate,
                },
            )
            .await?
            .ok_or(ResourceError::PlanetNotFound(planet_id))?;

        Ok(planet.into())
    }

    /// Deletes a planet along with every favorite link targeting it
    pub async fn delete_planet(&self, planet_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        FavoritePlanetRepository::new(&txn)
            .delete_by_planet_id(planet_id)
            .await?;

        let result = PlanetRepository::new(&txn).delete(planet_id).await?;
        if result.rows_affected == 0 {
            return Err(ResourceError::PlanetNotFound(planet_id).into());
        }

        txn.commit().await?;

        tracing::debug!(planet_id, "Deleted planet");

        Ok(())
    }
}
