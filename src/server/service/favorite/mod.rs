//! Favorites manager.
//!
//! Reads, adds and removes the favorite links of a user across the three join tables and
//! exposes the raw link rows for the admin listing.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::{CreatedFavoriteDto, FavoriteKind, FavoriteLinkDto, FavoritesDto},
    server::{
        data::{
            catalog::{
                character::CharacterRepository, planet::PlanetRepository,
                vehicle::VehicleRepository,
            },
            favorite::{
                character::FavoriteCharacterRepository, planet::FavoritePlanetRepository,
                vehicle::FavoriteVehicleRepository,
            },
            user::UserRepository,
        },
        error::{resource::ResourceError, Error},
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every entity the user marked as favorite
    ///
    /// Entries are ordered by link ID per kind, a target linked twice is listed twice.
    ///
    /// # Returns
    /// - `Ok(FavoritesDto)` - Favorites of the user, possibly empty
    /// - `Err(Error::ResourceError)` - The user does not exist
    /// - `Err(Error::InternalError)` - A link references a target missing from the database
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_favorites(&self, user_id: i32) -> Result<FavoritesDto, Error> {
        self.ensure_user_exists(user_id).await?;

        let characters = FavoriteCharacterRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;
        let vehicles = FavoriteVehicleRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;
        let planets = FavoritePlanetRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(FavoritesDto {
            favorite_characters: characters
                .into_iter()
                .map(|(link, character)| {
                    character
                        .map(Into::into)
                        .ok_or_else(|| missing_target(FavoriteKind::Character, link.id))
                })
                .collect::<Result<_, _>>()?,
            favorite_vehicles: vehicles
                .into_iter()
                .map(|(link, vehicle)| {
                    vehicle
                        .map(Into::into)
                        .ok_or_else(|| missing_target(FavoriteKind::Vehicle, link.id))
                })
                .collect::<Result<_, _>>()?,
            favorite_planets: planets
                .into_iter()
                .map(|(link, planet)| {
                    planet
                        .map(Into::into)
                        .ok_or_else(|| missing_target(FavoriteKind::Planet, link.id))
                })
                .collect::<Result<_, _>>()?,
        })
    }

    /// Links the target entity of the provided kind to the user
    ///
    /// No duplicate check is performed, linking the same target twice creates two links.
    ///
    /// The existence checks and the insert are separate statements. A target deleted in between
    /// is refused by the foreign key on the link table, surfacing as `Err(Error::DbErr)` (500)
    /// instead of a 404, no dangling link is stored.
    ///
    /// # Returns
    /// - `Ok(CreatedFavoriteDto)` - The created link with the display name of its target
    /// - `Err(Error::ResourceError)` - The user or the target does not exist
    /// - `Err(Error::DbErr)` - Database query or insert failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<CreatedFavoriteDto, Error> {
        self.ensure_user_exists(user_id).await?;

        let (id, target_name) = match kind {
            FavoriteKind::Character => {
                let character = CharacterRepository::new(self.db)
                    .get_by_id(target_id)
                    .await?
                    .ok_or(ResourceError::CharacterNotFound(target_id))?;
                let link = FavoriteCharacterRepository::new(self.db)
                    .create(user_id, character.id)
                    .await?;

                (link.id, character.first_name)
            }
            FavoriteKind::Vehicle => {
                let vehicle = VehicleRepository::new(self.db)
                    .get_by_id(target_id)
                    .await?
                    .ok_or(ResourceError::VehicleNotFound(target_id))?;
                let link = FavoriteVehicleRepository::new(self.db)
                    .create(user_id, vehicle.id)
                    .await?;

                (link.id, vehicle.name)
            }
            FavoriteKind::Planet => {
                let planet = PlanetRepository::new(self.db)
                    .get_by_id(target_id)
                    .await?
                    .ok_or(ResourceError::PlanetNotFound(target_id))?;
                let link = FavoritePlanetRepository::new(self.db)
                    .create(user_id, planet.id)
                    .await?;

                (link.id, planet.name)
            }
        };

        tracing::debug!(user_id, favorite_id = id, %kind, "Added favorite");

        Ok(CreatedFavoriteDto {
            id,
            kind,
            user_id,
            target_id,
            target_name,
        })
    }

    /// Removes a favorite link by its own ID
    ///
    /// A link owned by another user is reported the same as a missing link.
    pub async fn remove_favorite(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        favorite_id: i32,
    ) -> Result<(), Error> {
        self.ensure_user_exists(user_id).await?;

        let owner_id = match kind {
            FavoriteKind::Character => FavoriteCharacterRepository::new(self.db)
                .get_by_id(favorite_id)
                .await?
                .and_then(|link| link.user_id),
            FavoriteKind::Vehicle => FavoriteVehicleRepository::new(self.db)
                .get_by_id(favorite_id)
                .await?
                .map(|link| link.user_id),
            FavoriteKind::Planet => FavoritePlanetRepository::new(self.db)
                .get_by_id(favorite_id)
                .await?
                .and_then(|link| link.user_id),
        };

        if owner_id != Some(user_id) {
            return Err(ResourceError::FavoriteNotFound { kind, favorite_id }.into());
        }

        match kind {
            FavoriteKind::Character => {
                FavoriteCharacterRepository::new(self.db)
                    .delete(favorite_id)
                    .await?
            }
            FavoriteKind::Vehicle => {
                FavoriteVehicleRepository::new(self.db)
                    .delete(favorite_id)
                    .await?
            }
            FavoriteKind::Planet => {
                FavoritePlanetRepository::new(self.db)
                    .delete(favorite_id)
                    .await?
            }
        };

        tracing::debug!(user_id, favorite_id, %kind, "Removed favorite");

        Ok(())
    }

    /// Gets every raw link row of the provided kind, including links without a user
    pub async fn get_links(&self, kind: FavoriteKind) -> Result<Vec<FavoriteLinkDto>, Error> {
        let links = match kind {
            FavoriteKind::Character => FavoriteCharacterRepository::new(self.db)
                .get_all()
                .await?
                .into_iter()
                .map(|link| FavoriteLinkDto {
                    id: link.id,
                    user_id: link.user_id,
                    target_id: link.character_id,
                })
                .collect(),
            FavoriteKind::Vehicle => FavoriteVehicleRepository::new(self.db)
                .get_all()
                .await?
                .into_iter()
                .map(|link| FavoriteLinkDto {
                    id: link.id,
                    user_id: Some(link.user_id),
                    target_id: link.vehicle_id,
                })
                .collect(),
            FavoriteKind::Planet => FavoritePlanetRepository::new(self.db)
                .get_all()
                .await?
                .into_iter()
                .map(|link| FavoriteLinkDto {
                    id: link.id,
                    user_id: link.user_id,
                    target_id: link.planet_id,
                })
                .collect(),
        };

        Ok(links)
    }

    /// Fails with [`ResourceError::UserNotFound`] if the user does not exist
    pub async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        match UserRepository::new(self.db).get_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ResourceError::UserNotFound(user_id).into()),
        }
    }
}

// Only reachable if the foreign key constraint on the link table is not enforced
fn missing_target(kind: FavoriteKind, favorite_id: i32) -> Error {
    Error::InternalError(format!(
        "Failed to find target of favorite {} link ID {}",
        kind, favorite_id
    ))
}
