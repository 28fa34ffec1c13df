use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
    server::{
        data::{
            catalog::{
                character::CharacterRepository,
                vehicle::{VehicleChanges, VehicleRepository},
            },
            favorite::vehicle::FavoriteVehicleRepository,
        },
        error::{request::RequestError, resource::ResourceError, Error},
    },
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    /// Creates a new instance of [`VehicleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_vehicle(&self, vehicle_id: i32) -> Result<Option<VehicleDto>, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        Ok(vehicle_repo
            .get_by_id(vehicle_id)
            .await?
            .map(VehicleDto::from))
    }

    pub async fn get_all_vehicles(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        let vehicles = vehicle_repo.get_all().await?;

        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    /// Creates a vehicle, `name` is required
    ///
    /// # Returns
    /// - `Ok(VehicleDto)` - The created vehicle
    /// - `Err(Error::RequestError)` - `name` is missing
    /// - `Err(Error::ResourceError)` - The driver does not exist or already drives another vehicle
    /// - `Err(Error::DbErr)` - The name is already in use or the insert failed
    ///
    /// The driver checks and the insert are separate statements. A driver deleted or assigned
    /// in between is refused by the foreign key or the unique `driver_id` index, surfacing as
    /// 500 or 409 instead of 404.
    pub async fn create_vehicle(&self, vehicle: CreateVehicleDto) -> Result<VehicleDto, Error> {
        let name = vehicle.name.ok_or(RequestError::MissingField("name"))?;

        if let Some(driver_id) = vehicle.driver_id {
            ensure_driver_available(self.db, driver_id, None).await?;
        }

        let vehicle_repo = VehicleRepository::new(self.db);
        let vehicle = vehicle_repo
            .create(name, vehicle.max_speed, vehicle.driver_id)
            .await?;

        Ok(vehicle.into())
    }

    pub async fn update_vehicle(
        &self,
        vehicle_id: i32,
        changes: UpdateVehicleDto,
    ) -> Result<VehicleDto, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        if vehicle_repo.get_by_id(vehicle_id).await?.is_none() {
            return Err(ResourceError::VehicleNotFound(vehicle_id).into());
        }

        if let Some(Some(driver_id)) = changes.driver_id {
            ensure_driver_available(self.db, driver_id, Some(vehicle_id)).await?;
        }

        let vehicle = vehicle_repo
            .update(
                vehicle_id,
                VehicleChanges {
                    name: changes.name,
                    max_speed: changes.max_speed,
                    driver_id: changes.driver_id,
                },
            )
            .await?
            .ok_or(ResourceError::VehicleNotFound(vehicle_id))?;

        Ok(vehicle.into())
    }

    /// Deletes a vehicle along with every favorite link targeting it
    pub async fn delete_vehicle(&self, vehicle_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        FavoriteVehicleRepository::new(&txn)
            .delete_by_vehicle_id(vehicle_id)
            .await?;

        let result = VehicleRepository::new(&txn).delete(vehicle_id).await?;
        if result.rows_affected == 0 {
            return Err(ResourceError::VehicleNotFound(vehicle_id).into());
        }

        txn.commit().await?;

        tracing::debug!(vehicle_id, "Deleted vehicle");

        Ok(())
    }
}

/// Checks that the character exists and drives no vehicle other than `vehicle_id`
async fn ensure_driver_available<C: ConnectionTrait>(
    db: &C,
    character_id: i32,
    vehicle_id: Option<i32>,
) -> Result<(), Error> {
    if CharacterRepository::new(db)
        .get_by_id(character_id)
        .await?
        .is_none()
    {
        return Err(ResourceError::CharacterNotFound(character_id).into());
    }

    if let Some(driven) = VehicleRepository::new(db)
        .get_by_driver_id(character_id)
        .await?
    {
        if Some(driven.id) != vehicle_id {
            return Err(ResourceError::DriverAlreadyAssigned {
                character_id,
                vehicle_id: driven.id,
            }
            .into());
        }
    }

    Ok(())
}
