use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, UpdateResult,
};

use crate::server::model::db::VehicleModel;

/// Columns to overwrite on a vehicle, `None` leaves the stored value untouched
#[derive(Debug, Default)]
pub struct VehicleChanges {
    pub name: Option<String>,
    pub max_speed: Option<Option<i32>>,
    pub driver_id: Option<Option<i32>>,
}

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        max_speed: Option<i32>,
        driver_id: Option<i32>,
    ) -> Result<VehicleModel, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(name),
            max_speed: ActiveValue::Set(max_speed),
            driver_id: ActiveValue::Set(driver_id),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    pub async fn get_by_id(&self, vehicle_id: i32) -> Result<Option<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }

    /// Gets the vehicle driven by the provided character, if any
    pub async fn get_by_driver_id(&self, character_id: i32) -> Result<Option<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::DriverId.eq(character_id))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites the columns present in `changes`, `Ok(None)` if the vehicle does not exist
    pub async fn update(
        &self,
        vehicle_id: i32,
        changes: VehicleChanges,
    ) -> Result<Option<VehicleModel>, DbErr> {
        let vehicle = match entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await?
        {
            Some(vehicle) => vehicle,
            None => return Ok(None),
        };

        let mut vehicle_am = vehicle.clone().into_active_model();
        if let Some(name) = changes.name {
            vehicle_am.name = ActiveValue::Set(name);
        }
        if let Some(max_speed) = changes.max_speed {
            vehicle_am.max_speed = ActiveValue::Set(max_speed);
        }
        if let Some(driver_id) = changes.driver_id {
            vehicle_am.driver_id = ActiveValue::Set(driver_id);
        }

        if !vehicle_am.is_changed() {
            return Ok(Some(vehicle));
        }

        let vehicle = vehicle_am.update(self.db).await?;

        Ok(Some(vehicle))
    }

    /// Unassigns the provided character from the vehicle they drive, the vehicle is kept
    pub async fn clear_driver(&self, character_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::Vehicle::update_many()
            .set(entity::vehicle::ActiveModel {
                driver_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::vehicle::Column::DriverId.eq(character_id))
            .exec(self.db)
            .await
    }

    /// Deletes a vehicle, check [`DeleteResult::rows_affected`] to confirm it existed
    pub async fn delete(&self, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Vehicle::delete_by_id(vehicle_id)
            .exec(self.db)
            .await
    }
}
