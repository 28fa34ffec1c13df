use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::{FavoriteVehicleModel, VehicleModel};

pub struct FavoriteVehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteVehicleRepository<'a, C> {
    /// Creates a new instance of [`FavoriteVehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<FavoriteVehicleModel, DbErr> {
        let favorite = entity::favorite_vehicle::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_id(&self, favorite_id: i32) -> Result<Option<FavoriteVehicleModel>, DbErr> {
        entity::prelude::FavoriteVehicle::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<FavoriteVehicleModel>, DbErr> {
        entity::prelude::FavoriteVehicle::find()
            .order_by_asc(entity::favorite_vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the favorite vehicle links of a user paired with the linked vehicle, ordered by link ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(FavoriteVehicleModel, Option<VehicleModel>)>, DbErr> {
        entity::prelude::FavoriteVehicle::find()
            .filter(entity::favorite_vehicle::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Vehicle)
            .order_by_asc(entity::favorite_vehicle::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteVehicle::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_vehicle_id(&self, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteVehicle::delete_many()
            .filter(entity::favorite_vehicle::Column::VehicleId.eq(vehicle_id))
            .exec(self.db)
            .await
    }

    /// Deletes every favorite vehicle link owned by the provided user
    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteVehicle::delete_many()
            .filter(entity::favorite_vehicle::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
