use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, UpdateResult,
};

use crate::server::model::db::{FavoritePlanetModel, PlanetModel};

pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, planet_id: i32) -> Result<FavoritePlanetModel, DbErr> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(Some(user_id)),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_id(&self, favorite_id: i32) -> Result<Option<FavoritePlanetModel>, DbErr> {
        entity::prelude::FavoritePlanet::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<FavoritePlanetModel>, DbErr> {
        entity::prelude::FavoritePlanet::find()
            .order_by_asc(entity::favorite_planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the favorite planet links of a user paired with the linked planet, ordered by link ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(FavoritePlanetModel, Option<PlanetModel>)>, DbErr> {
        entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Planet)
            .order_by_asc(entity::favorite_planet::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePlanet::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_planet_id(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePlanet::delete_many()
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .exec(self.db)
            .await
    }

    /// Clears the owning user of every link belonging to the provided user, links are kept
    pub async fn detach_user(&self, user_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::FavoritePlanet::update_many()
            .set(entity::favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
