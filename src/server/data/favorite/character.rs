use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, UpdateResult,
};

use crate::server::model::db::{CharacterModel, FavoriteCharacterModel};

pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, DbErr> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(Some(user_id)),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        favorite_id: i32,
    ) -> Result<Option<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacter::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Gets every favorite character link, including links whose user was deleted
    pub async fn get_all(&self) -> Result<Vec<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the favorite character links of a user paired with the linked character
    ///
    /// Results are ordered by link ID, duplicate links yield duplicate entries.
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(FavoriteCharacterModel, Option<CharacterModel>)>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Character)
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacter::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Deletes every link targeting the provided character
    pub async fn delete_by_character_id(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacter::delete_many()
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .exec(self.db)
            .await
    }

    /// Clears the owning user of every link belonging to the provided user, links are kept
    pub async fn detach_user(&self, user_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::FavoriteCharacter::update_many()
            .set(entity::favorite_character::ActiveModel {
                user_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
