use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::model::db::CharacterModel;

/// Columns to overwrite on a character, `None` leaves the stored value untouched
#[derive(Debug, Default)]
pub struct CharacterChanges {
    pub first_name: Option<String>,
    pub last_name: Option<Option<String>>,
    pub specie: Option<String>,
    pub height: Option<Option<i32>>,
}

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        first_name: String,
        specie: String,
        last_name: Option<String>,
        height: Option<i32>,
    ) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            specie: ActiveValue::Set(specie),
            height: ActiveValue::Set(height),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get_by_id(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites the columns present in `changes`, `Ok(None)` if the character does not exist
    pub async fn update(
        &self,
        character_id: i32,
        changes: CharacterChanges,
    ) -> Result<Option<CharacterModel>, DbErr> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.clone().into_active_model();
        if let Some(first_name) = changes.first_name {
            character_am.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            character_am.last_name = ActiveValue::Set(last_name);
        }
        if let Some(specie) = changes.specie {
            character_am.specie = ActiveValue::Set(specie);
        }
        if let Some(height) = changes.height {
            character_am.height = ActiveValue::Set(height);
        }

        if !character_am.is_changed() {
            return Ok(Some(character));
        }

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character, check [`DeleteResult::rows_affected`] to confirm it existed
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
