use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    server::{
        data::{
            catalog::{
                character::{CharacterChanges, CharacterRepository},
                vehicle::VehicleRepository,
            },
            favorite::character::FavoriteCharacterRepository,
        },
        error::{request::RequestError, resource::ResourceError, Error},
    },
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_character(&self, character_id: i32) -> Result<Option<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        Ok(character_repo
            .get_by_id(character_id)
            .await?
            .map(CharacterDto::from))
    }

    pub async fn get_all_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let characters = character_repo.get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Creates a character, `first_name` & `specie` are required
    pub async fn create_character(
        &self,
        character: CreateCharacterDto,
    ) -> Result<CharacterDto, Error> {
        let first_name = character
            .first_name
            .ok_or(RequestError::MissingField("first_name"))?;
        let specie = character
            .specie
            .ok_or(RequestError::MissingField("specie"))?;

        let character_repo = CharacterRepository::new(self.db);
        let character = character_repo
            .create(first_name, specie, character.last_name, character.height)
            .await?;

        Ok(character.into())
    }

    pub async fn update_character(
        &self,
        character_id: i32,
        changes: UpdateCharacterDto,
    ) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo
            .update(
                character_id,
                CharacterChanges {
                    first_name: changes.first_name,
                    last_name: changes.last_name,
                    specie: changes.specie,
                    height: changes.height,
                },
            )
            .await?
            .ok_or(ResourceError::CharacterNotFound(character_id))?;

        Ok(character.into())
    }

    /// Deletes a character along with its favorite links
    ///
    /// The vehicle driven by the character is kept without a driver.
    pub async fn delete_character(&self, character_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        FavoriteCharacterRepository::new(&txn)
            .delete_by_character_id(character_id)
            .await?;
        VehicleRepository::new(&txn)
            .clear_driver(character_id)
            .await?;

        let result = CharacterRepository::new(&txn).delete(character_id).await?;
        if result.rows_affected == 0 {
            return Err(ResourceError::CharacterNotFound(character_id).into());
        }

        txn.commit().await?;

        tracing::debug!(character_id, "Deleted character");

        Ok(())
    }
}
