use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        data::{
            favorite::{
                character::FavoriteCharacterRepository, planet::FavoritePlanetRepository,
                vehicle::FavoriteVehicleRepository,
            },
            user::{UserChanges, UserRepository},
        },
        error::{request::RequestError, resource::ResourceError, Error},
        service::password::hash_password,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_by_id(user_id).await?.map(UserDto::from))
    }

    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Creates a user, storing an argon2 hash of the provided password
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::RequestError)` - `email` or `password` is missing
    /// - `Err(Error::DbErr)` - The email is already in use or the insert failed
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        let email = user.email.ok_or(RequestError::MissingField("email"))?;
        let password = user.password.ok_or(RequestError::MissingField("password"))?;

        let password_hash = hash_password(&password)?;

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .create(
                email,
                password_hash,
                user.user_name,
                user.is_active.unwrap_or(true),
            )
            .await?;

        Ok(user.into())
    }

    /// Writes the keys present in `changes`, a new password is hashed before storage
    pub async fn update_user(&self, user_id: i32, changes: UpdateUserDto) -> Result<UserDto, Error> {
        let password_hash = match changes.password {
            Some(password) => Some(hash_password(&password)?),
            None => None,
        };

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .update(
                user_id,
                UserChanges {
                    user_name: changes.user_name,
                    email: changes.email,
                    password_hash,
                    is_active: changes.is_active,
                },
            )
            .await?
            .ok_or(ResourceError::UserNotFound(user_id))?;

        Ok(user.into())
    }

    /// Deletes a user along with its favorite vehicles
    ///
    /// Favorite character & planet links of the user are kept with their user cleared.
    pub async fn delete_user(&self, user_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        FavoriteVehicleRepository::new(&txn)
            .delete_by_user_id(user_id)
            .await?;
        FavoriteCharacterRepository::new(&txn)
            .detach_user(user_id)
            .await?;
        FavoritePlanetRepository::new(&txn)
            .detach_user(user_id)
            .await?;

        let result = UserRepository::new(&txn).delete(user_id).await?;
        if result.rows_affected == 0 {
            return Err(ResourceError::UserNotFound(user_id).into());
        }

        txn.commit().await?;

        tracing::debug!(user_id, "Deleted user");

        Ok(())
    }
}
