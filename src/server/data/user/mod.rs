use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::model::db::UserModel;

/// Columns to overwrite on a user, `None` leaves the stored value untouched
#[derive(Debug, Default)]
pub struct UserChanges {
    pub user_name: Option<Option<String>>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub is_active: Option<bool>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// # Arguments
    /// - `email` - Unique email of the user
    /// - `password_hash` - Already hashed password, never the plaintext
    /// - `user_name` - Optional display name
    /// - `is_active` - Whether the account is active
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        user_name: Option<String>,
        is_active: bool,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            user_name: ActiveValue::Set(user_name),
            is_active: ActiveValue::Set(is_active),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites the columns present in `changes`
    ///
    /// Returns `Ok(None)` if the user does not exist.
    pub async fn update(
        &self,
        user_id: i32,
        changes: UserChanges,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.clone().into_active_model();
        if let Some(user_name) = changes.user_name {
            user_am.user_name = ActiveValue::Set(user_name);
        }
        if let Some(email) = changes.email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = changes.password_hash {
            user_am.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(is_active) = changes.is_active {
            user_am.is_active = ActiveValue::Set(is_active);
        }

        if !user_am.is_changed() {
            return Ok(Some(user));
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
