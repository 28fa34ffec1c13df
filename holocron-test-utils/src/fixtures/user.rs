use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

/// Password hash stored for fixture users, not a valid hash for any password
pub const TEST_PASSWORD_HASH: &str = "not-a-real-hash";

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user without a user name.
    pub async fn insert_user(&self, email: &str) -> Result<UserModel, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
            user_name: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
