use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::deserialize_present;

/// External representation of a user, the password hash is never exposed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub user_name: Option<String>,
    pub is_active: bool,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            user_name: user.user_name,
            is_active: user.is_active,
        }
    }
}

/// Request body for creating a user, `email` and `password` are required
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub user_name: Option<String>,
    /// Defaults to `true`
    pub is_active: Option<bool>,
}

/// Request body for a partial user update, only keys present are written
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub user_name: Option<Option<String>>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}
