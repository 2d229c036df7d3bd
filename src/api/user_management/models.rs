use crate::api::not_blank;
use crate::error::ServiceError;
use crate::schema::users;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Queryable, Selectable, Identifiable, AsChangeset, Debug, Clone)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUser {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize, Validate, Debug)]
pub struct UserIn {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: String,
    #[validate(email, length(max = 512))]
    pub email: String,
}

#[derive(Deserialize, Validate, Debug, Default)]
pub struct UserPatch {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(email, length(max = 512))]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserOut {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserOut {
    fn from(user: User) -> Self {
        UserOut {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

pub(crate) fn find_user(c: &mut PgConnection, user_id: i64) -> Result<User, ServiceError> {
    users::table
        .find(user_id)
        .select(User::as_select())
        .first(c)
        .optional()?
        .ok_or_else(|| ServiceError::NotFound(format!("User with id {} not found", user_id)))
}
