use crate::api::user_management::models::{NewUser, User, UserIn, UserOut};
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::users;
use diesel::prelude::*;
use rocket::serde::json::Json;
use validator::Validate;

#[post("/users", data = "<user_in>")]
pub(crate) async fn create_user(
    user_in: Json<UserIn>,
    conn: DbConn,
) -> Result<Json<UserOut>, ErrorResponse> {
    user_in.validate().map_err(ServiceError::from)?;

    let new_user = NewUser {
        name: user_in.name.trim().to_string(),
        email: user_in.email.clone(),
    };

    let user = conn
        .run(move |c| {
            diesel::insert_into(users::table)
                .values(&new_user)
                .returning(User::as_returning())
                .get_result(c)
                .map_err(ServiceError::from)
        })
        .await?;

    tracing::info!(user_id = user.id, "created user");
    Ok(Json(user.into()))
}
