use crate::api::user_management::models::{User, UserOut};
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::users;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[get("/users")]
pub(crate) async fn get_users(conn: DbConn) -> Result<Json<Vec<UserOut>>, ErrorResponse> {
    let user_list = conn
        .run(|c| {
            users::table
                .order(users::id.asc())
                .select(User::as_select())
                .load(c)
                .map_err(ServiceError::from)
        })
        .await?;

    Ok(Json(user_list.into_iter().map(UserOut::from).collect()))
}
