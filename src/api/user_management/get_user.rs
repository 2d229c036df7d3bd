use crate::api::user_management::models::{find_user, UserOut};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;

#[get("/users/<user_id>")]
pub(crate) async fn get_user(user_id: i64, conn: DbConn) -> Result<Json<UserOut>, ErrorResponse> {
    let user = conn.run(move |c| find_user(c, user_id)).await?;

    Ok(Json(user.into()))
}
