use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::users;
use diesel::prelude::*;

#[delete("/users/<user_id>")]
pub(crate) async fn delete_user(user_id: i64, conn: DbConn) -> Result<(), ErrorResponse> {
    let deleted = conn
        .run(move |c| {
            diesel::delete(users::table.find(user_id))
                .execute(c)
                .map_err(ServiceError::from)
        })
        .await?;

    if deleted == 0 {
        return Err(ServiceError::NotFound(format!("User with id {} not found", user_id)).into());
    }

    tracing::info!(user_id, "deleted user");
    Ok(())
}
