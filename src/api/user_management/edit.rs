use crate::api::non_blank;
use crate::api::user_management::models::{find_user, User, UserOut, UserPatch};
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use diesel::prelude::*;
use rocket::serde::json::Json;
use validator::Validate;

#[patch("/users/<user_id>", data = "<patch>")]
pub(crate) async fn edit_user(
    user_id: i64,
    patch: Json<UserPatch>,
    conn: DbConn,
) -> Result<Json<UserOut>, ErrorResponse> {
    let patch = patch.into_inner();
    let name = non_blank(patch.name.clone());
    let email = non_blank(patch.email.clone());
    UserPatch {
        name: name.clone(),
        email: email.clone(),
    }
    .validate()
    .map_err(ServiceError::from)?;

    let user = conn
        .run(move |c| {
            c.transaction::<_, ServiceError, _>(|c| {
                let mut user = find_user(c, user_id)?;
                if name.is_none() && email.is_none() {
                    return Ok(user);
                }

                if let Some(name) = name {
                    user.name = name.trim().to_string();
                }
                if let Some(email) = email {
                    user.email = email;
                }

                Ok(user.save_changes::<User>(c)?)
            })
        })
        .await?;

    tracing::info!(user_id, "updated user");
    Ok(Json(user.into()))
}
