use crate::api::request_management::models::{with_answers, ItemRequest, ItemRequestOut};
use crate::api::user_management::models::find_user;
use crate::api::user_management::sharer::Sharer;
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::requests;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[get("/requests/<request_id>")]
pub(crate) async fn get_request(
    request_id: i64,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<ItemRequestOut>, ErrorResponse> {
    let mut found = conn
        .run(move |c| {
            find_user(c, sharer.0)?;

            let request = requests::table
                .find(request_id)
                .select(ItemRequest::as_select())
                .first(c)
                .optional()?
                .ok_or_else(|| {
                    ServiceError::NotFound(format!("Request with id {} not found", request_id))
                })?;

            with_answers(c, vec![request])
        })
        .await?;

    found.pop().map(Json).ok_or_else(|| {
        ServiceError::NotFound(format!("Request with id {} not found", request_id)).into()
    })
}
