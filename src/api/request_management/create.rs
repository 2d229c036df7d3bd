use crate::api::now;
use crate::api::request_management::models::{
    ItemRequest, ItemRequestIn, ItemRequestOut, NewItemRequest,
};
use crate::api::user_management::models::find_user;
use crate::api::user_management::sharer::Sharer;
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::requests;
use diesel::prelude::*;
use rocket::serde::json::Json;
use validator::Validate;

#[post("/requests", data = "<request_in>")]
pub(crate) async fn create_request(
    request_in: Json<ItemRequestIn>,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<ItemRequestOut>, ErrorResponse> {
    request_in.validate().map_err(ServiceError::from)?;
    let description = request_in.into_inner().description.trim().to_string();

    let request = conn
        .run(move |c| {
            let requestor = find_user(c, sharer.0)?;

            diesel::insert_into(requests::table)
                .values(&NewItemRequest {
                    description,
                    requestor_id: requestor.id,
                    created: now(),
                })
                .returning(ItemRequest::as_returning())
                .get_result(c)
                .map_err(ServiceError::from)
        })
        .await?;

    tracing::info!(request_id = request.id, requestor_id = sharer.0, "created item request");
    Ok(Json(ItemRequestOut::new(request, Vec::new())))
}
