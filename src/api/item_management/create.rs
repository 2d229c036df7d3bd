use crate::api::item_management::models::{Item, ItemIn, ItemOut, NewItem};
use crate::api::user_management::models::find_user;
use crate::api::user_management::sharer::Sharer;
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::{items, requests};
use diesel::prelude::*;
use rocket::serde::json::Json;
use validator::Validate;

#[post("/items", data = "<item_in>")]
pub(crate) async fn create_item(
    item_in: Json<ItemIn>,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<ItemOut>, ErrorResponse> {
    item_in.validate().map_err(ServiceError::from)?;
    let item_in = item_in.into_inner();

    let item = conn
        .run(move |c| {
            c.transaction::<_, ServiceError, _>(|c| {
                let owner = find_user(c, sharer.0)?;

                // Unknown or zero request ids leave the item unlinked
                let request_id = match item_in.request_id.filter(|&rid| rid != 0) {
                    Some(rid) => requests::table
                        .find(rid)
                        .select(requests::id)
                        .first::<i64>(c)
                        .optional()?,
                    None => None,
                };

                let new_item = NewItem {
                    name: item_in.name.trim().to_string(),
                    description: item_in.description.trim().to_string(),
                    is_available: item_in.available.unwrap_or_default(),
                    owner_id: owner.id,
                    request_id,
                };

                Ok(diesel::insert_into(items::table)
                    .values(&new_item)
                    .returning(Item::as_returning())
                    .get_result(c)?)
            })
        })
        .await?;

    tracing::info!(item_id = item.id, owner_id = item.owner_id, "created item");
    Ok(Json(item.into()))
}
