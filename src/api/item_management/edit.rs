use crate::api::item_management::models::{find_item, Item, ItemOut, ItemPatch};
use crate::api::non_blank;
use crate::api::user_management::sharer::Sharer;
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use diesel::prelude::*;
use rocket::serde::json::Json;
use validator::Validate;

#[patch("/items/<item_id>", data = "<patch>")]
pub(crate) async fn edit_item(
    item_id: i64,
    patch: Json<ItemPatch>,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<ItemOut>, ErrorResponse> {
    let patch = patch.into_inner();
    let patch = ItemPatch {
        name: non_blank(patch.name),
        description: non_blank(patch.description),
        available: patch.available,
    };
    patch.validate().map_err(ServiceError::from)?;

    let item = conn
        .run(move |c| {
            c.transaction::<_, ServiceError, _>(|c| {
                let mut item = find_item(c, item_id)?;
                if item.owner_id != sharer.0 {
                    return Err(ServiceError::NotFound(format!(
                        "Item with id {} not found for owner {}",
                        item_id, sharer.0
                    )));
                }

                if let Some(name) = patch.name {
                    item.name = name.trim().to_string();
                }
                if let Some(description) = patch.description {
                    item.description = description.trim().to_string();
                }
                if let Some(available) = patch.available {
                    item.is_available = available;
                }

                Ok(item.save_changes::<Item>(c)?)
            })
        })
        .await?;

    tracing::info!(item_id, "updated item");
    Ok(Json(item.into()))
}
