use crate::api::item_management::get_item::item_details;
use crate::api::item_management::models::{Item, ItemDetailsOut};
use crate::api::user_management::models::find_user;
use crate::api::user_management::sharer::Sharer;
use crate::api::{now, Page};
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::items;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[get("/items?<page..>")]
pub(crate) async fn get_items(
    page: Page,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<Vec<ItemDetailsOut>>, ErrorResponse> {
    let page = page.checked()?;

    let item_list = conn
        .run(move |c| {
            let owner = find_user(c, sharer.0)?;

            let item_list = items::table
                .filter(items::owner_id.eq(owner.id))
                .order(items::id.asc())
                .offset(page.from)
                .limit(page.size)
                .select(Item::as_select())
                .load(c)
                .map_err(ServiceError::from)?;

            item_details(c, item_list, true, now())
        })
        .await?;

    Ok(Json(item_list))
}
