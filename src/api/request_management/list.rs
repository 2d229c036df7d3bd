use crate::api::request_management::models::{with_answers, ItemRequest, ItemRequestOut};
use crate::api::user_management::models::find_user;
use crate::api::user_management::sharer::Sharer;
use crate::api::Page;
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::requests;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[get("/requests")]
pub(crate) async fn get_own_requests(
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<Vec<ItemRequestOut>>, ErrorResponse> {
    let request_list = conn
        .run(move |c| {
            let requestor = find_user(c, sharer.0)?;

            let own = requests::table
                .filter(requests::requestor_id.eq(requestor.id))
                .order((requests::created.desc(), requests::id.desc()))
                .select(ItemRequest::as_select())
                .load(c)
                .map_err(ServiceError::from)?;

            with_answers(c, own)
        })
        .await?;

    Ok(Json(request_list))
}

#[get("/requests/all?<page..>")]
pub(crate) async fn get_all_requests(
    page: Page,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<Vec<ItemRequestOut>>, ErrorResponse> {
    let page = page.checked()?;

    let request_list = conn
        .run(move |c| {
            let user = find_user(c, sharer.0)?;

            let others = requests::table
                .filter(requests::requestor_id.ne(user.id))
                .order((requests::created.desc(), requests::id.desc()))
                .offset(page.from)
                .limit(page.size)
                .select(ItemRequest::as_select())
                .load(c)
                .map_err(ServiceError::from)?;

            with_answers(c, others)
        })
        .await?;

    Ok(Json(request_list))
}
