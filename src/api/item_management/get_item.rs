use std::collections::HashMap;

use crate::api::booking_management::models::{Booking, BookingStatus};
use crate::api::item_management::models::{
    find_item, last_and_next, Comment, CommentOut, Item, ItemBookingOut, ItemDetailsOut, ItemOut,
};
use crate::api::now;
use crate::api::user_management::sharer::Sharer;
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::{bookings, comments, users};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::json::Json;

/// Attaches comments to every item, and last/next bookings when
/// `with_bookings` is set.
pub(crate) fn item_details(
    c: &mut PgConnection,
    item_list: Vec<Item>,
    with_bookings: bool,
    now: NaiveDateTime,
) -> Result<Vec<ItemDetailsOut>, ServiceError> {
    let ids: Vec<i64> = item_list.iter().map(|item| item.id).collect();

    let comment_rows = comments::table
        .inner_join(users::table.on(users::id.eq(comments::author_id)))
        .filter(comments::item_id.eq_any(&ids))
        .order((comments::created.desc(), comments::id.desc()))
        .select((Comment::as_select(), users::name))
        .load::<(Comment, String)>(c)?;

    let mut comments_by_item: HashMap<i64, Vec<CommentOut>> = HashMap::new();
    for (comment, author_name) in comment_rows {
        comments_by_item
            .entry(comment.item_id)
            .or_default()
            .push(CommentOut::new(comment, author_name));
    }

    let mut bookings_by_item: HashMap<i64, Vec<Booking>> = HashMap::new();
    if with_bookings {
        let booking_rows = bookings::table
            .filter(bookings::item_id.eq_any(&ids))
            .filter(bookings::status.eq(BookingStatus::Approved))
            .select(Booking::as_select())
            .load(c)?;
        for booking in booking_rows {
            bookings_by_item
                .entry(booking.item_id)
                .or_default()
                .push(booking);
        }
    }

    Ok(item_list
        .into_iter()
        .map(|item| {
            let item_bookings = bookings_by_item.remove(&item.id).unwrap_or_default();
            let (last, next) = last_and_next(&item_bookings, now);

            ItemDetailsOut {
                last_booking: last.map(ItemBookingOut::from),
                next_booking: next.map(ItemBookingOut::from),
                comments: comments_by_item.remove(&item.id).unwrap_or_default(),
                item: ItemOut::from(item),
            }
        })
        .collect())
}

#[get("/items/<item_id>")]
pub(crate) async fn get_item(
    item_id: i64,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<ItemDetailsOut>, ErrorResponse> {
    let mut details = conn
        .run(move |c| {
            let item = find_item(c, item_id)?;
            let is_owner = item.owner_id == sharer.0;
            item_details(c, vec![item], is_owner, now())
        })
        .await?;

    details.pop().map(Json).ok_or_else(|| {
        ServiceError::NotFound(format!("Item with id {} not found", item_id)).into()
    })
}
