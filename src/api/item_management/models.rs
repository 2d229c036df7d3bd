use crate::api::booking_management::models::{Booking, BookingStatus};
use crate::api::not_blank;
use crate::error::ServiceError;
use crate::schema::{comments, items};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Queryable, Selectable, Identifiable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = items)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub is_available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = items)]
pub(crate) struct NewItem {
    pub name: String,
    pub description: String,
    pub is_available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = comments)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub item_id: i64,
    pub author_id: i64,
    pub created: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewComment {
    pub text: String,
    pub item_id: i64,
    pub author_id: i64,
    pub created: NaiveDateTime,
}

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ItemIn {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: String,
    #[validate(length(max = 512), custom(function = "not_blank"))]
    pub description: String,
    #[validate(required)]
    pub available: Option<bool>,
    pub request_id: Option<i64>,
}

#[derive(Deserialize, Validate, Debug, Default)]
pub struct ItemPatch {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 512))]
    pub description: Option<String>,
    pub available: Option<bool>,
}

#[derive(Deserialize, Validate, Debug)]
pub struct CommentIn {
    #[validate(length(max = 512), custom(function = "not_blank"))]
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemOut {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

impl From<Item> for ItemOut {
    fn from(item: Item) -> Self {
        ItemOut {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.is_available,
            owner_id: item.owner_id,
            request_id: item.request_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemBookingOut {
    pub id: i64,
    pub booker_id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl From<&Booking> for ItemBookingOut {
    fn from(booking: &Booking) -> Self {
        ItemBookingOut {
            id: booking.id,
            booker_id: booking.booker_id,
            start: booking.start_date,
            end: booking.end_date,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentOut {
    pub id: i64,
    pub text: String,
    pub author_name: String,
    pub created: NaiveDateTime,
}

impl CommentOut {
    pub(crate) fn new(comment: Comment, author_name: String) -> Self {
        CommentOut {
            id: comment.id,
            text: comment.text,
            author_name,
            created: comment.created,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetailsOut {
    #[serde(flatten)]
    pub item: ItemOut,
    pub last_booking: Option<ItemBookingOut>,
    pub next_booking: Option<ItemBookingOut>,
    pub comments: Vec<CommentOut>,
}

pub(crate) fn find_item(c: &mut PgConnection, item_id: i64) -> Result<Item, ServiceError> {
    items::table
        .find(item_id)
        .select(Item::as_select())
        .first(c)
        .optional()?
        .ok_or_else(|| ServiceError::NotFound(format!("Item with id {} not found", item_id)))
}

/// Picks the latest approved booking that already started and the earliest
/// approved booking still ahead.
pub fn last_and_next(
    bookings: &[Booking],
    now: NaiveDateTime,
) -> (Option<&Booking>, Option<&Booking>) {
    let approved = || {
        bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Approved)
    };

    let last = approved()
        .filter(|b| b.start_date <= now)
        .max_by_key(|b| b.end_date);
    let next = approved()
        .filter(|b| b.start_date > now)
        .min_by_key(|b| b.start_date);

    (last, next)
}
