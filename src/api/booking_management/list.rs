use crate::api::booking_management::models::{Booking, BookingOut, BookingStatus};
use crate::api::booking_management::state::BookingState;
use crate::api::user_management::models::find_user;
use crate::api::user_management::sharer::Sharer;
use crate::api::{now, Page};
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::{bookings, items, users};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Perspective {
    Booker,
    Owner,
}

/// Bookings placed by `user_id`, or placed on items `user_id` owns, newest start first.
pub(crate) fn load_bookings(
    c: &mut PgConnection,
    perspective: Perspective,
    user_id: i64,
    state: BookingState,
    page: Page,
    now: NaiveDateTime,
) -> Result<Vec<BookingOut>, ServiceError> {
    let mut query = bookings::table
        .inner_join(items::table)
        .inner_join(users::table.on(users::id.eq(bookings::booker_id)))
        .select((Booking::as_select(), items::name, users::name))
        .into_boxed();

    query = match perspective {
        Perspective::Booker => query.filter(bookings::booker_id.eq(user_id)),
        Perspective::Owner => query.filter(items::owner_id.eq(user_id)),
    };

    query = match state {
        BookingState::All => query,
        BookingState::Current => query.filter(
            bookings::start_date
                .le(now)
                .and(bookings::end_date.ge(now)),
        ),
        BookingState::Past => query.filter(bookings::end_date.lt(now)),
        BookingState::Future => query.filter(bookings::start_date.gt(now)),
        BookingState::Waiting => query.filter(bookings::status.eq(BookingStatus::Waiting)),
        BookingState::Rejected => query.filter(bookings::status.eq(BookingStatus::Rejected)),
    };

    let rows = query
        .order((bookings::start_date.desc(), bookings::id.desc()))
        .offset(page.from)
        .limit(page.size)
        .load::<(Booking, String, String)>(c)?;

    Ok(rows
        .into_iter()
        .map(|(booking, item_name, booker_name)| BookingOut::new(booking, item_name, booker_name))
        .collect())
}

async fn list_bookings(
    perspective: Perspective,
    state: Option<String>,
    page: Page,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<Vec<BookingOut>>, ErrorResponse> {
    let state = BookingState::parse(state.as_deref())?;
    let page = page.checked()?;

    let booking_list = conn
        .run(move |c| {
            let user = find_user(c, sharer.0)?;
            load_bookings(c, perspective, user.id, state, page, now())
        })
        .await?;

    Ok(Json(booking_list))
}

#[get("/bookings?<state>&<page..>")]
pub(crate) async fn get_booker_bookings(
    state: Option<String>,
    page: Page,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<Vec<BookingOut>>, ErrorResponse> {
    list_bookings(Perspective::Booker, state, page, sharer, conn).await
}

#[get("/bookings/owner?<state>&<page..>")]
pub(crate) async fn get_owner_bookings(
    state: Option<String>,
    page: Page,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<Vec<BookingOut>>, ErrorResponse> {
    list_bookings(Perspective::Owner, state, page, sharer, conn).await
}
