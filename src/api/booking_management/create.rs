use crate::api::booking_management::models::{Booking, BookingIn, BookingOut, NewBooking};
use crate::api::item_management::models::find_item;
use crate::api::user_management::models::find_user;
use crate::api::user_management::sharer::Sharer;
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::bookings;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[post("/bookings", data = "<booking_in>")]
pub(crate) async fn create_booking(
    booking_in: Json<BookingIn>,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<BookingOut>, ErrorResponse> {
    let BookingIn {
        item_id,
        start,
        end,
    } = booking_in.into_inner();

    let booking = conn
        .run(move |c| {
            c.transaction::<_, ServiceError, _>(|c| {
                let booker = find_user(c, sharer.0)?;
                let item = find_item(c, item_id)?;
                let new_booking = NewBooking::for_item(&item, booker.id, start, end)?;

                let booking = diesel::insert_into(bookings::table)
                    .values(&new_booking)
                    .returning(Booking::as_returning())
                    .get_result(c)?;

                Ok(BookingOut::new(booking, item.name, booker.name))
            })
        })
        .await?;

    tracing::info!(
        booking_id = booking.id,
        item_id,
        booker_id = sharer.0,
        "created booking"
    );
    Ok(Json(booking))
}
