use crate::api::booking_management::models::{Booking, BookingOut};
use crate::api::user_management::sharer::Sharer;
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::{bookings, items, users};
use diesel::prelude::*;
use rocket::serde::json::Json;

#[get("/bookings/<booking_id>")]
pub(crate) async fn get_booking(
    booking_id: i64,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<BookingOut>, ErrorResponse> {
    let booking = conn
        .run(move |c| -> Result<BookingOut, ServiceError> {
            let found = bookings::table
                .inner_join(items::table)
                .inner_join(users::table.on(users::id.eq(bookings::booker_id)))
                .filter(bookings::id.eq(booking_id))
                .select((Booking::as_select(), items::owner_id, items::name, users::name))
                .first::<(Booking, i64, String, String)>(c)
                .optional()?;

            match found {
                Some((booking, owner_id, item_name, booker_name))
                    if booking.visible_to(owner_id, sharer.0) =>
                {
                    Ok(BookingOut::new(booking, item_name, booker_name))
                }
                _ => Err(ServiceError::NotFound(format!(
                    "Booking with id {} not found for user {}",
                    booking_id, sharer.0
                ))),
            }
        })
        .await?;

    Ok(Json(booking))
}
