use crate::api::booking_management::models::{parse_approval, Booking, BookingOut};
use crate::api::item_management::models::find_item;
use crate::api::user_management::models::find_user;
use crate::api::user_management::sharer::Sharer;
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::bookings;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[patch("/bookings/<booking_id>?<approved>")]
pub(crate) async fn approve_booking(
    booking_id: i64,
    approved: Option<String>,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<BookingOut>, ErrorResponse> {
    let approved = parse_approval(approved.as_deref())?;

    let booking = conn
        .run(move |c| {
            c.transaction::<_, ServiceError, _>(|c| {
                let booking = bookings::table
                    .find(booking_id)
                    .select(Booking::as_select())
                    .for_update()
                    .first(c)
                    .optional()?
                    .ok_or_else(|| {
                        ServiceError::NotFound(format!("Booking with id {} not found", booking_id))
                    })?;
                let item = find_item(c, booking.item_id)?;
                let status = booking.review(item.owner_id, sharer.0, approved)?;

                let booking = diesel::update(&booking)
                    .set(bookings::status.eq(status))
                    .returning(Booking::as_returning())
                    .get_result(c)?;
                let booker = find_user(c, booking.booker_id)?;

                Ok(BookingOut::new(booking, item.name, booker.name))
            })
        })
        .await?;

    tracing::info!(booking_id, status = %booking.status, "reviewed booking");
    Ok(Json(booking))
}
