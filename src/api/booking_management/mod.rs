pub mod approve;
pub mod create;
pub mod get_booking;
pub mod list;
pub mod models;
pub mod state;

pub(crate) fn routes() -> Vec<rocket::Route> {
    routes![
        create::create_booking,
        approve::approve_booking,
        get_booking::get_booking,
        list::get_booker_bookings,
        list::get_owner_bookings,
    ]
}
