use std::str::FromStr;

use crate::api::booking_management::models::{Booking, BookingStatus};
use crate::error::ServiceError;
use chrono::NaiveDateTime;

/// Slice of a booking list requested through `?state=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingState {
    #[default]
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl FromStr for BookingState {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(BookingState::All),
            "CURRENT" => Ok(BookingState::Current),
            "PAST" => Ok(BookingState::Past),
            "FUTURE" => Ok(BookingState::Future),
            "WAITING" => Ok(BookingState::Waiting),
            "REJECTED" => Ok(BookingState::Rejected),
            _ => Err(ServiceError::BadRequest(format!("Unknown state: {}", s))),
        }
    }
}

impl BookingState {
    pub fn parse(state: Option<&str>) -> Result<Self, ServiceError> {
        state.map_or(Ok(BookingState::All), |s| s.parse())
    }

    /// In-memory form of the filter the listing queries apply.
    pub fn matches(&self, booking: &Booking, now: NaiveDateTime) -> bool {
        match self {
            BookingState::All => true,
            BookingState::Current => booking.start_date <= now && now <= booking.end_date,
            BookingState::Past => booking.end_date < now,
            BookingState::Future => booking.start_date > now,
            BookingState::Waiting => booking.status == BookingStatus::Waiting,
            BookingState::Rejected => booking.status == BookingStatus::Rejected,
        }
    }
}
