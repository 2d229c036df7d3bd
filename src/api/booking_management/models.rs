use std::fmt;
use std::io::Write;

use crate::api::item_management::models::Item;
use crate::error::ServiceError;
use crate::schema::bookings;
use chrono::NaiveDateTime;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "WAITING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql<Text, Pg> for BookingStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for BookingStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"WAITING" => Ok(BookingStatus::Waiting),
            b"APPROVED" => Ok(BookingStatus::Approved),
            b"REJECTED" => Ok(BookingStatus::Rejected),
            other => Err(format!(
                "Unrecognized booking status: {}",
                String::from_utf8_lossy(other)
            )
            .into()),
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = bookings)]
pub struct Booking {
    pub id: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub item_id: i64,
    pub booker_id: i64,
    pub status: BookingStatus,
}

impl Booking {
    /// Only the booker and the owner of the booked item may see a booking.
    pub fn visible_to(&self, item_owner_id: i64, caller: i64) -> bool {
        self.booker_id == caller || item_owner_id == caller
    }

    /// Status the booking moves to when the item owner decides on it.
    pub fn review(
        &self,
        item_owner_id: i64,
        caller: i64,
        approved: bool,
    ) -> Result<BookingStatus, ServiceError> {
        if item_owner_id != caller {
            return Err(ServiceError::NotFound(format!(
                "Booking with id {} not found for owner {}",
                self.id, caller
            )));
        }
        if self.status != BookingStatus::Waiting {
            return Err(ServiceError::BadRequest(format!(
                "Booking {} is already {}",
                self.id, self.status
            )));
        }

        Ok(if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        })
    }
}

/// Reads the required `approved` flag; only `true` and `false` are accepted.
pub fn parse_approval(approved: Option<&str>) -> Result<bool, ServiceError> {
    let raw = approved.ok_or_else(|| {
        ServiceError::BadRequest("Parameter 'approved' is required".to_string())
    })?;

    raw.parse::<bool>().map_err(|_| {
        ServiceError::BadRequest(format!(
            "Parameter 'approved' must be true or false, got {}",
            raw
        ))
    })
}

#[derive(Insertable, Debug)]
#[diesel(table_name = bookings)]
pub(crate) struct NewBooking {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub item_id: i64,
    pub booker_id: i64,
    pub status: BookingStatus,
}

impl NewBooking {
    /// Checks a booking request against the item it targets.
    pub fn for_item(
        item: &Item,
        booker_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, ServiceError> {
        if !item.is_available {
            return Err(ServiceError::BadRequest(format!(
                "Item {} is not available for booking",
                item.id
            )));
        }
        if start >= end {
            return Err(ServiceError::BadRequest(format!(
                "Booking start {} must be before its end {}",
                start, end
            )));
        }
        if item.owner_id == booker_id {
            return Err(ServiceError::BadRequest(format!(
                "Owner can't book their own item {}",
                item.id
            )));
        }

        Ok(NewBooking {
            start_date: start,
            end_date: end,
            item_id: item.id,
            booker_id,
            status: BookingStatus::Waiting,
        })
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookingIn {
    pub item_id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookerOut {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookedItemOut {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookingOut {
    pub id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: BookingStatus,
    pub booker: BookerOut,
    pub item: BookedItemOut,
}

impl BookingOut {
    pub(crate) fn new(booking: Booking, item_name: String, booker_name: String) -> Self {
        BookingOut {
            id: booking.id,
            start: booking.start_date,
            end: booking.end_date,
            status: booking.status,
            booker: BookerOut {
                id: booking.booker_id,
                name: booker_name,
            },
            item: BookedItemOut {
                id: booking.item_id,
                name: item_name,
            },
        }
    }
}
