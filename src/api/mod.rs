pub mod booking_management;
pub mod item_management;
pub mod request_management;
pub mod user_management;

use chrono::{Local, NaiveDateTime};

use crate::error::ServiceError;

/// `from`/`size` window shared by the listing endpoints.
#[derive(FromForm, Debug, Clone, Copy)]
pub struct Page {
    #[field(default = 0)]
    pub from: i64,
    #[field(default = 10)]
    pub size: i64,
}

impl Default for Page {
    fn default() -> Self {
        Page { from: 0, size: 10 }
    }
}

impl Page {
    pub fn checked(self) -> Result<Self, ServiceError> {
        if self.from < 0 {
            return Err(ServiceError::BadRequest(format!(
                "Parameter 'from' must not be negative, got {}",
                self.from
            )));
        }
        if self.size <= 0 {
            return Err(ServiceError::BadRequest(format!(
                "Parameter 'size' must be positive, got {}",
                self.size
            )));
        }
        Ok(self)
    }
}

pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub(crate) fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
