use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Queryable, Selectable, Serialize, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Booking {
    pub id: i32,
    pub hotel_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub total_price: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::db::schema::bookings)]
pub struct NewBooking {
    pub hotel_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub total_price: f64,
}

impl NewBooking {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.guests < 1 {
            return Err(AppError::Validation(
                "guests must be at least 1".to_string(),
            ));
        }
        if self.check_out <= self.check_in {
            return Err(AppError::Validation(
                "check_out must be after check_in".to_string(),
            ));
        }
        if self.customer_name.trim().is_empty() {
            return Err(AppError::Validation(
                "customer_name must not be empty".to_string(),
            ));
        }
        if self.customer_email.trim().is_empty() {
            return Err(AppError::Validation(
                "customer_email must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
