use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Queryable, Selectable, Serialize, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::hotels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: String,
    pub price_per_night: f64,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::db::schema::hotels)]
pub struct NewHotel {
    pub name: String,
    pub location: String,
    pub description: String,
    pub price_per_night: f64,
    pub image_url: Option<String>,
}

impl NewHotel {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name must not be empty".to_string()));
        }
        if self.location.trim().is_empty() {
            return Err(AppError::Validation(
                "location must not be empty".to_string(),
            ));
        }
        if self.price_per_night <= 0.0 {
            return Err(AppError::Validation(
                "price_per_night must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
