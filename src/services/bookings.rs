use std::sync::Arc;

use crate::{
    config::Config,
    db,
    error::AppError,
    models::booking::{Booking, NewBooking},
};

pub fn create(config: &Arc<Config>, new_booking: NewBooking) -> Result<Booking, AppError> {
    new_booking.validate()?;

    // The referenced hotel must exist before the booking is stored
    db::hotel::get(config, new_booking.hotel_id)?;

    db::booking::insert(config, &new_booking)
}

pub fn get(config: &Arc<Config>, booking_id: i32) -> Result<Booking, AppError> {
    db::booking::get(config, booking_id)
}

pub fn list_for_hotel(config: &Arc<Config>, hotel_id: i32) -> Result<Vec<Booking>, AppError> {
    db::hotel::get(config, hotel_id)?;
    db::booking::get_for_hotel(config, hotel_id)
}
