use std::sync::Arc;

use diesel::prelude::*;
use log::info;

use super::{establish_connection, schema::bookings};
use crate::{
    config::Config,
    error::AppError,
    models::booking::{Booking, NewBooking},
};

pub fn insert(config: &Arc<Config>, new_booking: &NewBooking) -> Result<Booking, AppError> {
    let conn = &mut establish_connection(config)?;

    let booking = diesel::insert_into(bookings::table)
        .values(new_booking)
        .returning(Booking::as_returning())
        .get_result(conn)?;

    info!(
        "Inserted booking {} for hotel {}",
        booking.id, booking.hotel_id
    );
    Ok(booking)
}

pub fn get(config: &Arc<Config>, target_id: i32) -> Result<Booking, AppError> {
    let conn = &mut establish_connection(config)?;

    bookings::table
        .filter(bookings::id.eq(target_id))
        .select(Booking::as_select())
        .first(conn)
        .optional()?
        .ok_or(AppError::NotFound("booking"))
}

pub fn get_for_hotel(config: &Arc<Config>, target_hotel_id: i32) -> Result<Vec<Booking>, AppError> {
    let conn = &mut establish_connection(config)?;

    let hotel_bookings = bookings::table
        .filter(bookings::hotel_id.eq(target_hotel_id))
        .order(bookings::id.asc())
        .select(Booking::as_select())
        .load(conn)?;

    Ok(hotel_bookings)
}
