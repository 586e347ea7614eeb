use std::sync::Arc;

use diesel::prelude::*;
use log::info;

use super::{establish_connection, schema::hotels};
use crate::{
    config::Config,
    error::AppError,
    models::hotel::{Hotel, NewHotel},
};

pub fn insert(config: &Arc<Config>, new_hotel: &NewHotel) -> Result<Hotel, AppError> {
    let conn = &mut establish_connection(config)?;

    let hotel = diesel::insert_into(hotels::table)
        .values(new_hotel)
        .returning(Hotel::as_returning())
        .get_result(conn)?;

    info!("Inserted hotel {} into hotels table", hotel.id);
    Ok(hotel)
}

pub fn get(config: &Arc<Config>, target_id: i32) -> Result<Hotel, AppError> {
    let conn = &mut establish_connection(config)?;

    hotels::table
        .filter(hotels::id.eq(target_id))
        .select(Hotel::as_select())
        .first(conn)
        .optional()?
        .ok_or(AppError::NotFound("hotel"))
}

pub fn get_all(config: &Arc<Config>) -> Result<Vec<Hotel>, AppError> {
    let conn = &mut establish_connection(config)?;

    let all_hotels = hotels::table
        .order(hotels::id.asc())
        .select(Hotel::as_select())
        .load(conn)?;

    Ok(all_hotels)
}

// Bookings referencing the hotel go with it via the FK cascade.
pub fn delete(config: &Arc<Config>, target_id: i32) -> Result<(), AppError> {
    let conn = &mut establish_connection(config)?;

    let deleted = diesel::delete(hotels::table.filter(hotels::id.eq(target_id))).execute(conn)?;
    if deleted == 0 {
        return Err(AppError::NotFound("hotel"));
    }

    info!("Deleted hotel {} and its bookings", target_id);
    Ok(())
}
