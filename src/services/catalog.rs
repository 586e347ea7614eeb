use std::sync::Arc;

use crate::{
    config::Config,
    db,
    error::AppError,
    models::hotel::{Hotel, NewHotel},
};

pub fn list(config: &Arc<Config>) -> Result<Vec<Hotel>, AppError> {
    db::hotel::get_all(config)
}

pub fn search(config: &Arc<Config>, query: &str) -> Result<Vec<Hotel>, AppError> {
    let hotels = db::hotel::get_all(config)?;
    if query.is_empty() {
        return Ok(hotels);
    }
    Ok(filter_by_query(hotels, query))
}

pub fn get_by_id(config: &Arc<Config>, hotel_id: i32) -> Result<Hotel, AppError> {
    db::hotel::get(config, hotel_id)
}

pub fn create(config: &Arc<Config>, new_hotel: NewHotel) -> Result<Hotel, AppError> {
    new_hotel.validate()?;
    db::hotel::insert(config, &new_hotel)
}

pub fn remove(config: &Arc<Config>, hotel_id: i32) -> Result<(), AppError> {
    db::hotel::delete(config, hotel_id)
}

/// A hotel matches when the query occurs case-insensitively in its name,
/// description or location.
pub fn matches_query(hotel: &Hotel, query: &str) -> bool {
    let needle = query.to_lowercase();
    hotel.name.to_lowercase().contains(&needle)
        || hotel.description.to_lowercase().contains(&needle)
        || hotel.location.to_lowercase().contains(&needle)
}

pub fn filter_by_query(hotels: Vec<Hotel>, query: &str) -> Vec<Hotel> {
    hotels
        .into_iter()
        .filter(|hotel| matches_query(hotel, query))
        .collect()
}
