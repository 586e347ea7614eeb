use std::sync::Arc;

use diesel::prelude::*;
use log::info;

use super::{establish_connection, hotel, schema::hotels};
use crate::{config::Config, error::AppError, models::hotel::NewHotel};

pub fn populate(config: &Arc<Config>) -> Result<(), AppError> {
    let conn = &mut establish_connection(config)?;

    let existing: i64 = hotels::table.count().get_result(conn)?;
    if existing > 0 {
        info!("Catalog already holds {existing} hotels, skipping sample data");
        return Ok(());
    }

    for new_hotel in sample_hotels() {
        hotel::insert(config, &new_hotel)?;
    }

    info!("Populated catalog with sample hotels");
    Ok(())
}

fn sample_hotels() -> Vec<NewHotel> {
    vec![
        NewHotel {
            name: "Amigo Beach Resort".to_string(),
            location: "Cancun, Mexico".to_string(),
            description:
                "Beautiful beachfront resort with all-inclusive packages and friendly service."
                    .to_string(),
            price_per_night: 199.99,
            image_url: Some(
                "https://images.unsplash.com/photo-1566073771259-6a8506099945?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80"
                    .to_string(),
            ),
        },
        NewHotel {
            name: "Amigo City Hotel".to_string(),
            location: "Mexico City, Mexico".to_string(),
            description: "Modern hotel in the heart of the city with authentic Mexican hospitality."
                .to_string(),
            price_per_night: 129.99,
            image_url: Some(
                "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80"
                    .to_string(),
            ),
        },
        NewHotel {
            name: "Amigo Mountain Lodge".to_string(),
            location: "Monterrey, Mexico".to_string(),
            description: "Cozy lodge nestled in the mountains with stunning views and warm service."
                .to_string(),
            price_per_night: 149.99,
            image_url: Some(
                "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80"
                    .to_string(),
            ),
        },
    ]
}
