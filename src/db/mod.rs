pub mod booking;
pub mod hotel;
pub mod schema;
pub mod seed;

use std::sync::Arc;

use diesel::{Connection, ConnectionError, PgConnection};

use crate::config::Config;

pub fn establish_connection(config: &Arc<Config>) -> Result<PgConnection, ConnectionError> {
    PgConnection::establish(&config.db_path)
}
