use std::sync::Arc;

use amigo::config::{self, Config};
use amigo::db;
use amigo::logger::setup_logger;
use amigo::web::{self, AppState};

use anyhow::Result;
use log::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    setup_logger()?;

    let config: Arc<Config> = Arc::new(config::read_config());

    if config.seed_sample_data {
        db::seed::populate(&config)?;
    }

    let (shutdown_tx, shutdown_rx) = tokio::sync::broadcast::channel::<()>(1);

    // Launch HTTP server
    let state = AppState {
        config: config.clone(),
    };
    let server_handle =
        tokio::task::spawn(async move { web::start_http_server(state, shutdown_rx).await });

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    let _ = shutdown_tx.send(());

    if let Err(err) = tokio::try_join!(server_handle) {
        error!("Error: {:?}", err)
    }

    Ok(())
}
