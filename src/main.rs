use crate::config::Config;
use crate::services::SnapshotDashboardService;
use crate::storage::on_disk::OnDiskStorage;
use actix_rt::signal::unix;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dashboard_service::{Aggregator, SharedDashboardService};
use futures_lite::FutureExt;
use std::sync::Arc;
use tracing::{error, info};

mod config;
mod http;
mod services;
mod storage;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let mut terminate = unix::signal(unix::SignalKind::terminate())?;
    let mut interrupt = unix::signal(unix::SignalKind::interrupt())?;

    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|error| {
        error!(?error, "Invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, error)
    })?;

    info!(version = VERSION, "Starting application...");

    let storage = Arc::new(OnDiskStorage::create(config.data_directory.clone()));
    let dashboard_service: SharedDashboardService =
        Arc::new(SnapshotDashboardService::new(Arc::clone(&storage)));
    let aggregator = Arc::new(Aggregator::new(Arc::clone(&dashboard_service)));
    let match_mode = config.category_match_mode;

    let server = HttpServer::new({
        move || {
            App::new()
                .wrap(Logger::default())
                .app_data(Data::new(Arc::clone(&storage)))
                .app_data(Data::new(Arc::clone(&dashboard_service)))
                .app_data(Data::new(Arc::clone(&aggregator)))
                .app_data(Data::new(match_mode))
                .configure(http::configure)
        }
    })
    .shutdown_timeout(config.shutdown_timeout)
    .bind(&config.bind_address)?
    .run();

    let server_handle = server.handle();

    actix_rt::spawn({
        async move {
            if let Err(error) = server.await {
                error!(?error, "Error on http server");
            }
        }
    });

    info!(
        bind_address = %config.bind_address,
        data_directory = %config.data_directory,
        match_mode = ?match_mode,
        "Application started"
    );

    interrupt.recv().or(terminate.recv()).await;

    info!("Received shutdown signal. Shutting down gracefully...");

    server_handle.stop(true).await;

    Ok(())
}
