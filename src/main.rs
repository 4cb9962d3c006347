use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use progress_backend::config::AppConfig;
use progress_backend::routes::dashboard::progress_source::{HttpProgressSource, ProgressSource};
use progress_backend::routes::routes;
use progress_backend::store::{MySqlStore, ProgressStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::other(e)
    })?;

    let store = MySqlStore::connect(&config.database_url, config.max_connections)
        .await
        .map_err(|e| {
            error!("Failed to create pool: {}", e);
            std::io::Error::other(e)
        })?;
    let store: Arc<dyn ProgressStore> = Arc::new(store);

    let source = HttpProgressSource::new(config.progress_api_url.clone()).map_err(|e| {
        error!("Failed to build progress client: {}", e);
        std::io::Error::other(e)
    })?;
    let source: Arc<dyn ProgressSource> = Arc::new(source);

    info!("Server running at http://{}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(store.clone()))
            .app_data(web::Data::from(source.clone()))
            .configure(routes::root_configure)
            .configure(routes::demo_progress_configure)
            .configure(routes::dashboard_configure)
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await
}
