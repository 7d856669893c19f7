mod config;
mod error;
mod inference;
mod knowledge;
mod media;
mod routes;
mod storage;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use config::AppConfig;
use inference::client::InferenceClient;
use media::MediaStore;
use routes::configure_routes;
use storage::{MemoryScanStore, ScanStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    log::info!("Inference endpoint: {}", config.serving_url());

    let client = InferenceClient::new(config.serving_url(), config.request_timeout)
        .map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to build inference client: {}", e),
            )
        })?;

    let media_store = MediaStore::new(config.media_root.clone()).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to prepare media root: {}", e),
        )
    })?;

    let store: Arc<dyn ScanStore> = Arc::new(MemoryScanStore::new());
    let store_data = web::Data::from(store);

    let bind_address = format!("0.0.0.0:{}", config.port);
    log::info!("Starting server on {}", bind_address);

    let media_root = config.media_root.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(client.clone()))
            .app_data(web::Data::new(media_store.clone()))
            .app_data(store_data.clone())
            .configure(|cfg| configure_routes(cfg, media_root.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
