use std::io;
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;

use crate::config::Config;
use crate::store::{PgStore, QuestionStore};

mod assessment;
mod config;
mod error;
mod service;
mod store;
mod structs;
mod utils;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::load().map_err(|e| {
        log::error!("failed to load configuration: {e}");
        io::Error::other(e)
    })?;

    // Connect and make sure the tables exist
    let store = PgStore::connect(&config.database).await.map_err(io::Error::other)?;
    store.init_schema().await.map_err(io::Error::other)?;
    let store: Arc<dyn QuestionStore> = Arc::new(store);
    let store = web::Data::from(store);

    let cors_config = config.cors.clone();
    let json_limit = config.server.json_limit;
    let server = HttpServer::new(move || {
        App::new()
            .wrap(service::cors(&cors_config))
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .configure(|cfg| service::configure(cfg, json_limit))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run();
    log::info!("HTTP server listening on {}:{}", config.server.host, config.server.port);
    server.await
}
