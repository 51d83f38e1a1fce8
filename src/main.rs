use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};

use heartbeat::api;
use heartbeat::config::Config;
use heartbeat::core::{Database, QueryExecutor};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();

    log::info!("💓 Starting Heartbeat health check service");
    log::info!("📍 Listening on {}:{}", config.host, config.port);

    let database = Database::connect_lazy(&config.database);
    let executor: Arc<dyn QueryExecutor> = Arc::new(database.clone());
    let executor = web::Data::from(executor);

    let bind_addr = (config.host.clone(), config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(executor.clone())
            .wrap(api::cors())
            .wrap(middleware::Logger::default())
            .configure(api::configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    database.close().await;
    Ok(())
}
