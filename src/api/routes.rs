use actix_web::web;

use super::handlers;

/// Matches the usual JSON body limit of Node/Express servers.
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::JsonConfig::default().limit(JSON_BODY_LIMIT))
        .route("/", web::get().to(handlers::health::health));
}
