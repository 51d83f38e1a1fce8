use actix_cors::Cors;

pub mod handlers;
pub mod routes;

pub use routes::configure_routes;

/// Permissive CORS: no origin allow-list.
pub fn cors() -> Cors {
    Cors::permissive()
}
