use actix_web::{web, HttpResponse};

use crate::core::QueryExecutor;
use crate::error::DatabaseError;

pub async fn health(db: web::Data<dyn QueryExecutor>) -> Result<HttpResponse, DatabaseError> {
    let status = crate::core::health::check(db.get_ref()).await.map_err(|e| {
        log::error!("Health check failed: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(status))
}
