use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Body returned with every 500 from the health route.
pub const SERVER_ERROR_BODY: &str = "Server Error";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("query returned no rows")]
    NoRows,

    #[error("column '{0}' missing from result")]
    MissingColumn(String),
}

impl ResponseError for DatabaseError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(SERVER_ERROR_BODY)
    }
}

#[derive(Error, Debug)]
pub enum NetworkOrParseError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}
