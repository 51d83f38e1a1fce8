use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpServer};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat};
use serde_json::Value;

use heartbeat::api;
use heartbeat::core::{QueryExecutor, Row, RowSet};
use heartbeat::error::DatabaseError;

fn now_row(ts: &str) -> Row {
    let mut row = Row::new();
    row.insert("now".to_string(), Value::String(ts.to_string()));
    row
}

/// Database whose clock is stuck at one instant.
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(ts: &str) -> Self {
        Self(ts.to_string())
    }
}

#[async_trait]
impl QueryExecutor for FixedClock {
    async fn execute(&self, _query: &str) -> Result<RowSet, DatabaseError> {
        Ok(vec![now_row(&self.0)])
    }
}

/// Database whose clock moves forward one second per query.
pub struct TickingClock {
    next: AtomicI64,
}

impl TickingClock {
    pub fn starting_at(unix_secs: i64) -> Self {
        Self { next: AtomicI64::new(unix_secs) }
    }
}

#[async_trait]
impl QueryExecutor for TickingClock {
    async fn execute(&self, _query: &str) -> Result<RowSet, DatabaseError> {
        let secs = self.next.fetch_add(1, Ordering::SeqCst);
        let ts = DateTime::from_timestamp(secs, 0).ok_or(DatabaseError::NoRows)?;
        Ok(vec![now_row(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))])
    }
}

/// Database that cannot be reached.
pub struct Unreachable;

#[async_trait]
impl QueryExecutor for Unreachable {
    async fn execute(&self, _query: &str) -> Result<RowSet, DatabaseError> {
        Err(DatabaseError::Query(sqlx::Error::PoolTimedOut))
    }
}

pub fn executor_data<E: QueryExecutor + 'static>(executor: E) -> web::Data<dyn QueryExecutor> {
    let executor: Arc<dyn QueryExecutor> = Arc::new(executor);
    web::Data::from(executor)
}

/// Serve the API on an ephemeral loopback port. Returns the base URL.
pub fn spawn_server(executor: web::Data<dyn QueryExecutor>) -> std::io::Result<(String, ServerHandle)> {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(executor.clone())
            .wrap(api::cors())
            .configure(api::configure_routes)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_rt::spawn(server);

    Ok((format!("http://{}/", addr), handle))
}
