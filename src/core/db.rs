//! Postgres connection provider.
//!
//! The pool is built once by the caller and handed to the service; nothing
//! here is global. `PgPool` is safe to share across workers: every
//! [`QueryExecutor::execute`] call checks a connection out and returns it when
//! the query completes.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};
use sqlx::postgres::{PgColumn, PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::{Column, PgPool, Row as _, TypeInfo};

use crate::config::DatabaseConfig;
use crate::error::DatabaseError;

/// One result row: column name to decoded value, in column order.
pub type Row = Map<String, Value>;
pub type RowSet = Vec<Row>;

#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, query: &str) -> Result<RowSet, DatabaseError>;
}

#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Build the pool from the libpq environment without connecting.
    ///
    /// Connections are opened on first use, so an unreachable database shows
    /// up as a failed query rather than a failed startup.
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let options = PgConnectOptions::new();
        log::info!(
            "Postgres pool configured for {}:{} (max {} connections)",
            options.get_host(),
            options.get_port(),
            config.max_connections
        );
        Self::from_options(options, config)
    }

    pub fn from_options(options: PgConnectOptions, config: &DatabaseConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(options);
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Wait for checked-out connections to return, then close them all.
    pub async fn close(&self) {
        log::info!("Closing Postgres pool");
        self.pool.close().await;
    }
}

#[async_trait]
impl QueryExecutor for Database {
    async fn execute(&self, query: &str) -> Result<RowSet, DatabaseError> {
        let rows = sqlx::query(query).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(decode_row).collect())
    }
}

fn decode_row(row: &PgRow) -> Row {
    row.columns()
        .iter()
        .map(|column| (column.name().to_string(), decode_value(row, column)))
        .collect()
}

fn decode_value(row: &PgRow, column: &PgColumn) -> Value {
    let idx = column.ordinal();
    let value = match column.type_info().name() {
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<Utc>>, _>(idx)
            .ok()
            .flatten()
            .map(|ts| Value::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true))),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(idx)
            .ok()
            .flatten()
            .map(|ts| Value::String(ts.format("%Y-%m-%dT%H:%M:%S%.3f").to_string())),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(idx)
            .ok()
            .flatten()
            .map(|d| Value::String(d.to_string())),
        "BOOL" => row.try_get::<Option<bool>, _>(idx).ok().flatten().map(Value::Bool),
        "INT2" => row
            .try_get::<Option<i16>, _>(idx)
            .ok()
            .flatten()
            .map(Value::from),
        "INT4" => row
            .try_get::<Option<i32>, _>(idx)
            .ok()
            .flatten()
            .map(Value::from),
        "INT8" => row
            .try_get::<Option<i64>, _>(idx)
            .ok()
            .flatten()
            .map(Value::from),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(idx)
            .ok()
            .flatten()
            .and_then(|n| Number::from_f64(f64::from(n)))
            .map(Value::Number),
        "FLOAT8" => row
            .try_get::<Option<f64>, _>(idx)
            .ok()
            .flatten()
            .and_then(Number::from_f64)
            .map(Value::Number),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
            row.try_get::<Option<String>, _>(idx).ok().flatten().map(Value::String)
        }
        "JSON" | "JSONB" => row.try_get::<Option<Value>, _>(idx).ok().flatten(),
        other => {
            log::debug!("No decoder for column '{}' of type {}", column.name(), other);
            None
        }
    };
    value.unwrap_or(Value::Null)
}
