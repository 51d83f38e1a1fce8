use serde_json::Value;

use super::db::QueryExecutor;
use crate::error::DatabaseError;
use crate::models::response::HealthStatus;

pub const CURRENT_TIME_QUERY: &str = "SELECT NOW()";
const TIME_COLUMN: &str = "now";

/// Read the database clock and pair it with the static status message.
pub async fn check(db: &dyn QueryExecutor) -> Result<HealthStatus, DatabaseError> {
    let rows = db.execute(CURRENT_TIME_QUERY).await?;
    let row = rows.first().ok_or(DatabaseError::NoRows)?;
    let db_time = match row.get(TIME_COLUMN) {
        Some(Value::String(ts)) => ts.clone(),
        Some(Value::Null) | None => return Err(DatabaseError::MissingColumn(TIME_COLUMN.to_string())),
        Some(other) => other.to_string(),
    };

    Ok(HealthStatus::running(db_time))
}
