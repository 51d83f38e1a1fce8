use serde::{Deserialize, Serialize};

pub const RUNNING_MESSAGE: &str = "Server is running!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
    pub db_time: String,
}

impl HealthStatus {
    pub fn running(db_time: impl Into<String>) -> Self {
        Self {
            message: RUNNING_MESSAGE.to_string(),
            db_time: db_time.into(),
        }
    }
}
