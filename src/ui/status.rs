use tokio_util::sync::CancellationToken;

use super::View;
use crate::client::StatusSource;
use crate::models::response::HealthStatus;

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Error connecting to server";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusState {
    Loading,
    Success(HealthStatus),
    Failure,
}

/// Shows the server status. Starts in `Loading` and settles exactly once.
#[derive(Debug)]
pub struct StatusView {
    state: StatusState,
}

impl Default for StatusView {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusView {
    pub fn new() -> Self {
        Self {
            state: StatusState::Loading,
        }
    }

    pub fn state(&self) -> &StatusState {
        &self.state
    }

    pub fn is_settled(&self) -> bool {
        self.state != StatusState::Loading
    }

    /// Fetch once and settle.
    ///
    /// `cancel` is tied to the view's lifetime: if it fires first, the request
    /// is dropped and the view stays `Loading`. Mounting a settled view does
    /// nothing.
    pub async fn mount(&mut self, source: &dyn StatusSource, cancel: &CancellationToken) -> &StatusState {
        if self.is_settled() {
            return &self.state;
        }

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("Status view unmounted before the request settled");
                return &self.state;
            }
            result = source.fetch_status() => result,
        };

        self.state = match result {
            Ok(status) => StatusState::Success(status),
            Err(e) => {
                log::error!("Error fetching data: {}", e);
                StatusState::Failure
            }
        };
        &self.state
    }
}

impl View for StatusView {
    fn render(&self) -> String {
        match &self.state {
            StatusState::Loading => LOADING_TEXT.to_string(),
            StatusState::Success(status) => format!("{} DB Time: {}", status.message, status.db_time),
            StatusState::Failure => ERROR_TEXT.to_string(),
        }
    }
}
