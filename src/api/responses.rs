//! API response structures

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::{JobSnapshot, JobState};

/// Current job state as seen by the polling page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateResponse {
    pub state: JobState,
    pub remaining_seconds: u64,
}

impl From<JobSnapshot> for StateResponse {
    fn from(snapshot: JobSnapshot) -> Self {
        Self {
            state: snapshot.state,
            remaining_seconds: snapshot.remaining_seconds(),
        }
    }
}

/// Acknowledgement for control endpoints
#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub ok: bool,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok(uptime: String, port: u16, host: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
            port,
            host,
        }
    }
}
