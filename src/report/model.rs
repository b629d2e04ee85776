//! Report model types.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Health status of a monitored service at a point in time.
///
/// Aggregation only distinguishes `Unhealthy` and `Degraded`; every other
/// status is counted as uptime. That catch-all is deliberate so that status
/// kinds added later count as healthy time instead of silently vanishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// One observed status transition.
///
/// The status is in force from `timestamp` until the next event for the same
/// service, or until the report window end for the last event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub service: String,
    pub timestamp: DateTime<FixedOffset>,
    pub status: HealthStatus,
}

impl StatusEvent {
    pub fn new(service: &str, timestamp: DateTime<FixedOffset>, status: HealthStatus) -> Self {
        Self {
            service: service.to_string(),
            timestamp,
            status,
        }
    }
}
