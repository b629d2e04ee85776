//! Built-in sample event log.

use chrono::DateTime;

use crate::report::{HealthStatus, StatusEvent};

/// Sample status log: seven Service1 transitions over July 2023 at +03:00.
pub fn sample_events() -> Vec<StatusEvent> {
    [
        ("2023-07-01T05:50:34+03:00", HealthStatus::Healthy),
        ("2023-07-02T05:50:34+03:00", HealthStatus::Unhealthy),
        ("2023-07-09T05:50:34+03:00", HealthStatus::Healthy),
        ("2023-07-10T03:50:34+03:00", HealthStatus::Degraded),
        ("2023-07-10T03:55:04+03:00", HealthStatus::Healthy),
        ("2023-07-11T03:55:04+03:00", HealthStatus::Unhealthy),
        ("2023-07-11T04:15:04+03:00", HealthStatus::Healthy),
    ]
    .into_iter()
    .map(|(ts, status)| {
        let timestamp = DateTime::parse_from_rfc3339(ts).expect("sample timestamp");
        StatusEvent::new("Service1", timestamp, status)
    })
    .collect()
}
