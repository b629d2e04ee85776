//! Aggregator: per-day duration totals and percentages.

use chrono::{Duration, NaiveDate};
use serde::{Serialize, Serializer};

use super::bucket::DayBucket;
use super::model::HealthStatus;
use super::ReportError;

/// Aggregation result for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayReport {
    /// No monitoring data existed on this day.
    Unavailable { date: NaiveDate },
    /// Breakdown of the day into uptime, unhealthy, and degraded time.
    ///
    /// Percentages are fractions of the day's total seconds. On a fully
    /// covered day they sum to 1.0; on the partial first day of monitoring
    /// the span before the first event is left unattributed.
    Day {
        date: NaiveDate,
        #[serde(rename = "uptime_seconds", serialize_with = "duration_seconds")]
        uptime: Duration,
        uptime_pct: f64,
        unhealthy_pct: f64,
        degraded_pct: f64,
    },
}

impl DayReport {
    pub fn date(&self) -> NaiveDate {
        match self {
            DayReport::Unavailable { date } | DayReport::Day { date, .. } => *date,
        }
    }
}

fn duration_seconds<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(d.num_seconds())
}

/// Aggregate one bucket into its report row.
///
/// Entry `i` contributes `[max(entry.timestamp, day_start), next entry or
/// day_end)` to its category's running total. An empty bucket means
/// monitoring had not started on that day.
pub fn aggregate(bucket: &DayBucket<'_>) -> Result<DayReport, ReportError> {
    let day_seconds = (bucket.end - bucket.start).num_seconds();
    if day_seconds <= 0 {
        return Err(ReportError::InvalidDayBounds { date: bucket.date });
    }

    if bucket.entries.is_empty() {
        return Ok(DayReport::Unavailable { date: bucket.date });
    }

    let (uptime, unhealthy, degraded) = bucket.entries.iter().enumerate().fold(
        (Duration::zero(), Duration::zero(), Duration::zero()),
        |(up, un, deg), (i, entry)| {
            let from = entry.timestamp.max(bucket.start);
            let to = match bucket.entries.get(i + 1) {
                Some(next) => next.timestamp,
                None => bucket.end,
            };
            let span = to - from;
            match entry.status {
                HealthStatus::Unhealthy => (up, un + span, deg),
                HealthStatus::Degraded => (up, un, deg + span),
                // Every other status counts as uptime.
                _ => (up + span, un, deg),
            }
        },
    );

    let total = day_seconds as f64;
    Ok(DayReport::Day {
        date: bucket.date,
        uptime,
        uptime_pct: uptime.num_seconds() as f64 / total,
        unhealthy_pct: unhealthy.num_seconds() as f64 / total,
        degraded_pct: degraded.num_seconds() as f64 / total,
    })
}
