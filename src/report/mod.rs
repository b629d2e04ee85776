//! Per-day health report pipeline.
//!
//! Turns a sparse, time-ordered log of status transitions into one report
//! row per calendar day of a trailing window: window derivation, then
//! bucketizing events into days, then per-day aggregation.

mod aggregate;
mod bucket;
mod format;
mod model;
mod window;

pub use aggregate::*;
pub use bucket::*;
pub use format::*;
pub use model::*;
pub use window::*;

use thiserror::Error;

use crate::clock::Clock;

/// Report pipeline error types.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("report window must cover at least one day, got {0}")]
    InvalidWindow(usize),
    #[error("event at index {index} is out of order")]
    UnorderedEvents { index: usize },
    #[error("day {date} has a non-positive length")]
    InvalidDayBounds { date: chrono::NaiveDate },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}

/// Run the full pipeline over a trailing window of `days` days.
///
/// `events` must be filtered to one service and sorted ascending. The clock
/// is read exactly once, so a run is a pure function of `(events, now, days)`.
pub fn run_report(
    events: &[StatusEvent],
    clock: &dyn Clock,
    days: usize,
) -> Result<Vec<DayReport>, ReportError> {
    let window = ReportWindow::from_clock(clock, days)?;
    let buckets = bucketize(events, &window)?;
    let reports = buckets.iter().map(aggregate).collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        "Aggregated {} days ending {}",
        reports.len(),
        window.end().date_naive()
    );

    Ok(reports)
}
