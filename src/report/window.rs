//! Report window derivation.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate};

use super::ReportError;
use crate::clock::Clock;

/// A trailing window of whole calendar days ending at today's midnight.
///
/// "Today" is always a partial day, so it is never reported: with the clock
/// reading anywhere inside 2023-07-15 and a 14 day window, the reported days
/// are 2023-07-01 through 2023-07-14. Day boundaries are midnights in the
/// clock's UTC offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportWindow {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    days: usize,
}

impl ReportWindow {
    /// Derive the window from one clock reading.
    pub fn from_clock(clock: &dyn Clock, days: usize) -> Result<Self, ReportError> {
        Self::ending_at(clock.now(), days)
    }

    /// Derive the window ending at `now`'s midnight, covering `days` whole days.
    pub fn ending_at(now: DateTime<FixedOffset>, days: usize) -> Result<Self, ReportError> {
        if days == 0 {
            return Err(ReportError::InvalidWindow(days));
        }

        let offset = *now.offset();
        let end = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| midnight.and_local_timezone(offset).single())
            .ok_or(ReportError::InvalidWindow(days))?;
        let start = end - Duration::days(days as i64);

        Ok(Self { start, end, days })
    }

    /// Number of reported days.
    pub fn days(&self) -> usize {
        self.days
    }

    /// Inclusive start of the window (midnight of the oldest reported day).
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    /// Exclusive end of the window; also the open end of the last event's
    /// effective interval.
    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Midnight boundaries `[day_start, day_end)` of day `index`.
    pub fn day_bounds(&self, index: usize) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
        let day_start = self.start + Duration::days(index as i64);
        (day_start, day_start + Duration::days(1))
    }

    /// Calendar date of day `index`.
    pub fn day_date(&self, index: usize) -> NaiveDate {
        self.start.date_naive() + Duration::days(index as i64)
    }
}
