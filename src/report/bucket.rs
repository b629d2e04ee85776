//! Bucketizer: assigns events to the calendar days their effective interval
//! overlaps.

use chrono::{DateTime, FixedOffset, NaiveDate};

use super::model::StatusEvent;
use super::window::ReportWindow;
use super::ReportError;

/// One calendar day of the window and the events in force during it.
#[derive(Debug)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub entries: Vec<&'a StatusEvent>,
}

/// Partition `events` into one bucket per window day.
///
/// `events` must already be filtered to a single service and sorted by
/// ascending timestamp; out-of-order input is rejected. An event lands in
/// every day its effective interval touches, so a day with no transitions of
/// its own still carries the status that was in force when it began. Only
/// days that end before the first event stay empty.
pub fn bucketize<'a>(
    events: &'a [StatusEvent],
    window: &ReportWindow,
) -> Result<Vec<DayBucket<'a>>, ReportError> {
    for (i, pair) in events.windows(2).enumerate() {
        if pair[1].timestamp < pair[0].timestamp {
            return Err(ReportError::UnorderedEvents { index: i + 1 });
        }
    }

    let days = window.days();
    let mut buckets: Vec<DayBucket<'a>> = (0..days)
        .map(|i| {
            let (start, end) = window.day_bounds(i);
            DayBucket {
                date: window.day_date(i),
                start,
                end,
                entries: Vec::new(),
            }
        })
        .collect();

    let window_start_date = window.start().date_naive();
    for (i, event) in events.iter().enumerate() {
        let effective_end = match events.get(i + 1) {
            Some(next) => next.timestamp,
            None => window.end(),
        };

        // Day indices by calendar-date truncation: an interval ending exactly
        // at a midnight adds only a zero-length tail to that day, which the
        // aggregator ignores.
        let start_day = (event.timestamp.date_naive() - window_start_date).num_days();
        let end_day = (effective_end.date_naive() - window_start_date).num_days();
        if end_day < 0 || start_day >= days as i64 {
            continue;
        }

        let lo = start_day.max(0) as usize;
        let hi = end_day.min(days as i64 - 1) as usize;
        for bucket in &mut buckets[lo..=hi] {
            bucket.entries.push(event);
        }
    }

    tracing::debug!("Bucketized {} events into {} day buckets", events.len(), days);

    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::model::HealthStatus;
    use chrono::{FixedOffset, TimeZone};

    fn tz() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    fn window_14d() -> ReportWindow {
        // Days 2023-07-01 through 2023-07-14
        let now = tz().with_ymd_and_hms(2023, 7, 15, 9, 0, 0).unwrap();
        ReportWindow::ending_at(now, 14).unwrap()
    }

    fn event(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, status: HealthStatus) -> StatusEvent {
        StatusEvent::new(
            "Service1",
            tz().with_ymd_and_hms(y, mo, d, h, mi, s).unwrap(),
            status,
        )
    }

    #[test]
    fn test_empty_input_yields_empty_buckets() {
        let buckets = bucketize(&[], &window_14d()).unwrap();
        assert_eq!(buckets.len(), 14);
        assert!(buckets.iter().all(|b| b.entries.is_empty()));
    }

    #[test]
    fn test_buckets_cover_window_in_order() {
        let window = window_14d();
        let buckets = bucketize(&[], &window).unwrap();

        assert_eq!(buckets[0].start, window.start());
        assert_eq!(buckets[13].end, window.end());
        for i in 1..buckets.len() {
            assert_eq!(buckets[i].start, buckets[i - 1].end);
            assert!(buckets[i].date > buckets[i - 1].date);
        }
    }

    #[test]
    fn test_last_event_carries_to_window_end() {
        let events = vec![event(2023, 7, 3, 12, 0, 0, HealthStatus::Healthy)];
        let buckets = bucketize(&events, &window_14d()).unwrap();

        assert!(buckets[0].entries.is_empty());
        assert!(buckets[1].entries.is_empty());
        for bucket in &buckets[2..] {
            assert_eq!(bucket.entries.len(), 1);
        }
    }

    #[test]
    fn test_event_before_window_carries_in() {
        let events = vec![event(2023, 6, 20, 8, 0, 0, HealthStatus::Unhealthy)];
        let buckets = bucketize(&events, &window_14d()).unwrap();
        assert!(buckets.iter().all(|b| b.entries.len() == 1));
    }

    #[test]
    fn test_event_span_ends_before_window() {
        // Both events predate the window; the second carries forward, the
        // first does not.
        let events = vec![
            event(2023, 6, 10, 8, 0, 0, HealthStatus::Unhealthy),
            event(2023, 6, 20, 8, 0, 0, HealthStatus::Healthy),
        ];
        let buckets = bucketize(&events, &window_14d()).unwrap();
        for bucket in &buckets {
            assert_eq!(bucket.entries.len(), 1);
            assert_eq!(bucket.entries[0].status, HealthStatus::Healthy);
        }
    }

    #[test]
    fn test_event_after_window_contributes_nothing() {
        let events = vec![event(2023, 7, 15, 1, 0, 0, HealthStatus::Unhealthy)];
        let buckets = bucketize(&events, &window_14d()).unwrap();
        assert!(buckets.iter().all(|b| b.entries.is_empty()));
    }

    #[test]
    fn test_midnight_event_owns_its_day() {
        let events = vec![
            event(2023, 7, 2, 12, 0, 0, HealthStatus::Healthy),
            event(2023, 7, 4, 0, 0, 0, HealthStatus::Unhealthy),
        ];
        let buckets = bucketize(&events, &window_14d()).unwrap();

        // 07-03 only sees the healthy event; the unhealthy one starts at the
        // 07-04 midnight and belongs to 07-04.
        assert_eq!(buckets[2].entries.len(), 1);
        assert_eq!(buckets[2].entries[0].status, HealthStatus::Healthy);
        // 07-04 gets the healthy event's zero-length tail plus the transition.
        assert_eq!(buckets[3].entries.len(), 2);
        assert_eq!(buckets[3].entries[1].status, HealthStatus::Unhealthy);
        // Later days carry only the unhealthy status.
        assert_eq!(buckets[4].entries.len(), 1);
        assert_eq!(buckets[4].entries[0].status, HealthStatus::Unhealthy);
    }

    #[test]
    fn test_unordered_events_rejected() {
        let events = vec![
            event(2023, 7, 5, 10, 0, 0, HealthStatus::Healthy),
            event(2023, 7, 4, 10, 0, 0, HealthStatus::Unhealthy),
        ];
        let err = bucketize(&events, &window_14d()).unwrap_err();
        assert!(matches!(err, ReportError::UnorderedEvents { index: 1 }));
    }
}
