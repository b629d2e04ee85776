//! Rendering of report rows for the console and for JSON consumers.

use std::fmt::Write as _;
use std::str::FromStr;

use chrono::Duration;

use super::aggregate::DayReport;
use super::ReportError;

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ReportError::Config(format!("unknown output format: {}", other))),
        }
    }
}

/// Render one row as `{service} {date} {uptime} {up%} {unhealthy%} {degraded%}`,
/// or `{service} {date} Unavailable` for days without data.
pub fn format_row(service: &str, report: &DayReport) -> String {
    match report {
        DayReport::Unavailable { date } => format!("{} {} Unavailable", service, date),
        DayReport::Day {
            date,
            uptime,
            uptime_pct,
            unhealthy_pct,
            degraded_pct,
        } => format!(
            "{} {} {} {:.2}% {:.2}% {:.2}%",
            service,
            date,
            format_uptime(*uptime),
            uptime_pct * 100.0,
            unhealthy_pct * 100.0,
            degraded_pct * 100.0
        ),
    }
}

/// Render the full report as console text, one row per day plus a header.
pub fn render_text(service: &str, reports: &[DayReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Report for past {} days for {}", reports.len(), service);
    for report in reports {
        let _ = writeln!(out, "{}", format_row(service, report));
    }
    out
}

/// Render the full report as pretty-printed JSON.
pub fn render_json(reports: &[DayReport]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Uptime as `H:MM:SS` with unpadded total hours.
fn format_uptime(d: Duration) -> String {
    let secs = d.num_seconds();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
