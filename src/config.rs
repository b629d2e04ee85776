//! Configuration module for upreport.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;

use chrono::{DateTime, FixedOffset};

use crate::report::{OutputFormat, ReportError};

/// Report configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Number of trailing days to report (default: 14)
    pub days: usize,
    /// Service to report on (default: "Service1")
    pub service: String,
    /// Output format (default: text)
    pub format: OutputFormat,
    /// Fixed "now" instant; when unset the system clock is used
    pub now: Option<DateTime<FixedOffset>>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            days: 14,
            service: "Service1".to_string(),
            format: OutputFormat::Text,
            now: None,
        }
    }
}

impl ReportConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `UPREPORT_DAYS`: window length in days, at least 1 (default: 14)
    /// - `UPREPORT_SERVICE`: service name (default: "Service1")
    /// - `UPREPORT_FORMAT`: `text` or `json` (default: text)
    /// - `UPREPORT_NOW`: RFC 3339 instant to report against (default: system clock)
    pub fn load() -> Result<Self, ReportError> {
        let mut cfg = Self::default();

        if let Ok(days_str) = env::var("UPREPORT_DAYS") {
            cfg.days = days_str
                .parse()
                .map_err(|_| ReportError::Config(format!("invalid UPREPORT_DAYS: {}", days_str)))?;
            if cfg.days == 0 {
                return Err(ReportError::Config(
                    "UPREPORT_DAYS must be at least 1".to_string(),
                ));
            }
        }

        if let Ok(service) = env::var("UPREPORT_SERVICE") {
            cfg.service = service;
        }

        if let Ok(format_str) = env::var("UPREPORT_FORMAT") {
            cfg.format = format_str.parse()?;
        }

        if let Ok(now_str) = env::var("UPREPORT_NOW") {
            cfg.now = Some(DateTime::parse_from_rfc3339(&now_str).map_err(|e| {
                ReportError::Config(format!("invalid UPREPORT_NOW: {}", e))
            })?);
        }

        Ok(cfg)
    }
}
