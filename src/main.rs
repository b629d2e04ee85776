//! upreport - per-day service health report.
//!
//! Prints an uptime breakdown for each day of a trailing window, computed
//! from a sparse log of status-change events.

mod clock;
mod config;
mod report;
mod sample;

use clock::{Clock, FixedClock, SystemClock};
use config::ReportConfig;
use report::OutputFormat;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("upreport=info".parse()?))
        .init();

    // Load configuration
    let cfg = ReportConfig::load()?;
    tracing::info!("Reporting past {} days for {}", cfg.days, cfg.service);

    let clock: Box<dyn Clock> = match cfg.now {
        Some(at) => {
            tracing::info!("Using fixed clock at {}", at);
            Box::new(FixedClock::at(at))
        }
        None => Box::new(SystemClock),
    };

    let events: Vec<_> = sample::sample_events()
        .into_iter()
        .filter(|e| e.service == cfg.service)
        .collect();

    let reports = report::run_report(&events, clock.as_ref(), cfg.days)?;

    match cfg.format {
        OutputFormat::Text => print!("{}", report::render_text(&cfg.service, &reports)),
        OutputFormat::Json => println!("{}", report::render_json(&reports)?),
    }

    Ok(())
}
