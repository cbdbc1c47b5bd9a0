//! Logging configuration using tracing

use std::fmt;
use std::path::PathBuf;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::Context;
use tracing_subscriber::{fmt as tracing_fmt, prelude::*, EnvFilter, Layer};

use crate::error::Result;
use crate::noise::NoiseFilter;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/sdxs-studio/logs/`
/// Log level is controlled by `SDXS_LOG` environment variable.
/// Events whose message matches `noise` never reach the file.
///
/// # Examples
/// ```bash
/// SDXS_LOG=debug cargo run
/// SDXS_LOG=trace cargo run
/// ```
pub fn init(noise: NoiseFilter) -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "sdxs.log");

    // Default to info, allow override via SDXS_LOG
    let env_filter =
        EnvFilter::try_from_env("SDXS_LOG").unwrap_or_else(|_| EnvFilter::new("sdxs=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(NoiseFilterLayer::new(noise))
        .with(
            tracing_fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(tracing_fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("SDXS Studio starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("sdxs-studio").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("sdxs.log"))
}

// ─────────────────────────────────────────────────────────────────
// Noise suppression layer
// ─────────────────────────────────────────────────────────────────

/// Layer that disables events whose `message` field is benign noise.
///
/// Disabling happens in `event_enabled`, so no other layer in the stack
/// sees a suppressed event.
pub struct NoiseFilterLayer {
    noise: NoiseFilter,
}

impl NoiseFilterLayer {
    pub fn new(noise: NoiseFilter) -> Self {
        Self { noise }
    }
}

impl<S: Subscriber> Layer<S> for NoiseFilterLayer {
    fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        !self.noise.is_benign(&visitor.message)
    }
}

/// Collects the formatted `message` field of an event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}
