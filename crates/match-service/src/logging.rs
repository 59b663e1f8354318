//! Subscriber setup: stdout always, plus a daily rolling file when
//! `log.path` is set.

use crate::config::LogConfig;
use anyhow::{Context, Result};
use chrono::Local;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::{DefaultFields, Format, Full, Writer};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Local wall-clock timestamps with millisecond precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format(TIMESTAMP_FORMAT))
    }
}

type FileLayer<S> =
    tracing_subscriber::fmt::Layer<S, DefaultFields, Format<Full, LocalTimer>, NonBlocking>;

/// Plain-text layer writing to `<path>/<prefix>.<date>`, rotated daily.
fn file_layer<S>(config: &LogConfig) -> Result<Option<(FileLayer<S>, WorkerGuard)>, InitError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let Some(dir) = &config.path else {
        return Ok(None);
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&config.prefix)
        .build(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(LocalTimer);

    Ok(Some((layer, guard)))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it until exit.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (file, guard) = match file_layer(config).context("Failed to open log file")? {
        Some((layer, guard)) => (Some(layer), Some(guard)),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_timer(LocalTimer))
        .with(file)
        .init();

    Ok(guard)
}
