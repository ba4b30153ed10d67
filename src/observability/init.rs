//! Tracing subscriber setup.

use super::exporter::{create_tracer_provider, SCOPE_NAME};
use super::rotating::{RotatingWriter, DEFAULT_MAX_BACKUPS, DEFAULT_MAX_BYTES};
use crate::domain::error::Result;
use crate::infrastructure::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// File name of the trace export inside the data directory.
pub const TRACE_FILE_NAME: &str = "popcorn-otlp.json";

/// Installs the global subscriber: `EnvFilter` from `trace_level`, spans
/// exported as OTLP JSON to `<data dir>/popcorn-otlp.json`.
///
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Errors
///
/// Returns [`PopcornError::Io`](crate::domain::PopcornError::Io) when the data
/// directory cannot be created. The plugin keeps working without traces.
pub fn init_tracing(config: &Config) -> Result<()> {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let writer = RotatingWriter::new(
        data_dir.join(TRACE_FILE_NAME),
        DEFAULT_MAX_BYTES,
        DEFAULT_MAX_BACKUPS,
    );
    let tracer = create_tracer_provider(writer, resource).tracer(SCOPE_NAME);

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init()
        .is_ok();

    tracing::debug!(level, installed, "tracing initialized");
    Ok(())
}
