//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → rotating file
//! ```
//!
//! Traces land in `~/.local/share/zellij/popcorn/popcorn-otlp.json`, one OTLP
//! JSON document per line, rotated by size with a few numbered backups.
//!
//! The level comes from the `trace_level` plugin option (an `EnvFilter`
//! directive such as `debug` or `popcorn::app=trace`), defaulting to `info`.

mod exporter;
mod init;
mod rotating;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL, TRACE_FILE_NAME};
pub use rotating::RotatingWriter;
