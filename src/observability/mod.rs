//! Tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileExporter → marketplace-otlp.json
//! ```
//!
//! The trace file lives in the pane's data directory
//! (`~/.local/share/zellij/marketplace-pane/`), rotates at 10 MB and keeps
//! three backups. Telemetry events from row gestures are ordinary `tracing`
//! events under the `marketplace::telemetry` target, so they land in the same
//! file.
//!
//! - `init`: subscriber setup
//! - `tracer`: provider and span exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
