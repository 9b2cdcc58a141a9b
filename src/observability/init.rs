//! Subscriber setup: env filter plus the OpenTelemetry layer.

use super::tracer;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name attached to every exported span.
pub const SERVICE_NAME: &str = "marketplace-pane";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "marketplace-otlp.json";

/// Installs the global tracing subscriber.
///
/// The filter comes from `trace_level` (default `"info"`), e.g. `"debug"` or
/// `"marketplace::telemetry=info,warn"`. Spans go to
/// `<data dir>/marketplace-otlp.json`.
///
/// Returns `false` if the data directory cannot be created or a subscriber is
/// already installed; the pane works the same without tracing.
pub fn init_tracing(config: &Config) -> bool {
    let filter = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return false;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(otel_layer)
        .try_init()
        .is_ok()
}
