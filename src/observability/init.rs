//! Tracing subscriber setup.

use super::exporter::{self, SERVICE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when the configuration sets no `trace_level`.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// The subscriber filters by `config.trace_level` (default `"info"`) and
/// forwards spans through `tracing-opentelemetry` to a JSON-lines export at
/// `config.trace_file`, or [`default_trace_file`](crate::infrastructure::default_trace_file)
/// when unset.
///
/// Observability is optional: if the export directory cannot be created or a
/// subscriber is already installed, the call returns without doing anything.
///
/// # Example
///
/// ```rust,no_run
/// use modal_stack::{observability::init_tracing, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("modal stack tracing active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let trace_file = config
        .trace_file
        .clone()
        .unwrap_or_else(crate::infrastructure::default_trace_file);

    if let Some(dir) = trace_file.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let provider = exporter::create_tracer_provider(trace_file);
    let tracer = provider.tracer(SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
