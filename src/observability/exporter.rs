//! OpenTelemetry span exporter writing one JSON object per line.
//!
//! Each finished span becomes a line such as:
//!
//! ```json
//! {"service":"modal-stack","name":"push","traceId":"…","spanId":"…","parentSpanId":"",
//!  "start":"2026-10-18T09:12:01.123456Z","durationUs":41,
//!  "attributes":{"name":"confirm","await_result":true},"status":"unset"}
//! ```

use super::file_writer::RotatingWriter;
use chrono::{DateTime, Utc};
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::path::PathBuf;

/// Service name stamped on every exported span.
pub const SERVICE_NAME: &str = "modal-stack";

/// Exports spans as JSON lines through a [`RotatingWriter`].
#[derive(Debug)]
struct JsonLinesExporter {
    writer: RotatingWriter,
    shut_down: bool,
}

impl JsonLinesExporter {
    const fn new(path: PathBuf) -> Self {
        Self {
            writer: RotatingWriter::new(path),
            shut_down: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> std::io::Result<()> {
        for span in batch {
            self.writer.write_line(&span_to_json(span).to_string())?;
        }
        Ok(())
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.shut_down {
            Err(TraceError::from("span exporter is shut down"))
        } else {
            self.write_batch(&batch)
                .map_err(|e| TraceError::from(format!("{}: {e}", self.writer.path().display())))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }
}

/// Converts one span into its JSON line.
fn span_to_json(span: &SpanData) -> JsonValue {
    let start: DateTime<Utc> = span.start_time.into();
    let duration_us = span
        .end_time
        .duration_since(span.start_time)
        .map_or(0, |d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX));

    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    let status = match &span.status {
        Status::Unset => json!("unset"),
        Status::Ok => json!("ok"),
        Status::Error { description } => json!({ "error": description.to_string() }),
    };

    json!({
        "service": SERVICE_NAME,
        "name": span.name,
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "start": start.to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
        "durationUs": duration_us,
        "attributes": attributes_to_json(&span.attributes),
        "status": status,
    })
}

fn attributes_to_json(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| {
            let value = match &kv.value {
                Value::Bool(b) => json!(b),
                Value::I64(i) => json!(i),
                Value::F64(f) => json!(f),
                other => json!(other.to_string()),
            };
            (kv.key.to_string(), value)
        })
        .collect();
    JsonValue::Object(map)
}

/// Builds a tracer provider that exports every span to `path` immediately.
pub fn create_tracer_provider(path: PathBuf) -> TracerProvider {
    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(JsonLinesExporter::new(path))
        .build()
}
