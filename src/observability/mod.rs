//! OpenTelemetry-backed tracing with file export.
//!
//! The crate instruments its operations with `tracing` spans and events.
//! [`init_tracing`] wires them to a JSON-lines file:
//!
//! ```text
//! tracing → tracing-opentelemetry → opentelemetry_sdk → JsonLinesExporter → RotatingWriter
//! ```
//!
//! Hosts that already install their own subscriber can skip this module; the
//! spans show up in whatever subscriber is active.
//!
//! # Configuration
//!
//! - `trace_level`: `EnvFilter` directive, default `"info"`
//! - `trace_file`: export path, default `<data dir>/modal-stack/modal-stack-spans.jsonl`
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `exporter`: span → JSON line conversion and tracer provider
//! - `file_writer`: size-capped rotating file writer

mod exporter;
mod file_writer;
mod init;

pub use init::init_tracing;
