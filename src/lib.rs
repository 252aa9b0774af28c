//! modal-stack: state management for stacked modal dialogs.
//!
//! A modal stack is a sequence of dialogs opened on top of each other. The
//! user can move forward and backward between them, and the whole stack
//! closes with a single result. This crate owns the state side of that
//! widget:
//! - Pushing modals and selecting the transition animation for each change
//! - Bounds-checked navigation (`go`, `forward`, `back`)
//! - A session result shared by every modal of a stack, delivered to a
//!   completion handler and to any number of awaiting futures
//! - Explicit sequencing of structural changes before visible index changes,
//!   so the rendering layer can animate between them
//!
//! Rendering, animation and framework wiring stay with the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host UI (event handlers, renderer)                 │
//! └─────────────────────────────────────────────────────┘
//!          │ commands / calls            ↑ ModalView
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - ModalController operations                       │
//! │  - Pending commit queue                             │
//! │  - Command dispatch                                 │
//! └─────────────────────────────────────────────────────┘
//!          │ mutations
//! ┌─────────────────────────────────────────────────────┐
//! │  Store (store/)                                     │
//! │  - ModalState + getters                             │
//! │  - Session deferred / SessionHandle                 │
//! └─────────────────────────────────────────────────────┘
//!          │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Domain        │   │ UI surface    │   │ Observability │
//! │ (domain/)     │   │ (ui/)         │   │ (optional)    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller, pending commit queue, command dispatch
//! - [`store`]: State container, mutations, session deferred
//! - [`domain`]: Modal entries, transitions, outcomes, errors
//! - [`ui`]: View model and transition class names for renderers
//! - [`infrastructure`]: Filesystem locations
//! - [`observability`]: OpenTelemetry tracing with file export
//!
//! # Configuration
//!
//! ```toml
//! animate = true
//! trace_level = "debug"
//! trace_file = "/tmp/modal-stack-spans.jsonl"
//!
//! [transitions]
//! scale = "modal-pop"
//! forward = "slide-left"
//! backward = "slide-right"
//! ```
//!
//! # Example
//!
//! ```rust
//! use modal_stack::{initialize, Config, ModalRequest, Outcome, SessionError};
//! use serde_json::json;
//!
//! let mut modals = initialize(&Config::default());
//!
//! let session = modals
//!     .push(
//!         ModalRequest::new("delete-file")
//!             .params(json!({ "path": "/tmp/report.txt" }))
//!             .on_complete(|outcome: Outcome| println!("finished: {outcome:?}"))
//!             .await_result(),
//!     )?
//!     .expect("handle requested");
//! modals.push(ModalRequest::new("are-you-sure"))?;
//! modals.settle();
//!
//! modals.reject(json!("cancelled by user"));
//! modals.settle();
//!
//! assert!(modals.state().is_empty());
//! assert_eq!(
//!     futures::executor::block_on(session),
//!     Err(SessionError::Rejected(json!("cancelled by user")))
//! );
//! # Ok::<(), modal_stack::ModalStackError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{handle_command, Command, ModalController, ModalRequest, PendingCommit};
pub use domain::{ModalEntry, ModalStackError, Outcome, Rejection, Result, SessionError, Transition};
pub use store::{ModalState, SessionHandle};
pub use ui::{ModalView, TransitionNames};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Controller configuration.
///
/// Can be built in code, parsed from TOML, or parsed from a flat key/value
/// map handed over by a host application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether index changes wait for transition-complete signals.
    ///
    /// With `false`, every commit applies immediately. Default: `true`
    pub animate: bool,

    /// Class names reported to the renderer for each transition.
    pub transitions: TransitionNames,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Tracing stays off when unset.
    pub trace_level: Option<String>,

    /// Span export file. Default: see [`infrastructure::default_trace_file`].
    pub trace_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animate: true,
            transitions: TransitionNames::default(),
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// # Parsing Rules
    ///
    /// - `animate`: `"true"`/`"false"` (falls back to `true` on anything else)
    /// - `transitions_file`: TOML file of class names, see [`TransitionNames`]
    /// - `transition_scale` / `transition_forward` / `transition_backward`:
    ///   individual class names, applied after `transitions_file`
    /// - `trace_level`: string
    /// - `trace_file`: path, `~` expanded
    ///
    /// Unreadable transition files fall back to the default names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use modal_stack::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("animate".to_string(), "false".to_string());
    /// map.insert("transition_forward".to_string(), "slide-left".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert!(!config.animate);
    /// assert_eq!(config.transitions.forward, "slide-left");
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let animate = map
            .get("animate")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(true);

        let mut transitions = map.get("transitions_file").map_or_else(
            TransitionNames::default,
            |file| {
                TransitionNames::from_file(infrastructure::expand_tilde(file)).unwrap_or_else(|e| {
                    tracing::debug!(transitions_file = %file, error = %e, "failed to load transition names, using defaults");
                    TransitionNames::default()
                })
            },
        );
        if let Some(name) = map.get("transition_scale") {
            transitions.scale.clone_from(name);
        }
        if let Some(name) = map.get("transition_forward") {
            transitions.forward.clone_from(name);
        }
        if let Some(name) = map.get("transition_backward") {
            transitions.backward.clone_from(name);
        }

        Self {
            animate,
            transitions,
            trace_level: map.get("trace_level").cloned(),
            trace_file: map
                .get("trace_file")
                .map(|path| infrastructure::expand_tilde(path)),
        }
    }

    /// Parses configuration from TOML text; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ModalStackError::Toml`] for invalid TOML or mistyped values.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ModalStackError::Io`] when the file cannot be read and
    /// [`ModalStackError::Toml`] when it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Creates a controller from configuration.
///
/// Installs the tracing subscriber first when `trace_level` is set.
///
/// # Example
///
/// ```rust
/// use modal_stack::{initialize, Config};
///
/// let modals = initialize(&Config::default());
/// assert!(modals.state().is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> ModalController {
    if config.trace_level.is_some() {
        observability::init_tracing(config);
    }
    tracing::debug!(animate = config.animate, "initializing modal stack");

    ModalController::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn map_defaults() {
        let config = Config::from_map(&BTreeMap::new());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn map_with_bad_animate_keeps_default() {
        let mut map = BTreeMap::new();
        map.insert("animate".to_string(), "sometimes".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_map(&map);
        assert!(config.animate);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn map_overrides_apply_after_transitions_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scale = \"pop\"\nforward = \"slide\"").unwrap();

        let mut map = BTreeMap::new();
        map.insert(
            "transitions_file".to_string(),
            file.path().to_string_lossy().into_owned(),
        );
        map.insert("transition_forward".to_string(), "slide-left".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.transitions.scale, "pop");
        assert_eq!(config.transitions.forward, "slide-left");
        assert_eq!(config.transitions.backward, "backward");
    }

    #[test]
    fn toml_config_parses_nested_transitions() {
        let config = Config::from_toml_str(
            r#"
            animate = false
            trace_file = "/tmp/spans.jsonl"

            [transitions]
            backward = "slide-right"
            "#,
        )
        .unwrap();

        assert!(!config.animate);
        assert_eq!(config.trace_file, Some(PathBuf::from("/tmp/spans.jsonl")));
        assert_eq!(config.transitions.backward, "slide-right");
        assert_eq!(config.transitions.scale, "scale");
    }

    #[test]
    fn toml_type_errors_surface() {
        let err = Config::from_toml_str("animate = \"yes\"").unwrap_err();
        assert!(matches!(err, ModalStackError::Toml(_)));
    }

    #[test]
    fn config_file_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modal-stack.toml");
        std::fs::write(&path, "animate = false\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(!config.animate);

        let missing = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(missing, ModalStackError::Io(_)));
    }
}
