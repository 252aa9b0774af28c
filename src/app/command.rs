//! Command dispatch for hosts that drive the stack with messages.
//!
//! UI event handlers that cannot call [`ModalController`] methods directly
//! (a webview bridge, a plugin IPC channel, a scripted test) send
//! [`Command`]s instead. [`handle_command`] applies one and reports whether
//! the rendering layer should refresh.
//!
//! # Wire Format
//!
//! Commands are internally tagged JSON objects:
//!
//! ```json
//! {"action": "push", "name": "confirm", "params": {"title": "Delete?"}}
//! {"action": "go", "n": -1}
//! {"action": "reject", "error": "cancelled"}
//! {"action": "transition_complete"}
//! ```
//!
//! # Example
//!
//! ```rust
//! use modal_stack::{handle_command, Command, Config, ModalController};
//!
//! let mut modals = ModalController::new(&Config::default());
//! let command = Command::from_json(r#"{"action": "push", "name": "help"}"#)?;
//! assert!(handle_command(&mut modals, &command)?);
//! assert_eq!(modals.state().modal_length(), 1);
//! # Ok::<(), modal_stack::ModalStackError>(())
//! ```

use super::controller::{ModalController, ModalRequest};
use crate::domain::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operations a host can send to the modal stack.
///
/// Pushes sent as commands cannot attach a completion handler or await the
/// session; hosts that need either call [`ModalController::push`] directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// Pushes a modal.
    Push {
        /// Modal component name.
        name: String,
        /// Data for the modal component.
        #[serde(default)]
        params: Value,
    },
    /// Closes the stack without settling the session.
    Close,
    /// Resolves the session with `data`.
    Resolve {
        /// Result data.
        #[serde(default)]
        data: Value,
    },
    /// Rejects the session with `error`.
    Reject {
        /// Rejection detail.
        #[serde(default)]
        error: Value,
    },
    /// Moves `n` modals forward or backward.
    Go {
        /// Relative step.
        n: isize,
    },
    /// Moves one modal forward.
    Forward,
    /// Moves one modal backward.
    Back,
    /// Reports that the running transition animation has finished.
    TransitionComplete,
}

impl Command {
    /// Decodes a command from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ModalStackError::Command`](crate::ModalStackError::Command)
    /// for malformed JSON or an unknown action.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Applies a command to the controller.
///
/// # Returns
///
/// `true` when the state visible to the renderer changed, `false` for
/// rejected navigation and for transition signals with nothing queued.
///
/// # Errors
///
/// Propagates push validation errors.
pub fn handle_command(controller: &mut ModalController, command: &Command) -> Result<bool> {
    let _span = tracing::debug_span!("handle_command", command = ?command).entered();

    match command {
        Command::Push { name, params } => {
            let request = ModalRequest::new(name.clone()).params(params.clone());
            controller.push(request)?;
            Ok(true)
        }
        Command::Close => {
            controller.close();
            Ok(true)
        }
        Command::Resolve { data } => {
            controller.resolve(data.clone());
            Ok(true)
        }
        Command::Reject { error } => {
            controller.reject(error.clone());
            Ok(true)
        }
        Command::Go { n } => Ok(controller.go(*n)),
        Command::Forward => Ok(controller.forward()),
        Command::Back => Ok(controller.back()),
        Command::TransitionComplete => {
            let applied = controller.complete_transition();
            if applied.is_none() {
                tracing::trace!("transition complete with nothing pending");
            }
            Ok(applied.is_some())
        }
    }
}
