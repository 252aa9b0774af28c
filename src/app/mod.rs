//! Application layer: the modal stack controller and its command surface.
//!
//! This layer sits between UI event handlers and the [`store`](crate::store).
//!
//! ```text
//! UI event → Command / method call → ModalController → Mutations → ModalState
//!                                          │                           ↑
//!                                          └── PendingCommit queue ────┘
//!                                               (transition complete)
//! ```
//!
//! # Modules
//!
//! - [`controller`]: `push`, `close`, `resolve`, `reject`, `go`, `forward`, `back`
//! - [`queue`]: Commits waiting for the rendering layer's transition signal
//! - [`command`]: Serializable commands and their dispatcher
//!
//! # Example
//!
//! ```rust
//! use modal_stack::app::{ModalController, ModalRequest};
//! use modal_stack::Config;
//!
//! let mut modals = ModalController::new(&Config::default());
//! modals.push(ModalRequest::new("welcome"))?;
//! modals.settle();
//! # Ok::<(), modal_stack::ModalStackError>(())
//! ```

pub mod command;
pub mod controller;
pub mod queue;

pub use crate::store::SessionHandle;
pub use command::{handle_command, Command};
pub use controller::{ModalController, ModalRequest};
pub use queue::{PendingCommit, TransitionQueue};
