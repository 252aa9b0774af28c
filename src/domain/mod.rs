//! Domain layer for the modal stack.
//!
//! Core types independent of the store and controller machinery.
//!
//! # Organization
//!
//! - [`entry`]: Modal entries and transition names
//! - [`error`]: Error types and result aliases
//! - [`outcome`]: Tagged completion outcomes for modal sessions
//!
//! # Examples
//!
//! ```
//! use modal_stack::domain::{ModalEntry, Result};
//! use serde_json::json;
//!
//! fn build() -> Result<ModalEntry> {
//!     Ok(ModalEntry::new("settings", json!({ "tab": "general" })))
//! }
//! # build().unwrap();
//! ```

pub mod entry;
pub mod error;
pub mod outcome;

pub use entry::{ModalEntry, Transition};
pub use error::{ModalStackError, Result, SessionError};
pub use outcome::{Outcome, Rejection, REJECTED_MESSAGE};
