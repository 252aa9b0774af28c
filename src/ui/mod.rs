//! Rendering-side surface of the modal stack.
//!
//! Nothing here draws. The rendering layer reads [`ModalView`] snapshots and
//! maps transitions to its own class names through [`TransitionNames`].
//!
//! ```text
//! ModalState → ModalView (+ TransitionNames) → host renderer
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Serializable snapshot of the stack
//! - [`transitions`]: Transition → class name mapping, loadable from TOML

pub mod transitions;
pub mod viewmodel;

pub use transitions::TransitionNames;
pub use viewmodel::ModalView;
