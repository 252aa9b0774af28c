//! View model consumed by the rendering layer.
//!
//! [`ModalView`] is an immutable snapshot of the store computed by
//! [`ModalController::view`](crate::ModalController::view). It carries
//! everything a renderer needs (which modals to mount, which one is visible,
//! which transition class to apply) and serializes to JSON for hosts that
//! render outside Rust.
//!
//! # Example
//!
//! ```rust
//! use modal_stack::{Config, ModalController, ModalRequest};
//!
//! let mut modals = ModalController::new(&Config::default());
//! modals.push(ModalRequest::new("about"))?;
//!
//! let view = modals.view();
//! assert!(view.is_open);
//! assert_eq!(view.transition_class, "scale");
//! assert_eq!(view.pending, 1);
//! # Ok::<(), modal_stack::ModalStackError>(())
//! ```

use super::transitions::TransitionNames;
use crate::domain::{ModalEntry, Transition};
use crate::store::ModalState;
use serde::Serialize;

/// Renderable snapshot of the modal stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalView {
    /// Every modal in the stack, bottom first.
    pub modals: Vec<ModalEntry>,

    /// Index of the visible modal, `None` while nothing is shown.
    pub current_index: Option<usize>,

    /// The visible modal.
    pub current: Option<ModalEntry>,

    /// Transition to animate with.
    pub transition: Transition,

    /// Host class name for `transition`.
    pub transition_class: String,

    /// Number of modals in the stack.
    pub depth: usize,

    /// `true` while the stack holds at least one modal.
    pub is_open: bool,

    /// Commits waiting for a transition-complete signal.
    pub pending: usize,
}

impl ModalView {
    /// Builds a snapshot from the store.
    #[must_use]
    pub fn from_state(state: &ModalState, names: &TransitionNames, pending: usize) -> Self {
        let transition = state.transition();
        Self {
            modals: state.modals().to_vec(),
            current_index: state.current_index(),
            current: state.current_modal().cloned(),
            transition,
            transition_class: names.class_for(transition).to_string(),
            depth: state.modal_length(),
            is_open: !state.is_empty(),
            pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Mutation;
    use serde_json::json;

    #[test]
    fn snapshot_reflects_state() {
        let mut state = ModalState::new();
        state.commit(Mutation::Push(ModalEntry::new("a", json!({ "x": 1 }))));
        state.commit(Mutation::Push(ModalEntry::new("b", json!(null))));
        state.commit(Mutation::ChangeIndex(1));
        state.commit(Mutation::ApplyTransition(Transition::Forward));

        let names = TransitionNames {
            forward: "slide-left".to_string(),
            ..TransitionNames::default()
        };
        let view = ModalView::from_state(&state, &names, 0);

        assert_eq!(view.depth, 2);
        assert!(view.is_open);
        assert_eq!(view.current.as_ref().map(|m| m.name.as_str()), Some("b"));
        assert_eq!(view.transition_class, "slide-left");
    }

    #[test]
    fn empty_snapshot_serializes() {
        let view = ModalView::from_state(&ModalState::new(), &TransitionNames::default(), 0);
        let encoded = serde_json::to_value(&view).unwrap();

        assert_eq!(encoded["is_open"], json!(false));
        assert_eq!(encoded["current_index"], json!(null));
        assert_eq!(encoded["transition"], json!("scale"));
    }
}
