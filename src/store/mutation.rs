//! Named state mutations accepted by the modal store.
//!
//! Mutations are the only way [`ModalState`](super::ModalState) changes. The
//! controller commits some of them immediately and queues others (see
//! [`PendingCommit`](crate::app::PendingCommit)) so the rendering layer can
//! animate between a structural change and the index change that follows it.

use super::deferred::{Callback, Deferred};
use crate::domain::{ModalEntry, Transition};
use std::fmt;

/// A single committed change to the modal state.
pub enum Mutation {
    /// Appends a modal to the end of the stack.
    Push(ModalEntry),

    /// Clears the stack, the current index, the saved callback and the
    /// session deferred.
    Close,

    /// Moves the current index by a relative amount.
    ///
    /// Ignored when the resulting index falls outside the stack.
    AddIndex(isize),

    /// Sets the current index to an absolute position.
    ///
    /// Ignored when the position falls outside the stack.
    ChangeIndex(usize),

    /// Selects the transition for the next visible change.
    ApplyTransition(Transition),

    /// Installs the session deferred.
    InitDeferred(Deferred),

    /// Saves the completion handler, replacing any previous one.
    SaveCallback(Callback),
}

impl Mutation {
    /// Returns the mutation's canonical name, used as a tracing field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Push(_) => "PUSH",
            Self::Close => "CLOSE",
            Self::AddIndex(_) => "ADD_INDEX",
            Self::ChangeIndex(_) => "CHANGE_INDEX",
            Self::ApplyTransition(_) => "APPLY_TRANSITION",
            Self::InitDeferred(_) => "INIT_DEFERRED",
            Self::SaveCallback(_) => "SAVE_CALLBACK",
        }
    }
}

impl fmt::Debug for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(entry) => f.debug_tuple("Push").field(entry).finish(),
            Self::Close => f.write_str("Close"),
            Self::AddIndex(n) => f.debug_tuple("AddIndex").field(n).finish(),
            Self::ChangeIndex(index) => f.debug_tuple("ChangeIndex").field(index).finish(),
            Self::ApplyTransition(transition) => {
                f.debug_tuple("ApplyTransition").field(transition).finish()
            }
            Self::InitDeferred(deferred) => f.debug_tuple("InitDeferred").field(deferred).finish(),
            Self::SaveCallback(_) => f.write_str("SaveCallback(..)"),
        }
    }
}
