//! Modal stack state container.
//!
//! [`ModalState`] is the single source of truth read by the rendering layer.
//! It changes only through [`ModalState::commit`], which applies one
//! [`Mutation`] at a time, plus the crate-internal session accessors the
//! controller uses while settling a session.
//!
//! # Invariants
//!
//! - `current_index`, when set, is always a valid position in `modals`.
//! - `deferred` is `None` exactly when no session is awaiting completion.
//! - `Close` discards the callback and deferred together with the stack.

use super::deferred::{Callback, Deferred};
use super::mutation::Mutation;
use crate::domain::{ModalEntry, Transition};
use std::fmt;

/// State of the modal stack.
#[derive(Default)]
pub struct ModalState {
    modals: Vec<ModalEntry>,
    current_index: Option<usize>,
    transition: Transition,
    callback: Option<Callback>,
    deferred: Option<Deferred>,
}

impl ModalState {
    /// Creates an empty state with the default transition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a mutation.
    ///
    /// Index mutations that would point outside the stack are dropped with a
    /// debug event rather than corrupting the index invariant.
    pub fn commit(&mut self, mutation: Mutation) {
        tracing::debug!(mutation = mutation.name(), "commit");

        match mutation {
            Mutation::Push(entry) => self.modals.push(entry),
            Mutation::Close => {
                self.modals.clear();
                self.current_index = None;
                self.callback = None;
                self.deferred = None;
            }
            Mutation::AddIndex(n) => match self.offset_index(n) {
                Some(index) => self.current_index = Some(index),
                None => tracing::debug!(n, len = self.modals.len(), "ADD_INDEX out of range"),
            },
            Mutation::ChangeIndex(index) => {
                if index < self.modals.len() {
                    self.current_index = Some(index);
                } else {
                    tracing::debug!(index, len = self.modals.len(), "CHANGE_INDEX out of range");
                }
            }
            Mutation::ApplyTransition(transition) => self.transition = transition,
            Mutation::InitDeferred(deferred) => self.deferred = Some(deferred),
            Mutation::SaveCallback(callback) => self.callback = Some(callback),
        }
    }

    /// Number of modals in the stack.
    #[must_use]
    pub fn modal_length(&self) -> usize {
        self.modals.len()
    }

    /// Returns `true` when the stack holds no modals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modals.is_empty()
    }

    /// Index of the displayed modal, `None` when nothing is shown.
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Current index for navigation arithmetic, with `-1` standing in for
    /// "no modal shown".
    #[must_use]
    pub fn index_signed(&self) -> i64 {
        self.current_index.map_or(-1, |index| index as i64)
    }

    /// Resolves a relative step from the current index to a position in
    /// the stack.
    ///
    /// Returns `None` when the target falls outside the stack, including
    /// steps too large to represent.
    #[must_use]
    pub fn offset_index(&self, n: isize) -> Option<usize> {
        let next = i64::try_from(n)
            .ok()
            .and_then(|n| self.index_signed().checked_add(n))?;
        usize::try_from(next)
            .ok()
            .filter(|&index| index < self.modals.len())
    }

    /// Transition the rendering layer should apply next.
    #[must_use]
    pub const fn transition(&self) -> Transition {
        self.transition
    }

    /// All modals, in insertion order.
    #[must_use]
    pub fn modals(&self) -> &[ModalEntry] {
        &self.modals
    }

    /// The displayed modal, if any.
    #[must_use]
    pub fn current_modal(&self) -> Option<&ModalEntry> {
        self.current_index.and_then(|index| self.modals.get(index))
    }

    /// Returns `true` when a completion handler is saved.
    #[must_use]
    pub const fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Returns `true` while a session deferred is installed.
    #[must_use]
    pub const fn has_deferred(&self) -> bool {
        self.deferred.is_some()
    }

    /// The installed session deferred.
    #[must_use]
    pub const fn deferred(&self) -> Option<&Deferred> {
        self.deferred.as_ref()
    }

    pub(crate) fn deferred_mut(&mut self) -> Option<&mut Deferred> {
        self.deferred.as_mut()
    }

    pub(crate) fn take_callback(&mut self) -> Option<Callback> {
        self.callback.take()
    }

    /// Detaches the session ahead of the deferred `Close` commit.
    ///
    /// Returns the deferred so the caller decides when it is dropped; an
    /// unsettled deferred dismisses its awaiters on drop.
    pub(crate) fn release_session(&mut self) -> Option<Deferred> {
        self.callback = None;
        self.deferred.take()
    }
}

impl fmt::Debug for ModalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalState")
            .field("modals", &self.modals)
            .field("current_index", &self.current_index)
            .field("transition", &self.transition)
            .field("has_callback", &self.has_callback())
            .field("deferred", &self.deferred)
            .finish()
    }
}
