//! Queue of index changes waiting for the rendering layer.
//!
//! Structural changes (a push, a transition switch) are committed at once.
//! The index change or stack clear that follows them is parked here as a
//! [`PendingCommit`] and applied when the host reports that the running
//! transition has finished, so the two show up as separate state changes the
//! rendering layer can animate between.
//!
//! Commits are released strictly in the order they were scheduled.

use crate::store::Mutation;
use std::collections::VecDeque;

/// A commit deferred until the next transition-complete signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingCommit {
    /// Show the modal at this absolute index.
    ChangeIndex(usize),
    /// Clear the stack.
    Close,
}

impl PendingCommit {
    /// Converts into the store mutation it stands for.
    #[must_use]
    pub fn into_mutation(self) -> Mutation {
        match self {
            Self::ChangeIndex(index) => Mutation::ChangeIndex(index),
            Self::Close => Mutation::Close,
        }
    }
}

/// FIFO of pending commits.
#[derive(Debug, Default, Clone)]
pub struct TransitionQueue {
    pending: VecDeque<PendingCommit>,
}

impl TransitionQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a commit behind everything already queued.
    pub fn schedule(&mut self, commit: PendingCommit) {
        tracing::trace!(?commit, queued = self.pending.len(), "scheduling commit");
        self.pending.push_back(commit);
    }

    /// Takes the oldest pending commit.
    pub fn next(&mut self) -> Option<PendingCommit> {
        self.pending.pop_front()
    }

    /// Number of commits still waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` when nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_in_schedule_order() {
        let mut queue = TransitionQueue::new();
        queue.schedule(PendingCommit::ChangeIndex(0));
        queue.schedule(PendingCommit::ChangeIndex(1));
        queue.schedule(PendingCommit::Close);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.next(), Some(PendingCommit::ChangeIndex(0)));
        assert_eq!(queue.next(), Some(PendingCommit::ChangeIndex(1)));
        assert_eq!(queue.next(), Some(PendingCommit::Close));
        assert_eq!(queue.next(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn pending_commit_maps_to_mutation_name() {
        assert_eq!(PendingCommit::ChangeIndex(3).into_mutation().name(), "CHANGE_INDEX");
        assert_eq!(PendingCommit::Close.into_mutation().name(), "CLOSE");
    }
}
