//! Modal stack controller.
//!
//! [`ModalController`] implements the operations UI code invokes against a
//! modal stack (`push`, `close`, `resolve`, `reject`, `go`, `forward`,
//! `back`) on top of the [`ModalState`] store.
//!
//! # Two-phase commits
//!
//! Every operation that changes which modal is visible works in two steps.
//! The structural part (selecting a transition, appending an entry) is
//! committed immediately. The visible part (`CHANGE_INDEX`, `CLOSE`) is
//! queued and applied when the host calls [`ModalController::complete_transition`]
//! after the running animation ends, or all at once via
//! [`ModalController::settle`]. With `animate = false` in the [`Config`], the
//! visible part is committed right away.
//!
//! # Sessions
//!
//! The first push into an empty stack opens a session: a single deferred
//! result shared by every modal stacked before the session closes. Callers
//! that pass [`ModalRequest::await_result`] get a [`SessionHandle`] for it.
//!
//! # Example
//!
//! ```rust
//! use modal_stack::{Config, ModalController, ModalRequest, Transition};
//! use serde_json::json;
//!
//! let mut modals = ModalController::new(&Config::default());
//! modals.push(ModalRequest::new("pick-file"))?;
//! modals.push(ModalRequest::new("confirm").params(json!({ "path": "/tmp/a" })))?;
//! modals.settle();
//!
//! assert_eq!(modals.state().current_index(), Some(1));
//! assert_eq!(modals.state().transition(), Transition::Forward);
//!
//! assert!(modals.back());
//! modals.settle();
//! assert_eq!(modals.state().current_index(), Some(0));
//! # Ok::<(), modal_stack::ModalStackError>(())
//! ```

use super::queue::{PendingCommit, TransitionQueue};
use crate::domain::{ModalEntry, ModalStackError, Outcome, Result, Transition};
use crate::store::{Callback, Deferred, ModalState, Mutation, SessionHandle};
use crate::ui::{ModalView, TransitionNames};
use crate::Config;
use serde_json::Value;
use std::fmt;

/// Arguments of a push.
///
/// # Example
///
/// ```rust
/// use modal_stack::{ModalRequest, Outcome};
/// use serde_json::json;
///
/// let request = ModalRequest::new("login")
///     .params(json!({ "remember": true }))
///     .on_complete(|outcome: Outcome| println!("login finished: {outcome:?}"))
///     .await_result();
/// assert_eq!(request.name(), "login");
/// ```
pub struct ModalRequest {
    name: String,
    params: Value,
    callback: Option<Callback>,
    await_result: bool,
}

impl ModalRequest {
    /// Starts a request for the modal named `name` with null params.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Value::Null,
            callback: None,
            await_result: false,
        }
    }

    /// Sets the data handed to the modal component.
    #[must_use]
    pub fn params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }

    /// Saves a completion handler for the session.
    ///
    /// A later push with its own handler replaces this one.
    #[must_use]
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Asks `push` to return the session handle.
    #[must_use]
    pub const fn await_result(mut self) -> Self {
        self.await_result = true;
        self
    }

    /// Name of the modal to push.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for ModalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalRequest")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("has_callback", &self.callback.is_some())
            .field("await_result", &self.await_result)
            .finish()
    }
}

/// Coordinates the modal store, the transition queue and the session.
pub struct ModalController {
    state: ModalState,
    queue: TransitionQueue,
    animate: bool,
    transitions: TransitionNames,
}

impl ModalController {
    /// Creates a controller with an empty stack.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            state: ModalState::new(),
            queue: TransitionQueue::new(),
            animate: config.animate,
            transitions: config.transitions.clone(),
        }
    }

    /// Read access to the store, for getters.
    #[must_use]
    pub const fn state(&self) -> &ModalState {
        &self.state
    }

    /// Number of commits waiting for a transition-complete signal.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pushes a modal onto the stack.
    ///
    /// Selects `Forward` when the stack already holds modals and `Scale`
    /// otherwise, appends the entry, and schedules the index change that
    /// reveals it. Saves the request's completion handler and opens a session
    /// if none is open yet.
    ///
    /// # Returns
    ///
    /// The session handle when the request asked for it, `None` otherwise.
    ///
    /// # Errors
    ///
    /// [`ModalStackError::InvalidModalName`] for an empty name; the state is
    /// left untouched.
    pub fn push(&mut self, request: ModalRequest) -> Result<Option<SessionHandle>> {
        let _span = tracing::debug_span!(
            "push",
            name = %request.name,
            await_result = request.await_result
        )
        .entered();

        let ModalRequest {
            name,
            params,
            callback,
            await_result,
        } = request;

        if name.is_empty() {
            return Err(ModalStackError::InvalidModalName);
        }

        let modal_length = self.state.modal_length();
        let transition = if modal_length > 0 {
            Transition::Forward
        } else {
            Transition::Scale
        };

        self.state.commit(Mutation::ApplyTransition(transition));
        self.state.commit(Mutation::Push(ModalEntry::new(name, params)));
        self.schedule(PendingCommit::ChangeIndex(modal_length));

        if let Some(callback) = callback {
            self.state.commit(Mutation::SaveCallback(callback));
        }

        if !self.state.has_deferred() {
            tracing::debug!("opening modal session");
            self.state.commit(Mutation::InitDeferred(Deferred::new()));
        }

        if await_result {
            Ok(self.state.deferred().map(Deferred::handle))
        } else {
            Ok(None)
        }
    }

    /// Closes the whole stack.
    ///
    /// Applies the default transition and detaches the session immediately;
    /// clearing the stack itself is scheduled. Awaiters of a session that was
    /// never resolved or rejected observe
    /// [`SessionError::Dismissed`](crate::SessionError::Dismissed).
    pub fn close(&mut self) {
        let _span = tracing::debug_span!("close", modal_length = self.state.modal_length()).entered();

        self.state.commit(Mutation::ApplyTransition(Transition::Scale));

        if let Some(deferred) = self.state.release_session() {
            tracing::debug!(settled = deferred.is_settled(), "session released");
        }

        self.schedule(PendingCommit::Close);
    }

    /// Rejects the session with `err` and closes the stack.
    ///
    /// The saved completion handler receives [`Outcome::Rejected`] with the
    /// fixed `"rejected"` message and `err` as detail; the session handle
    /// fails with `err`.
    pub fn reject(&mut self, err: Value) {
        let _span = tracing::debug_span!("reject").entered();

        if let Some(callback) = self.state.take_callback() {
            callback(Outcome::rejected(err.clone()));
        }
        if let Some(deferred) = self.state.deferred_mut() {
            deferred.reject(err);
        }

        self.close();
    }

    /// Resolves the session with `data` and closes the stack.
    pub fn resolve(&mut self, data: Value) {
        let _span = tracing::debug_span!("resolve").entered();

        if let Some(callback) = self.state.take_callback() {
            callback(Outcome::resolved(data.clone()));
        }
        if let Some(deferred) = self.state.deferred_mut() {
            deferred.resolve(data);
        }

        self.close();
    }

    /// Moves `n` modals forward (positive) or backward (negative).
    ///
    /// Returns `false` and leaves the state alone when the target index is
    /// outside the stack.
    pub fn go(&mut self, n: isize) -> bool {
        let Some(index) = self.state.offset_index(n) else {
            tracing::warn!(
                current = self.state.index_signed(),
                n,
                modal_length = self.state.modal_length(),
                "there is no target modal"
            );
            return false;
        };

        self.state.commit(Mutation::ApplyTransition(Transition::for_step(n)));
        self.schedule(PendingCommit::ChangeIndex(index));
        true
    }

    /// Moves to the next modal, see [`ModalController::go`].
    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Moves to the previous modal, see [`ModalController::go`].
    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    /// Applies the oldest pending commit.
    ///
    /// Hosts call this when the animation for the current transition ends.
    /// Returns the commit that was applied, `None` if nothing was waiting.
    pub fn complete_transition(&mut self) -> Option<PendingCommit> {
        let commit = self.queue.next()?;
        self.state.commit(commit.into_mutation());
        Some(commit)
    }

    /// Applies every pending commit in order and returns how many there were.
    pub fn settle(&mut self) -> usize {
        let mut applied = 0;
        while self.complete_transition().is_some() {
            applied += 1;
        }
        applied
    }

    /// Computes the rendering snapshot of the stack.
    #[must_use]
    pub fn view(&self) -> ModalView {
        ModalView::from_state(&self.state, &self.transitions, self.queue.len())
    }

    fn schedule(&mut self, commit: PendingCommit) {
        if self.animate {
            self.queue.schedule(commit);
        } else {
            self.state.commit(commit.into_mutation());
        }
    }
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl fmt::Debug for ModalController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalController")
            .field("state", &self.state)
            .field("queue", &self.queue)
            .field("animate", &self.animate)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn names(controller: &ModalController) -> Vec<String> {
        controller
            .state()
            .modals()
            .iter()
            .map(|m| m.name.clone())
            .collect()
    }

    fn recorder() -> (Arc<Mutex<Vec<Outcome>>>, impl FnOnce(Outcome) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |outcome| sink.lock().unwrap().push(outcome))
    }

    #[test]
    fn push_into_empty_stack_scales() {
        let mut modals = ModalController::default();
        let handle = modals.push(ModalRequest::new("a")).unwrap();

        assert!(handle.is_none());
        assert_eq!(modals.state().transition(), Transition::Scale);
        assert_eq!(modals.state().modal_length(), 1);
        assert!(modals.state().has_deferred());
    }

    #[test]
    fn index_advances_only_after_transition_completes() {
        let mut modals = ModalController::default();
        modals.push(ModalRequest::new("a")).unwrap();

        assert_eq!(modals.state().current_index(), None);
        assert_eq!(modals.pending(), 1);

        assert_eq!(modals.complete_transition(), Some(PendingCommit::ChangeIndex(0)));
        assert_eq!(modals.state().current_index(), Some(0));
        assert_eq!(modals.complete_transition(), None);
    }

    #[test]
    fn second_push_goes_forward() {
        let mut modals = ModalController::default();
        modals.push(ModalRequest::new("a")).unwrap();
        modals.push(ModalRequest::new("b").params(json!({ "id": 2 }))).unwrap();

        assert_eq!(modals.state().transition(), Transition::Forward);
        assert_eq!(modals.settle(), 2);
        assert_eq!(modals.state().current_index(), Some(1));
        assert_eq!(names(&modals), ["a", "b"]);
        assert_eq!(modals.state().modals()[1].params, json!({ "id": 2 }));
    }

    #[test]
    fn empty_name_is_rejected_without_state_change() {
        let mut modals = ModalController::default();
        let err = modals.push(ModalRequest::new("")).unwrap_err();

        assert!(matches!(err, ModalStackError::InvalidModalName));
        assert!(modals.state().is_empty());
        assert!(!modals.state().has_deferred());
        assert_eq!(modals.pending(), 0);
    }

    #[test]
    fn go_on_empty_stack_is_a_no_op() {
        let mut modals = ModalController::default();

        assert!(!modals.go(1));
        assert!(!modals.forward());
        assert!(!modals.back());
        assert_eq!(modals.state().current_index(), None);
        assert_eq!(modals.state().transition(), Transition::Scale);
        assert_eq!(modals.pending(), 0);
    }

    #[test]
    fn go_respects_bounds() {
        let mut modals = ModalController::default();
        for name in ["a", "b", "c"] {
            modals.push(ModalRequest::new(name)).unwrap();
        }
        modals.settle();

        assert!(!modals.go(1));
        assert_eq!(modals.state().current_index(), Some(2));

        assert!(modals.go(-2));
        assert_eq!(modals.state().transition(), Transition::Backward);
        modals.settle();
        assert_eq!(modals.state().current_index(), Some(0));

        assert!(!modals.go(-1));
        assert!(!modals.go(3));
        assert_eq!(modals.state().current_index(), Some(0));

        assert!(modals.forward());
        assert_eq!(modals.state().transition(), Transition::Forward);
        modals.settle();
        assert_eq!(modals.state().current_index(), Some(1));
    }

    #[test]
    fn extreme_steps_are_rejected_without_panicking() {
        let mut modals = ModalController::default();
        assert!(!modals.go(isize::MIN));
        assert!(!modals.go(isize::MAX));

        modals.push(ModalRequest::new("a")).unwrap();
        modals.push(ModalRequest::new("b")).unwrap();
        modals.settle();

        assert!(!modals.go(isize::MAX));
        assert!(!modals.go(isize::MIN));
        assert_eq!(modals.state().current_index(), Some(1));
        assert_eq!(modals.state().transition(), Transition::Forward);
        assert_eq!(modals.pending(), 0);
    }

    #[test]
    fn go_zero_recommits_current_index() {
        let mut modals = ModalController::default();
        modals.push(ModalRequest::new("a")).unwrap();
        modals.push(ModalRequest::new("b")).unwrap();
        modals.settle();

        assert!(modals.go(0));
        assert_eq!(modals.state().transition(), Transition::Backward);
        assert_eq!(modals.pending(), 1);
        assert_eq!(modals.complete_transition(), Some(PendingCommit::ChangeIndex(1)));
        assert_eq!(modals.state().current_index(), Some(1));
    }

    #[test]
    fn resolve_notifies_callback_once_and_closes() {
        let (seen, callback) = recorder();
        let mut modals = ModalController::default();
        modals.push(ModalRequest::new("a").on_complete(callback)).unwrap();
        modals.settle();

        modals.resolve(json!("done"));

        assert_eq!(modals.state().transition(), Transition::Scale);
        assert!(!modals.state().has_deferred());
        assert!(!modals.state().has_callback());
        assert_eq!(modals.state().modal_length(), 1);

        modals.settle();
        assert!(modals.state().is_empty());
        assert_eq!(modals.state().current_index(), None);

        modals.resolve(json!("again"));
        assert_eq!(*seen.lock().unwrap(), vec![Outcome::resolved(json!("done"))]);
    }

    #[test]
    fn reject_passes_fixed_message_and_detail() {
        let (seen, callback) = recorder();
        let mut modals = ModalController::default();
        modals.push(ModalRequest::new("a").on_complete(callback)).unwrap();

        modals.reject(json!({ "reason": "cancelled" }));
        modals.settle();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let Outcome::Rejected(rejection) = &seen[0] else {
            panic!("expected a rejection, got {:?}", seen[0]);
        };
        assert_eq!(rejection.message, "rejected");
        assert_eq!(rejection.detail, json!({ "reason": "cancelled" }));
        assert!(modals.state().is_empty());
    }

    #[test]
    fn later_callback_replaces_earlier() {
        let (first_seen, first) = recorder();
        let (second_seen, second) = recorder();
        let mut modals = ModalController::default();
        modals.push(ModalRequest::new("a").on_complete(first)).unwrap();
        modals.push(ModalRequest::new("b").on_complete(second)).unwrap();

        modals.resolve(json!(1));

        assert!(first_seen.lock().unwrap().is_empty());
        assert_eq!(second_seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn without_animation_commits_apply_immediately() {
        let config = Config {
            animate: false,
            ..Config::default()
        };
        let mut modals = ModalController::new(&config);
        modals.push(ModalRequest::new("a")).unwrap();
        modals.push(ModalRequest::new("b")).unwrap();

        assert_eq!(modals.pending(), 0);
        assert_eq!(modals.state().current_index(), Some(1));

        modals.close();
        assert!(modals.state().is_empty());
    }

    #[test]
    fn pending_close_still_clears_a_racing_push() {
        let mut modals = ModalController::default();
        modals.push(ModalRequest::new("a")).unwrap();
        modals.settle();

        modals.close();
        modals.push(ModalRequest::new("b")).unwrap();
        assert_eq!(modals.state().transition(), Transition::Forward);

        modals.settle();
        assert!(modals.state().is_empty());
        assert_eq!(modals.state().current_index(), None);
    }
}
