//! Session deferred and the awaitable handle it backs.
//!
//! A [`Deferred`] is the resolver half of one modal session: it is created
//! lazily on the first push into an empty stack, settled at most once by
//! `resolve`/`reject`, and dropped when the session closes. Every caller that
//! asked to await the session holds a clone of the same [`SessionHandle`].

use crate::domain::{Outcome, SessionError};
use futures_channel::oneshot;
use futures_util::future::{FutureExt, Shared};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Completion handler saved at push time and invoked once at resolution.
pub type Callback = Box<dyn FnOnce(Outcome) + Send + 'static>;

/// Resolver for the single outcome of a modal session.
pub struct Deferred {
    /// Taken on settle so a session resolves or rejects at most once.
    sender: Option<oneshot::Sender<Outcome>>,
    shared: Shared<oneshot::Receiver<Outcome>>,
}

impl Deferred {
    /// Creates an unsettled deferred.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = oneshot::channel();
        Self {
            sender: Some(sender),
            shared: receiver.shared(),
        }
    }

    /// Returns a handle that completes when this deferred settles.
    ///
    /// All handles from the same deferred observe the same outcome.
    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            inner: self.shared.clone(),
        }
    }

    /// Resolves the session with `data`.
    ///
    /// Returns `false` if the deferred was already settled.
    pub fn resolve(&mut self, data: Value) -> bool {
        self.settle(Outcome::resolved(data))
    }

    /// Rejects the session with `err`.
    ///
    /// Returns `false` if the deferred was already settled.
    pub fn reject(&mut self, err: Value) -> bool {
        self.settle(Outcome::rejected(err))
    }

    /// Returns `true` once `resolve` or `reject` has been called.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.sender.is_none()
    }

    fn settle(&mut self, outcome: Outcome) -> bool {
        let Some(sender) = self.sender.take() else {
            tracing::debug!("session deferred already settled, ignoring");
            return false;
        };
        // The receiver lives inside `shared`, so the send cannot fail while
        // `self` is alive.
        sender.send(outcome).is_ok()
    }
}

impl Default for Deferred {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("settled", &self.is_settled())
            .finish_non_exhaustive()
    }
}

/// Awaitable outcome of a modal session.
///
/// Yields `Ok(data)` when the session is resolved,
/// `Err(SessionError::Rejected(err))` when it is rejected and
/// `Err(SessionError::Dismissed)` when the session closes without either.
///
/// # Example
///
/// ```rust
/// use modal_stack::{Config, ModalController, ModalRequest};
/// use serde_json::json;
///
/// let mut modals = ModalController::new(&Config::default());
/// let handle = modals
///     .push(ModalRequest::new("confirm").await_result())?
///     .expect("await_result returns a handle");
///
/// modals.resolve(json!("done"));
/// assert_eq!(futures::executor::block_on(handle), Ok(json!("done")));
/// # Ok::<(), modal_stack::ModalStackError>(())
/// ```
#[derive(Clone)]
#[must_use = "a session handle does nothing unless awaited"]
pub struct SessionHandle {
    inner: Shared<oneshot::Receiver<Outcome>>,
}

impl Future for SessionHandle {
    type Output = Result<Value, SessionError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner).poll(cx).map(|received| match received {
            Ok(Outcome::Resolved(data)) => Ok(data),
            Ok(Outcome::Rejected(rejection)) => Err(SessionError::Rejected(rejection.detail)),
            Err(oneshot::Canceled) => Err(SessionError::Dismissed),
        })
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn handles_share_one_outcome() {
        let mut deferred = Deferred::new();
        let first = deferred.handle();
        let second = deferred.handle();

        assert!(deferred.resolve(json!({ "ok": true })));

        assert_eq!(block_on(first), Ok(json!({ "ok": true })));
        assert_eq!(block_on(second), Ok(json!({ "ok": true })));
    }

    #[test]
    fn settles_only_once() {
        let mut deferred = Deferred::new();
        let handle = deferred.handle();

        assert!(deferred.reject(json!("first")));
        assert!(deferred.is_settled());
        assert!(!deferred.resolve(json!("second")));

        assert_eq!(block_on(handle), Err(SessionError::Rejected(json!("first"))));
    }

    #[test]
    fn dropping_unsettled_deferred_dismisses() {
        let deferred = Deferred::new();
        let handle = deferred.handle();
        drop(deferred);

        assert_eq!(block_on(handle), Err(SessionError::Dismissed));
    }

    #[test]
    fn outcome_survives_deferred_drop() {
        let mut deferred = Deferred::new();
        let handle = deferred.handle();
        deferred.resolve(json!(42));
        drop(deferred);

        assert_eq!(block_on(handle), Ok(json!(42)));
    }
}
