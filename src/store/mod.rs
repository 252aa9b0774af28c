//! State store for the modal stack.
//!
//! The store holds [`ModalState`] and the named [`Mutation`]s that change it,
//! along with the session [`Deferred`] whose [`SessionHandle`] callers await.
//!
//! # Modules
//!
//! - [`state`]: State container and getters
//! - [`mutation`]: Named mutations (`PUSH`, `CLOSE`, `CHANGE_INDEX`, ...)
//! - [`deferred`]: Session resolver, awaitable handle and completion callback

pub mod deferred;
pub mod mutation;
pub mod state;

pub use deferred::{Callback, Deferred, SessionHandle};
pub use mutation::Mutation;
pub use state::ModalState;
