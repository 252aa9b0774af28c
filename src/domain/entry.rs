//! Modal entry and transition domain types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One modal in the stack.
///
/// Entries are created on push and never mutated afterwards. The rendering
/// layer mounts the component identified by `name` and hands it `params`.
///
/// # Examples
///
/// ```
/// use modal_stack::ModalEntry;
/// use serde_json::json;
///
/// let entry = ModalEntry::new("confirm", json!({ "title": "Delete?" }));
/// assert_eq!(entry.name, "confirm");
/// assert_eq!(entry.params["title"], "Delete?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalEntry {
    /// Identifier of the modal component to render.
    pub name: String,

    /// Arbitrary data passed to the modal component.
    #[serde(default)]
    pub params: Value,
}

impl ModalEntry {
    /// Creates a new modal entry.
    pub fn new(name: impl Into<String>, params: Value) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// Animation applied by the rendering layer on the next visible change.
///
/// `Scale` is the default transition, used when a stack opens from empty and
/// when it closes. `Forward` and `Backward` are used when moving between
/// stacked modals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// Open/close transition.
    #[default]
    Scale,
    /// Moving to a later modal in the stack.
    Forward,
    /// Moving to an earlier modal in the stack.
    Backward,
}

impl Transition {
    /// Chooses the navigation transition for a relative index step.
    ///
    /// Positive steps move forward, everything else moves backward.
    #[must_use]
    pub const fn for_step(n: isize) -> Self {
        if n > 0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// Returns the canonical lowercase name of the transition.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
