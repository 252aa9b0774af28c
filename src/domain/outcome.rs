//! Completion outcomes delivered to modal session handlers.
//!
//! A session ends in exactly one of two ways: it is resolved with data or
//! rejected with a detail value. [`Outcome`] carries that distinction as a
//! tagged type instead of an error-first `(error, data)` pair.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed message attached to every rejection.
pub const REJECTED_MESSAGE: &str = "rejected";

/// Failure payload of a rejected session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// Always [`REJECTED_MESSAGE`].
    pub message: String,
    /// Caller-supplied detail passed to `reject`.
    pub detail: Value,
}

impl Rejection {
    /// Creates a rejection carrying `detail`.
    #[must_use]
    pub fn new(detail: Value) -> Self {
        Self {
            message: REJECTED_MESSAGE.to_string(),
            detail,
        }
    }
}

/// Result of a modal session, passed to the completion handler.
///
/// # Examples
///
/// ```
/// use modal_stack::Outcome;
/// use serde_json::json;
///
/// let outcome = Outcome::resolved(json!("done"));
/// assert!(outcome.is_resolved());
/// assert_eq!(outcome.into_result(), Ok(json!("done")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// The session was resolved with data.
    Resolved(Value),
    /// The session was rejected.
    Rejected(Rejection),
}

impl Outcome {
    /// Creates a successful outcome.
    #[must_use]
    pub const fn resolved(data: Value) -> Self {
        Self::Resolved(data)
    }

    /// Creates a failed outcome with the fixed rejection message.
    #[must_use]
    pub fn rejected(detail: Value) -> Self {
        Self::Rejected(Rejection::new(detail))
    }

    /// Returns `true` for [`Outcome::Resolved`].
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Converts into a standard `Result`, keeping only the rejection detail.
    pub fn into_result(self) -> Result<Value, Value> {
        match self {
            Self::Resolved(data) => Ok(data),
            Self::Rejected(rejection) => Err(rejection.detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejection_carries_fixed_message() {
        let Outcome::Rejected(rejection) = Outcome::rejected(json!({ "code": 7 })) else {
            panic!("expected rejection");
        };
        assert_eq!(rejection.message, "rejected");
        assert_eq!(rejection.detail, json!({ "code": 7 }));
    }

    #[test]
    fn outcome_is_tagged_on_the_wire() {
        let encoded = serde_json::to_value(Outcome::rejected(json!("nope"))).unwrap();
        assert_eq!(
            encoded,
            json!({ "status": "rejected", "value": { "message": "rejected", "detail": "nope" } })
        );
    }

    #[test]
    fn into_result_splits_variants() {
        assert_eq!(Outcome::resolved(json!(1)).into_result(), Ok(json!(1)));
        assert_eq!(Outcome::rejected(json!(2)).into_result(), Err(json!(2)));
    }
}
