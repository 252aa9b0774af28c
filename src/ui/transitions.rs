//! Transition class names exposed to the rendering layer.
//!
//! The controller only decides *which* [`Transition`] applies next; the host
//! maps it to the class (CSS class, animation preset, ...) it animates with.
//! Names default to the canonical transition names and can be overridden from
//! TOML.
//!
//! # TOML Format
//!
//! ```toml
//! scale = "modal-pop"
//! forward = "slide-left"
//! backward = "slide-right"
//! ```
//!
//! Missing keys keep their defaults.

use crate::domain::Transition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Class names applied for each transition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransitionNames {
    /// Applied when the stack opens or closes.
    pub scale: String,
    /// Applied when moving to a later modal.
    pub forward: String,
    /// Applied when moving to an earlier modal.
    pub backward: String,
}

impl Default for TransitionNames {
    fn default() -> Self {
        Self {
            scale: Transition::Scale.as_str().to_string(),
            forward: Transition::Forward.as_str().to_string(),
            backward: Transition::Backward.as_str().to_string(),
        }
    }
}

impl TransitionNames {
    /// Returns the class name for `transition`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modal_stack::{Transition, TransitionNames};
    ///
    /// let names = TransitionNames::default();
    /// assert_eq!(names.class_for(Transition::Backward), "backward");
    /// ```
    #[must_use]
    pub fn class_for(&self, transition: Transition) -> &str {
        match transition {
            Transition::Scale => &self.scale,
            Transition::Forward => &self.forward,
            Transition::Backward => &self.backward,
        }
    }

    /// Loads class names from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}
