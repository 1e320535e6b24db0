//! Values in the slider's domain: plain numbers or entries of a discrete list.

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value in the slider domain.
///
/// Continuous sliders only ever produce `Number`. Discrete sliders produce
/// whatever entry of the configured `data` list the knot sits on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliderValue {
    Number(f64),
    Text(String),
}

impl SliderValue {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl From<f64> for SliderValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for SliderValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// What `value_to_angle` does with a value that is not in the discrete list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscreteLookup {
    /// Map the unknown value onto the first slot.
    #[default]
    Fallback,
    /// Report [`crate::error::SliderError::UnknownValue`].
    Reject,
}
