//! Runtime error taxonomy for the slider engine.
//!
//! Degenerate configuration is never an error (it is sanitised into a
//! renderable state) and no-op requests are reported through
//! [`crate::slider::KnotUpdate::Unchanged`]. What remains here are caller
//! bugs and the opt-in strict discrete lookup.

use crate::value::SliderValue;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SliderError {
    /// A knot index outside the collection was used.
    #[error("knot index {index} out of range (collection holds {len} knots)")]
    KnotOutOfRange { index: usize, len: usize },
    /// An angle mapped onto a slot the discrete value list does not have.
    #[error("discrete slot {index} out of range (domain holds {len} values)")]
    DiscreteIndexOutOfRange { index: i64, len: usize },
    /// A value that is not part of the discrete domain, under strict lookup.
    #[error("value {0} is not part of the discrete domain")]
    UnknownValue(SliderValue),
}
