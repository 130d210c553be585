//! Error type for rectangle construction.

use thiserror::Error;

/// Errors raised by the geometry layer.
///
/// Only rectangle construction can fail. Every other operation assumes its
/// inputs already satisfy the rectangle invariant.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// A requested side length was not strictly positive (or was NaN).
    #[error("improper distance: degenerate side length {length} on axis {axis}")]
    DegenerateRectangle { axis: usize, length: f64 },
}

impl GeomError {
    /// The side length that caused the rejection.
    pub fn offending_length(&self) -> f64 {
        match self {
            Self::DegenerateRectangle { length, .. } => *length,
        }
    }

    /// The axis on which the rejected length was found.
    pub fn axis(&self) -> usize {
        match self {
            Self::DegenerateRectangle { axis, .. } => *axis,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeomError>;
