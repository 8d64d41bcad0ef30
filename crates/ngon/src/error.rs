//! Error taxonomy for polygon and family construction/access.
//!
//! Exhaustion of a traversal is deliberately *not* represented here:
//! `next`/`consume` signal end-of-sequence with `None`, so callers branch
//! on ordinary termination without error-style control flow.

use thiserror::Error;

/// Errors raised by [`Polygon`](crate::Polygon) and
/// [`PolygonSequence`](crate::PolygonSequence) construction and access.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum PolygonError {
    /// A regular polygon is only defined from the triangle upward.
    #[error("regular polygon needs at least 3 edges, got {got}")]
    TooFewEdges { got: usize },

    /// The circumradius is a length and must be a positive finite number.
    #[error("circumradius must be finite and positive, got {got}")]
    InvalidRadius { got: f64 },

    /// Indexed access outside the currently owned collection.
    #[error("index {index} out of range for {len} owned polygons")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Crate-wide result alias.
pub type PolygonResult<T> = Result<T, PolygonError>;
