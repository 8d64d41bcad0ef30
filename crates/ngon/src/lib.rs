//! Regular polygon metrics and inscribed-polygon families.
//!
//! Purpose
//! - `polygon`: a single regular convex polygon inscribed in a circle,
//!   with its derived metrics (interior angle, edge length, apothem,
//!   area, perimeter, vertex positions).
//! - `sequence`: the family of such polygons from the triangle up to a
//!   chosen edge count, sharing one circle, with cursor, indexed, and
//!   destructive access.
//! - `error`: the crate-wide error taxonomy and result alias.
//!
//! Conventions
//! - Invalid parameters surface as `PolygonError` at construction or
//!   mutation time; running out of polygons is `None`, never an error.
//! - Angles are degrees, lengths share the circumradius' unit.

pub mod error;
pub mod polygon;
pub mod sequence;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{PolygonError, PolygonResult};
pub use polygon::{Polygon, MIN_EDGES};
pub use sequence::PolygonSequence;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{PolygonError, PolygonResult};
    pub use crate::polygon::{Polygon, MIN_EDGES};
    pub use crate::sequence::PolygonSequence;
}

#[cfg(test)]
mod tests;
