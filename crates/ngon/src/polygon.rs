//! Regular convex polygons inscribed in a circle.
//!
//! Purpose
//! - Model an n-sided regular polygon by the two scalars that determine it
//!   (edge count, circumradius) and derive every other metric on demand.
//!
//! Conventions
//! - Derived values are recomputed from the stored fields on every read;
//!   nothing is cached, so a mutated polygon is always self-consistent.
//! - The interior angle is reported in degrees; all lengths share the
//!   circumradius' unit.
//!
//! Code cross-refs: `PolygonSequence`, `PolygonError`

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector2;

use crate::error::{PolygonError, PolygonResult};

/// Smallest admissible edge count (the triangle).
pub const MIN_EDGES: usize = 3;

/// Regular convex polygon inscribed in a circle of known radius.
///
/// Invariants:
/// - `edges >= MIN_EDGES`, `circumradius` finite and positive; enforced at
///   construction and by both setters, never assumed from callers.
/// - No derived state is stored: every metric is a pure function of the
///   two fields at the time of the call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon {
    edges: usize,
    circumradius: f64,
}

impl Polygon {
    /// Construct from edge count and circumradius.
    ///
    /// Fails with [`PolygonError::TooFewEdges`] below the triangle and
    /// with [`PolygonError::InvalidRadius`] for a non-finite or
    /// non-positive radius; the edge count is checked first.
    pub fn new(edges: usize, circumradius: f64) -> PolygonResult<Self> {
        validate_edges(edges)?;
        validate_radius(circumradius)?;
        Ok(Self {
            edges,
            circumradius,
        })
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Vertex count; equal to the edge count for every polygon.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.edges
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Replace the edge count; derived metrics reflect the change on the
    /// next read. The polygon is untouched when validation fails.
    pub fn set_edge_count(&mut self, edges: usize) -> PolygonResult<()> {
        validate_edges(edges)?;
        self.edges = edges;
        Ok(())
    }

    /// Replace the circumradius; derived metrics reflect the change on
    /// the next read. The polygon is untouched when validation fails.
    pub fn set_circumradius(&mut self, circumradius: f64) -> PolygonResult<()> {
        validate_radius(circumradius)?;
        self.circumradius = circumradius;
        Ok(())
    }

    /// Interior angle in degrees: `(n - 2) * 180 / n`.
    ///
    /// Strictly increasing in `n`, approaching (never reaching) 180.
    #[inline]
    pub fn interior_angle_deg(&self) -> f64 {
        let n = self.edges as f64;
        (n - 2.0) * 180.0 / n
    }

    /// Edge length, the chord spanned by one central step: `2 r sin(π/n)`.
    #[inline]
    pub fn edge_length(&self) -> f64 {
        2.0 * self.circumradius * (PI / self.edges as f64).sin()
    }

    /// Apothem, the perpendicular center-to-edge distance: `r cos(π/n)`.
    #[inline]
    pub fn apothem(&self) -> f64 {
        self.circumradius * (PI / self.edges as f64).cos()
    }

    /// Area as the sum of `n` isosceles triangles:
    /// `n * edge_length * apothem / 2`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.edges as f64 * self.edge_length() * self.apothem() / 2.0
    }

    /// Perimeter: `n * edge_length`.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.edges as f64 * self.edge_length()
    }

    /// Area-to-perimeter ratio, a proxy for how closely the polygon
    /// approximates its circumscribing circle.
    ///
    /// For a regular polygon this equals `apothem / 2`, so at fixed
    /// circumradius it grows strictly with the edge count.
    #[inline]
    pub fn efficiency(&self) -> f64 {
        self.area() / self.perimeter()
    }

    /// Vertex positions on the circumscribing circle, counterclockwise,
    /// vertex `k` at angle `2πk/n` (first vertex on the positive x-axis).
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        let angle_step = 2.0 * PI / self.edges as f64;
        (0..self.edges)
            .map(|k| {
                let theta = angle_step * k as f64;
                Vector2::new(
                    self.circumradius * theta.cos(),
                    self.circumradius * theta.sin(),
                )
            })
            .collect()
    }
}

/// The triangle inscribed in a radius-6 circle.
impl Default for Polygon {
    fn default() -> Self {
        Self {
            edges: MIN_EDGES,
            circumradius: 6.0,
        }
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon(edges={}, circumradius={})",
            self.edges, self.circumradius
        )
    }
}

/// Orders by edge count alone; the circumradius never participates.
///
/// Polygons with the same edge count but different circumradii are
/// unordered (`None`): calling them `Equal` would contradict `PartialEq`,
/// and neither is the larger polygon in the edge-count sense.
impl PartialOrd for Polygon {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.edges.cmp(&other.edges) {
            Ordering::Equal => {
                (self.circumradius == other.circumradius).then_some(Ordering::Equal)
            }
            ord => Some(ord),
        }
    }
}

#[inline]
pub(crate) fn validate_edges(edges: usize) -> PolygonResult<()> {
    if edges < MIN_EDGES {
        return Err(PolygonError::TooFewEdges { got: edges });
    }
    Ok(())
}

#[inline]
fn validate_radius(circumradius: f64) -> PolygonResult<()> {
    if !circumradius.is_finite() || circumradius <= 0.0 {
        return Err(PolygonError::InvalidRadius { got: circumradius });
    }
    Ok(())
}
