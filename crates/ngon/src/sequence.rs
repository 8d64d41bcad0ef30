//! Families of regular polygons sharing one circumscribing circle.
//!
//! Purpose
//! - Own the full family of polygons from the triangle up to a chosen
//!   edge count, all inscribed in the same circle, and expose three ways
//!   to reach them: a one-pass cursor, bounds-checked indexing, and
//!   destructive consumption from the front.
//!
//! Why this design
//! - The family is materialized eagerly: construction is the single
//!   validation point, so every access afterwards hands out polygons
//!   that are known-good.
//! - Exhaustion is not an error. The cursor and `consume` report it as
//!   `None`; only out-of-range indexing is a `PolygonError`.
//!
//! Conventions
//! - All three access paths address the *current* backing store:
//!   consuming the front shifts what index 0 and the cursor position
//!   refer to.
//!
//! Code cross-refs: `Polygon`, `PolygonError`

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use crate::error::{PolygonError, PolygonResult};
use crate::polygon::{validate_edges, Polygon, MIN_EDGES};

/// Ascending family of regular polygons with a shared circumradius.
///
/// Invariants:
/// - The backing store holds polygons with strictly ascending edge
///   counts; `consume` only ever removes from the front, so the suffix
///   stays ascending.
/// - `cursor <= polygons.len()` is not maintained: after `consume` the
///   cursor may point past the shrunken store, which reads as exhausted.
#[derive(Clone, Debug)]
pub struct PolygonSequence {
    max_edges: usize,
    circumradius: f64,
    polygons: VecDeque<Polygon>,
    cursor: usize,
}

impl PolygonSequence {
    /// Build the family for every edge count in `MIN_EDGES..=max_edges`.
    ///
    /// `max_edges` below the triangle fails like a single polygon would;
    /// the radius is validated once by the first member and shared by
    /// all of them. `max_edges == MIN_EDGES` yields a one-member family.
    pub fn new(max_edges: usize, circumradius: f64) -> PolygonResult<Self> {
        validate_edges(max_edges)?;
        let polygons = (MIN_EDGES..=max_edges)
            .map(|edges| Polygon::new(edges, circumradius))
            .collect::<PolygonResult<VecDeque<_>>>()?;
        Ok(Self {
            max_edges,
            circumradius,
            polygons,
            cursor: 0,
        })
    }

    /// Largest edge count the family was built with.
    #[inline]
    pub fn max_edge_count(&self) -> usize {
        self.max_edges
    }

    /// Circumradius shared by every member.
    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Number of polygons currently owned; shrinks under `consume`.
    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Copy of the polygon at `index` in the current store, front first.
    ///
    /// Unlike cursor exhaustion, a bad index is a real
    /// [`PolygonError::IndexOutOfRange`]: the caller named a position
    /// that does not exist.
    pub fn get(&self, index: usize) -> PolygonResult<Polygon> {
        self.polygons
            .get(index)
            .copied()
            .ok_or(PolygonError::IndexOutOfRange {
                index,
                len: self.polygons.len(),
            })
    }

    /// Remove and return the front polygon (the fewest-edged one), or
    /// `None` once the store is empty.
    ///
    /// The cursor is left untouched, but it now addresses a store whose
    /// positions all shifted down by one.
    pub fn consume(&mut self) -> Option<Polygon> {
        self.polygons.pop_front()
    }

    /// Member with the highest area-to-perimeter ratio, or `None` when
    /// everything has been consumed.
    ///
    /// Scans the current store; exact ties keep the first (fewest-edged)
    /// contender. Reads nothing from the cursor and moves nothing.
    pub fn max_efficiency_polygon(&self) -> Option<Polygon> {
        let mut best: Option<Polygon> = None;
        for &polygon in &self.polygons {
            if best.is_none_or(|b| polygon.efficiency() > b.efficiency()) {
                best = Some(polygon);
            }
        }
        best
    }
}

impl Iterator for PolygonSequence {
    type Item = Polygon;

    /// Hand out the polygon under the cursor and advance; `None` once
    /// the cursor runs off the current store, forever after.
    fn next(&mut self) -> Option<Self::Item> {
        let polygon = *self.polygons.get(self.cursor)?;
        self.cursor += 1;
        Some(polygon)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.polygons.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

/// The cursor only advances and the store only shrinks, so a drained
/// sequence keeps reporting `None`.
impl FusedIterator for PolygonSequence {}

impl fmt::Display for PolygonSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PolygonSequence(edges={}..={}, circumradius={})",
            MIN_EDGES, self.max_edges, self.circumradius
        )
    }
}
