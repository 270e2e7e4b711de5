//! # Grid/Boundary Intersection
//!
//! Slices the boundary loop at every vertical and horizontal grid line.
//!
//! ## Algorithm
//!
//! For each boundary segment and each grid line:
//! 1. Skip unless the segment straddles or touches the line
//!    (`(a - line) * (b - line) <= 0` on the line's axis)
//! 2. Non-parallel segment: solve `t`, keep `t ∈ [0, 1]`, and check the other
//!    coordinate against the segment's range (padded by `ON_EDGE_EPSILON`)
//! 3. Segment lying on the line: emit both endpoints (t = 0 and t = 1)
//!
//! Crossings are deduplicated by coordinate quantized to 8 decimals; the
//! first one found wins, even if a later one came from another segment. The
//! survivors are sorted by `(segment, t)`, which is boundary traversal order.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use config::constants::{DEGENERATE_EPSILON, INTERSECTION_KEY_SCALE, ON_EDGE_EPSILON};
use glam::DVec2;
use tracing::debug;

use crate::boundary::BoundaryLoop;
use crate::error::GridResult;
use crate::geometry::{point_key, within_range, PointKey};
use crate::lattice::GridLines;

/// A point where the boundary crosses a grid line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Crossing position (exactly on a grid line)
    pub point: DVec2,
    /// Index of the boundary segment that produced it
    pub segment: usize,
    /// Parameter along the segment, in `[0, 1]`
    pub t: f64,
}

/// Grid line orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    /// `x = const`
    Vertical,
    /// `y = const`
    Horizontal,
}

impl Axis {
    /// Coordinate along which the lines of this family are spaced.
    #[inline]
    fn along(self, p: DVec2) -> f64 {
        match self {
            Axis::Vertical => p.x,
            Axis::Horizontal => p.y,
        }
    }

    /// Coordinate running along each line.
    #[inline]
    fn across(self, p: DVec2) -> f64 {
        match self {
            Axis::Vertical => p.y,
            Axis::Horizontal => p.x,
        }
    }

    #[inline]
    fn point(self, line: f64, other: f64) -> DVec2 {
        match self {
            Axis::Vertical => DVec2::new(line, other),
            Axis::Horizontal => DVec2::new(other, line),
        }
    }
}

/// Deduplicating collector: first writer wins per quantized coordinate.
#[derive(Default)]
struct IntersectionSet {
    seen: HashSet<PointKey>,
    entries: Vec<Intersection>,
}

impl IntersectionSet {
    fn insert(&mut self, point: DVec2, segment: usize, t: f64) {
        if !self.seen.insert(point_key(point, INTERSECTION_KEY_SCALE)) {
            return;
        }
        self.entries.push(Intersection { point, segment, t });
    }

    fn into_sorted(mut self) -> Vec<Intersection> {
        self.entries
            .sort_by(|a, b| a.segment.cmp(&b.segment).then(a.t.total_cmp(&b.t)));
        self.entries
    }
}

/// Computes the ordered crossings of `boundary` with the grid at spacing `step`.
///
/// An empty boundary yields no crossings.
///
/// # Errors
///
/// - [`crate::GridError::InvalidStep`] if `step` is not positive and finite
/// - [`crate::GridError::TooManyGridPoints`] if the grid covering the
///   boundary is too large
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use gridit::{slice_boundary_at_grid, BoundaryLoop};
///
/// let square = BoundaryLoop::new(vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ]);
/// let crossings = slice_boundary_at_grid(&square, 0.5).unwrap();
/// assert_eq!(crossings.len(), 8);
/// assert_eq!(crossings[1].point, DVec2::new(0.5, 0.0));
/// ```
pub fn slice_boundary_at_grid(boundary: &BoundaryLoop, step: f64) -> GridResult<Vec<Intersection>> {
    let Some(bounds) = boundary.bounds() else {
        return Ok(Vec::new());
    };
    let lines = GridLines::covering(&bounds, step)?;

    let mut found = IntersectionSet::default();
    for (segment, p1, p2) in boundary.segments() {
        if p1.distance(p2) < DEGENERATE_EPSILON {
            continue;
        }
        for x in lines.x_lines() {
            slice_segment(&mut found, Axis::Vertical, x, segment, p1, p2);
        }
        for y in lines.y_lines() {
            slice_segment(&mut found, Axis::Horizontal, y, segment, p1, p2);
        }
    }

    let sorted = found.into_sorted();
    debug!(
        intersections = sorted.len(),
        vertical_lines = lines.x_count,
        horizontal_lines = lines.y_count,
        "Sliced boundary at grid lines"
    );
    Ok(sorted)
}

/// Records the crossings of segment `p1 → p2` with one grid line.
fn slice_segment(
    found: &mut IntersectionSet,
    axis: Axis,
    line: f64,
    segment: usize,
    p1: DVec2,
    p2: DVec2,
) {
    let (a, b) = (axis.along(p1), axis.along(p2));
    if (a - line) * (b - line) > 0.0 {
        return;
    }

    if (b - a).abs() > DEGENERATE_EPSILON {
        let t = (line - a) / (b - a);
        if !(0.0..=1.0).contains(&t) {
            return;
        }
        let (c1, c2) = (axis.across(p1), axis.across(p2));
        let other = c1 + t * (c2 - c1);
        if within_range(other, c1, c2, ON_EDGE_EPSILON) {
            found.insert(axis.point(line, other), segment, t);
        }
    } else if (a - line).abs() < ON_EDGE_EPSILON {
        // Segment lies on the line: its endpoints are the crossings
        found.insert(axis.point(line, axis.across(p1)), segment, 0.0);
        found.insert(axis.point(line, axis.across(p2)), segment, 1.0);
    }
}
