//! # Point Classification
//!
//! Winding-number point-in-polygon test. Points on the boundary count as
//! inside. Crossings use the half-open convention (`v1.y <= p.y < v2.y` for
//! upward edges, `v2.y <= p.y < v1.y` for downward ones) so a ray through a
//! shared vertex is counted once.


use config::constants::ON_EDGE_EPSILON;
use glam::DVec2;
use rayon::prelude::*;

use crate::geometry::{is_left, within_range};

/// Returns true if `point` lies inside or on the boundary of `polygon`.
///
/// The polygon is closed implicitly (last vertex connects to the first) and
/// may be in either orientation.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use gridit::point_in_polygon;
///
/// let square = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ];
/// assert!(point_in_polygon(DVec2::new(0.5, 0.5), &square));
/// assert!(point_in_polygon(DVec2::new(1.0, 0.5), &square));
/// assert!(!point_in_polygon(DVec2::new(1.5, 0.5), &square));
/// ```
pub fn point_in_polygon(point: DVec2, polygon: &[DVec2]) -> bool {
    let n = polygon.len();
    let mut winding = 0i32;

    for i in 0..n {
        let v1 = polygon[i];
        let v2 = polygon[(i + 1) % n];
        let side = is_left(v1, v2, point);

        if side.abs() < ON_EDGE_EPSILON
            && within_range(point.x, v1.x, v2.x, ON_EDGE_EPSILON)
            && within_range(point.y, v1.y, v2.y, ON_EDGE_EPSILON)
        {
            return true;
        }

        if v1.y <= point.y {
            if v2.y > point.y && side > 0.0 {
                winding += 1;
            }
        } else if v2.y <= point.y && side < 0.0 {
            winding -= 1;
        }
    }

    winding != 0
}

/// Classifies many points against the same polygon.
///
/// Each point is independent, so the work is spread across the rayon pool.
/// The result is in input order.
pub fn classify_points(points: &[DVec2], polygon: &[DVec2]) -> Vec<bool> {
    points
        .par_iter()
        .map(|&p| point_in_polygon(p, polygon))
        .collect()
}
