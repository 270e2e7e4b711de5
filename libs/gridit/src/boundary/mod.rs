//! # Boundary Loop Extraction
//!
//! Turns an unordered set of boundary edges into one ordered, closed loop of
//! 2D points in the working frame.
//!
//! ## Algorithm
//!
//! 1. Store vertices and edges in flat arenas, referenced by index
//! 2. Map every vertex id to its incident boundary edges (each edge is listed
//!    under both endpoints)
//! 3. Starting at the first edge's first vertex, follow the first unvisited
//!    incident edge until the start vertex comes round again
//!
//! ## Limitations
//!
//! Only the first loop is returned; holes and other disjoint loops are
//! ignored. At a vertex with more than two boundary edges the walk takes the
//! first unvisited edge, which may not be the geometrically correct one. Both
//! cases are logged, neither is an error.


use std::collections::HashMap;

use config::constants::{DEGENERATE_EPSILON, MIN_BOUNDARY_POINTS};
use glam::{DMat4, DVec2};
use tracing::{debug, warn};

use crate::error::{GridError, GridResult};
use crate::geometry::Bounds2;
use crate::source::{RawBoundaryEdge, SourceVertex};

/// An ordered, implicitly closed polyline (last point connects to the first).
///
/// Consecutive points are distinct.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryLoop {
    points: Vec<DVec2>,
}

impl BoundaryLoop {
    /// Creates a loop from ordered points, collapsing consecutive duplicates
    /// (including a repeated closing point).
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use gridit::BoundaryLoop;
    ///
    /// let boundary = BoundaryLoop::new(vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(1.0, 0.0),
    ///     DVec2::new(1.0, 0.0),
    ///     DVec2::new(0.0, 1.0),
    ///     DVec2::new(0.0, 0.0),
    /// ]);
    /// assert_eq!(boundary.len(), 3);
    /// ```
    pub fn new(points: Vec<DVec2>) -> Self {
        let mut deduped: Vec<DVec2> = Vec::with_capacity(points.len());
        for p in points {
            if deduped
                .last()
                .map_or(true, |last| last.distance(p) >= DEGENERATE_EPSILON)
            {
                deduped.push(p);
            }
        }
        while deduped.len() > 1 {
            let (first, last) = (deduped[0], deduped[deduped.len() - 1]);
            if first.distance(last) >= DEGENERATE_EPSILON {
                break;
            }
            deduped.pop();
        }
        Self { points: deduped }
    }

    /// The ordered points.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the loop has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the loop can enclose an area (at least 3 points).
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.points.len() >= MIN_BOUNDARY_POINTS
    }

    /// Bounding box of the loop.
    pub fn bounds(&self) -> Option<Bounds2> {
        Bounds2::from_points(&self.points)
    }

    /// Segments `(index, start, end)` including the closing segment.
    pub fn segments(&self) -> impl Iterator<Item = (usize, DVec2, DVec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (i, self.points[i], self.points[(i + 1) % n]))
    }
}

/// Extracts the first ordered boundary loop, projected to world X/Y.
///
/// Returns an empty loop when there are no boundary edges.
///
/// # Errors
///
/// Returns [`GridError::InvalidTopology`] if an edge references a vertex id
/// that is not in `vertices`.
///
/// # Example
///
/// ```rust
/// use glam::{DMat4, DVec3};
/// use gridit::{extract_boundary_loop, RawBoundaryEdge, SourceVertex};
///
/// let vertices = vec![
///     SourceVertex::new(10, DVec3::new(0.0, 0.0, 0.0)),
///     SourceVertex::new(11, DVec3::new(1.0, 0.0, 0.0)),
///     SourceVertex::new(12, DVec3::new(0.0, 1.0, 0.0)),
/// ];
/// let edges = vec![
///     RawBoundaryEdge::new(12, 10),
///     RawBoundaryEdge::new(10, 11),
///     RawBoundaryEdge::new(11, 12),
/// ];
/// let boundary = extract_boundary_loop(&vertices, &edges, &DMat4::IDENTITY).unwrap();
/// assert_eq!(boundary.len(), 3);
/// ```
pub fn extract_boundary_loop(
    vertices: &[SourceVertex],
    edges: &[RawBoundaryEdge],
    transform: &DMat4,
) -> GridResult<BoundaryLoop> {
    let Some(start_edge) = edges.first() else {
        return Ok(BoundaryLoop::default());
    };
    debug!(boundary_edges = edges.len(), "Extracting boundary loop");

    let index_of: HashMap<u32, usize> = vertices
        .iter()
        .enumerate()
        .map(|(index, v)| (v.id, index))
        .collect();

    let mut incident: HashMap<u32, Vec<usize>> = HashMap::new();
    for (edge_index, edge) in edges.iter().enumerate() {
        for id in [edge.a, edge.b] {
            if !index_of.contains_key(&id) {
                return Err(GridError::invalid_topology(format!(
                    "boundary edge {edge_index} references unknown vertex {id}"
                )));
            }
            incident.entry(id).or_default().push(edge_index);
        }
    }

    let branching = incident.values().filter(|e| e.len() > 2).count();
    if branching > 0 {
        warn!(
            vertices = branching,
            "Boundary has vertices with more than two boundary edges; loop may be incorrect"
        );
    }

    let start = start_edge.a;
    let mut loop_ids = vec![start];
    let mut visited = vec![false; edges.len()];
    let mut current = start;
    let mut closed = false;

    loop {
        let next_edge = incident
            .get(&current)
            .and_then(|candidates| candidates.iter().copied().find(|&e| !visited[e]));
        let Some(edge_index) = next_edge else {
            break;
        };
        visited[edge_index] = true;
        current = edges[edge_index].other(current);
        if current == start {
            closed = true;
            break;
        }
        loop_ids.push(current);
    }

    if !closed {
        warn!(
            start,
            points = loop_ids.len(),
            "Boundary loop is not closed; using the partial chain"
        );
    }

    let ignored = visited.iter().filter(|v| !**v).count();
    if ignored > 0 {
        debug!(ignored_edges = ignored, "Boundary edges outside the first loop were ignored");
    }

    let points = loop_ids
        .iter()
        .filter_map(|id| index_of.get(id))
        .map(|&index| {
            let world = transform.transform_point3(vertices[index].position);
            DVec2::new(world.x, world.y)
        })
        .collect();

    Ok(BoundaryLoop::new(points))
}
