//! # Face Fill
//!
//! Turns a planar edge network into faces. The builder only produces
//! vertices and edges; any [`EdgeNetFill`] implementation can close them.
//!
//! ## PlanarFaceFill
//!
//! 1. Split every edge into two twin half-edges (`2k: a → b`, `2k + 1: b → a`)
//! 2. Sort each vertex's outgoing half-edges counter-clockwise by angle
//! 3. Walk faces: after arriving at a vertex, leave along the outgoing
//!    half-edge that is next clockwise from the twin. Faces lie on the left.
//! 4. Strip `a b a` spikes left by dangling edges, then drop faces that
//!    repeat a vertex or have non-positive area (the unbounded outer face
//!    is traversed clockwise)
//! 5. Faces above `max_sides` are ear-clipped


use std::collections::HashSet;

use config::constants::{DEGENERATE_EPSILON, MIN_FACE_SIDES};
use glam::DVec2;
use robust::{orient2d, Coord};
use tracing::{debug, warn};

use crate::error::{GridError, GridResult};
use crate::geometry::signed_area;

/// Faces produced by a fill, plus any edges it had to add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillOutput {
    /// Counter-clockwise vertex index polygons
    pub faces: Vec<Vec<u32>>,
    /// Edges created while splitting faces (e.g. triangulation diagonals)
    pub extra_edges: Vec<[u32; 2]>,
}

/// Capability that fills a planar edge network with faces of at most
/// `max_sides` sides where possible.
pub trait EdgeNetFill {
    /// Fills the network given by `positions` and `edges`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::FillFailed`] if the network cannot be filled.
    fn fill(
        &self,
        positions: &[DVec2],
        edges: &[[u32; 2]],
        max_sides: usize,
    ) -> GridResult<FillOutput>;
}

/// Default fill: traces the bounded faces of the planar embedding.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use gridit::{EdgeNetFill, PlanarFaceFill};
///
/// let square = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ];
/// let edges = [[0, 1], [1, 2], [2, 3], [3, 0]];
/// let out = PlanarFaceFill.fill(&square, &edges, 4).unwrap();
/// assert_eq!(out.faces, vec![vec![0, 1, 2, 3]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarFaceFill;

impl EdgeNetFill for PlanarFaceFill {
    fn fill(
        &self,
        positions: &[DVec2],
        edges: &[[u32; 2]],
        max_sides: usize,
    ) -> GridResult<FillOutput> {
        if max_sides < MIN_FACE_SIDES {
            return Err(GridError::fill_failed(format!(
                "faces need at least {MIN_FACE_SIDES} sides, got {max_sides}"
            )));
        }

        let graph = HalfEdgeGraph::new(positions, edges)?;
        let mut output = FillOutput::default();
        let mut dropped = 0usize;

        for face in graph.trace_faces()? {
            let face = strip_spikes(face);
            if !is_simple_face(&face, positions) {
                dropped += 1;
                continue;
            }
            if face.len() <= max_sides {
                output.faces.push(face);
            } else {
                ear_clip(&face, positions, &mut output);
            }
        }

        debug!(
            faces = output.faces.len(),
            extra_edges = output.extra_edges.len(),
            dropped,
            "Filled edge network"
        );
        Ok(output)
    }
}

// =============================================================================
// HALF-EDGE GRAPH
// =============================================================================

struct HalfEdgeGraph {
    /// Origin vertex of each half-edge
    origin: Vec<u32>,
    /// Outgoing half-edges per vertex, counter-clockwise
    rings: Vec<Vec<usize>>,
    /// Position of each half-edge in its origin's ring
    slot: Vec<usize>,
}

impl HalfEdgeGraph {
    fn new(positions: &[DVec2], edges: &[[u32; 2]]) -> GridResult<Self> {
        let vertex_count = positions.len();
        let mut seen = HashSet::new();
        let mut origin = Vec::with_capacity(edges.len() * 2);

        for &[a, b] in edges {
            if a as usize >= vertex_count || b as usize >= vertex_count {
                return Err(GridError::fill_failed(format!(
                    "edge ({a}, {b}) references a vertex outside 0..{vertex_count}"
                )));
            }
            if a == b || !seen.insert((a.min(b), a.max(b))) {
                continue;
            }
            origin.push(a);
            origin.push(b);
        }

        let mut rings = vec![Vec::new(); vertex_count];
        for (he, &v) in origin.iter().enumerate() {
            rings[v as usize].push(he);
        }

        let angle = |he: usize| {
            let d = positions[origin[he ^ 1] as usize] - positions[origin[he] as usize];
            d.y.atan2(d.x)
        };
        let mut slot = vec![0; origin.len()];
        for ring in &mut rings {
            ring.sort_by(|&a, &b| angle(a).total_cmp(&angle(b)).then(a.cmp(&b)));
            for (i, &he) in ring.iter().enumerate() {
                slot[he] = i;
            }
        }

        Ok(Self {
            origin,
            rings,
            slot,
        })
    }

    /// Half-edge following `he` around its left face.
    #[inline]
    fn next(&self, he: usize) -> usize {
        let twin = he ^ 1;
        let ring = &self.rings[self.origin[twin] as usize];
        ring[(self.slot[twin] + ring.len() - 1) % ring.len()]
    }

    /// Every face cycle as its sequence of vertices, in half-edge order.
    fn trace_faces(&self) -> GridResult<Vec<Vec<u32>>> {
        let total = self.origin.len();
        let mut visited = vec![false; total];
        let mut faces = Vec::new();

        for start in 0..total {
            if visited[start] {
                continue;
            }
            let mut face = Vec::new();
            let mut he = start;
            loop {
                if visited[he] || face.len() > total {
                    return Err(GridError::fill_failed(format!(
                        "face walk from half-edge {start} did not close"
                    )));
                }
                visited[he] = true;
                face.push(self.origin[he]);
                he = self.next(he);
                if he == start {
                    break;
                }
            }
            faces.push(face);
        }
        Ok(faces)
    }
}

// =============================================================================
// FACE CLEANUP
// =============================================================================

/// Removes `a b a` back-and-forth walks along dangling edges.
fn strip_spikes(mut face: Vec<u32>) -> Vec<u32> {
    loop {
        let n = face.len();
        if n < 3 {
            return face;
        }
        let Some(i) = (0..n).find(|&i| face[(i + n - 1) % n] == face[(i + 1) % n]) else {
            return face;
        };
        // Drop the spike tip and the copy of its base just before it
        let before = (i + n - 1) % n;
        face.remove(i.max(before));
        face.remove(i.min(before));
    }
}

fn is_simple_face(face: &[u32], positions: &[DVec2]) -> bool {
    if face.len() < MIN_FACE_SIDES {
        return false;
    }
    let mut seen = HashSet::with_capacity(face.len());
    if !face.iter().all(|v| seen.insert(*v)) {
        return false;
    }
    let polygon: Vec<DVec2> = face.iter().map(|&v| positions[v as usize]).collect();
    signed_area(&polygon) > DEGENERATE_EPSILON
}

// =============================================================================
// EAR CLIPPING
// =============================================================================

#[inline]
fn coord(p: DVec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

#[inline]
fn orient(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    orient2d(coord(a), coord(b), coord(c))
}

/// True if `p` lies inside or on the counter-clockwise triangle `a b c`.
fn triangle_contains(a: DVec2, b: DVec2, c: DVec2, p: DVec2) -> bool {
    orient(a, b, p) >= 0.0 && orient(b, c, p) >= 0.0 && orient(c, a, p) >= 0.0
}

fn is_ear(remaining: &[u32], i: usize, positions: &[DVec2]) -> bool {
    let n = remaining.len();
    let (prev, curr, next) = (
        remaining[(i + n - 1) % n],
        remaining[i],
        remaining[(i + 1) % n],
    );
    let (a, b, c) = (
        positions[prev as usize],
        positions[curr as usize],
        positions[next as usize],
    );
    if orient(a, b, c) <= 0.0 {
        return false;
    }
    remaining
        .iter()
        .filter(|&&v| v != prev && v != curr && v != next)
        .all(|&v| !triangle_contains(a, b, c, positions[v as usize]))
}

/// Splits a counter-clockwise face into triangles, recording the diagonals.
fn ear_clip(face: &[u32], positions: &[DVec2], output: &mut FillOutput) {
    let mut remaining = face.to_vec();

    while remaining.len() > 3 {
        let n = remaining.len();
        let Some(i) = (0..n).find(|&i| is_ear(&remaining, i, positions)) else {
            warn!(
                remaining = n,
                "Ear clipping stuck, using fan triangulation"
            );
            let center = remaining[0];
            for k in 1..n - 1 {
                output.faces.push(vec![center, remaining[k], remaining[k + 1]]);
                if k > 1 {
                    output.extra_edges.push([center, remaining[k]]);
                }
            }
            return;
        };

        let prev = remaining[(i + n - 1) % n];
        let next = remaining[(i + 1) % n];
        output.faces.push(vec![prev, remaining[i], next]);
        output.extra_edges.push([prev, next]);
        remaining.remove(i);
    }

    output.faces.push(remaining);
}
