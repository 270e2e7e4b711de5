//! # Grid Mesh Builder
//!
//! Builds the stitched edge network for one silhouette and hands it to an
//! [`EdgeNetFill`]:
//!
//! 1. Classify every lattice point covering the boundary's bounding box
//!    (in parallel) and keep those inside or on the boundary
//! 2. Connect retained 4-neighbours with grid edges
//! 3. Add the outer ring as a closed loop
//! 4. Bridge every ring vertex to the nearest retained lattice vertex in the
//!    3×3 block of cells around it
//! 5. Fill faces and fold any extra fill edges back into the mesh


use std::collections::HashMap;

use config::constants::{GridConfig, BRIDGE_SEARCH_RADIUS};
use glam::DVec2;
use tracing::{debug, info};

use crate::boundary::BoundaryLoop;
use crate::classify::classify_points;
use crate::error::{GridError, GridResult};
use crate::fill::EdgeNetFill;
use crate::lattice::{GridLines, LatticeIndex};
use crate::mesh::OutputMesh;

/// Where the outer ring of the grid mesh comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum RingSource<'a> {
    /// The boundary points themselves.
    #[default]
    Boundary,
    /// Replacement ring points in traversal order, typically the boundary's
    /// grid crossings. An empty slice behaves like [`RingSource::Boundary`].
    Substitute(&'a [DVec2]),
    /// The boundary forms the ring; these points are added as free vertices
    /// bridged to the lattice.
    Stitched(&'a [DVec2]),
}

impl<'a> RingSource<'a> {
    /// Splits into the ring points and the extra free points.
    fn resolve(self, boundary: &'a BoundaryLoop) -> (&'a [DVec2], &'a [DVec2]) {
        match self {
            RingSource::Substitute(points) if !points.is_empty() => (points, &[]),
            RingSource::Stitched(extra) => (boundary.points(), extra),
            RingSource::Boundary | RingSource::Substitute(_) => (boundary.points(), &[]),
        }
    }
}

/// Builds grid meshes with a fixed step, side limit and fill.
///
/// # Example
///
/// ```rust
/// use config::constants::GridConfig;
/// use glam::DVec2;
/// use gridit::{slice_boundary_at_grid, BoundaryLoop, GridMeshBuilder, PlanarFaceFill, RingSource};
///
/// let square = BoundaryLoop::new(vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ]);
/// let crossings: Vec<DVec2> = slice_boundary_at_grid(&square, 0.25)
///     .unwrap()
///     .iter()
///     .map(|c| c.point)
///     .collect();
///
/// let config = GridConfig::with_step(0.25).unwrap();
/// let mesh = GridMeshBuilder::new(&config, &PlanarFaceFill)
///     .build(&square, RingSource::Substitute(&crossings))
///     .unwrap();
/// assert_eq!(mesh.vertex_count(), 25);
/// assert_eq!(mesh.face_count(), 16);
/// ```
pub struct GridMeshBuilder<'f, F: EdgeNetFill + ?Sized> {
    step: f64,
    max_sides: usize,
    fill: &'f F,
}

impl<'f, F: EdgeNetFill + ?Sized> GridMeshBuilder<'f, F> {
    /// Creates a builder from a validated configuration.
    pub fn new(config: &GridConfig, fill: &'f F) -> Self {
        Self {
            step: config.step,
            max_sides: config.max_face_sides,
            fill,
        }
    }

    /// Builds the grid mesh for `boundary` on the plane `z = 0`.
    ///
    /// The lattice is always classified against `boundary`, whatever the
    /// ring source.
    ///
    /// # Errors
    ///
    /// - [`GridError::DegenerateBoundary`] if the boundary has fewer than 3 points
    /// - [`GridError::InvalidStep`] if the step is not positive and finite
    /// - [`GridError::TooManyGridPoints`] if the lattice is too large
    /// - any error from the fill
    pub fn build(&self, boundary: &BoundaryLoop, ring: RingSource<'_>) -> GridResult<OutputMesh> {
        if !boundary.is_usable() {
            return Err(GridError::DegenerateBoundary {
                count: boundary.len(),
            });
        }
        let Some(bounds) = boundary.bounds() else {
            return Err(GridError::DegenerateBoundary { count: 0 });
        };

        let lines = GridLines::covering(&bounds, self.step)?;

        let mut mesh = OutputMesh::new();
        let lattice = add_lattice(&mut mesh, &lines, boundary);

        let (ring_points, extra_points) = ring.resolve(boundary);
        let ring_vertices: Vec<u32> = ring_points.iter().map(|&p| mesh.insert_vertex(p)).collect();
        for (k, &v) in ring_vertices.iter().enumerate() {
            mesh.insert_edge(v, ring_vertices[(k + 1) % ring_vertices.len()]);
        }

        let mut bridges = 0usize;
        for (&p, &v) in ring_points.iter().zip(&ring_vertices) {
            bridges += usize::from(bridge(&mut mesh, &lines, &lattice, p, v));
        }
        for &p in extra_points {
            let v = mesh.insert_vertex(p);
            bridges += usize::from(bridge(&mut mesh, &lines, &lattice, p, v));
        }
        debug!(
            ring = ring_vertices.len(),
            extra = extra_points.len(),
            bridges,
            "Stitched ring to lattice"
        );

        let filled = self
            .fill
            .fill(&mesh.planar_positions(), mesh.edges(), self.max_sides)?;
        for [a, b] in filled.extra_edges {
            mesh.insert_edge(a, b);
        }
        mesh.set_faces(filled.faces);

        info!(
            lattice_vertices = lattice.len(),
            vertices = mesh.vertex_count(),
            edges = mesh.edge_count(),
            faces = mesh.face_count(),
            step = self.step,
            "Built grid mesh"
        );
        Ok(mesh)
    }
}

/// Adds the retained lattice points and their 4-neighbour edges.
fn add_lattice(
    mesh: &mut OutputMesh,
    lines: &GridLines,
    boundary: &BoundaryLoop,
) -> HashMap<LatticeIndex, u32> {
    let (indices, positions): (Vec<LatticeIndex>, Vec<DVec2>) = lines.points().unzip();
    let inside = classify_points(&positions, boundary.points());

    let mut lattice = HashMap::new();
    let mut retained = Vec::new();
    for ((&idx, &p), &keep) in indices.iter().zip(&positions).zip(&inside) {
        if !keep {
            continue;
        }
        let v = mesh.insert_vertex(p);
        lattice.insert(idx, v);
        retained.push((idx, v));
    }

    // Walk in lattice order so edge order is deterministic
    for &((i, j), v) in &retained {
        for neighbour in [(i + 1, j), (i, j + 1)] {
            if let Some(&w) = lattice.get(&neighbour) {
                mesh.insert_edge(v, w);
            }
        }
    }

    debug!(
        candidates = indices.len(),
        retained = retained.len(),
        "Classified lattice points"
    );
    lattice
}

/// Connects `vertex` at `point` to the nearest retained lattice vertex
/// around its cell. Returns true if an edge was added.
fn bridge(
    mesh: &mut OutputMesh,
    lines: &GridLines,
    lattice: &HashMap<LatticeIndex, u32>,
    point: DVec2,
    vertex: u32,
) -> bool {
    let (ci, cj) = lines.cell_of(point);
    let mut nearest: Option<(f64, u32)> = None;

    for di in -BRIDGE_SEARCH_RADIUS..=BRIDGE_SEARCH_RADIUS {
        for dj in -BRIDGE_SEARCH_RADIUS..=BRIDGE_SEARCH_RADIUS {
            let idx = (ci + di, cj + dj);
            let Some(&candidate) = lattice.get(&idx) else {
                continue;
            };
            let dist = lines.point(idx).distance_squared(point);
            if nearest.map_or(true, |(best, _)| dist < best) {
                nearest = Some((dist, candidate));
            }
        }
    }

    match nearest {
        Some((_, target)) if target != vertex => mesh.insert_edge(vertex, target),
        _ => false,
    }
}
