//! # Output Mesh
//!
//! Vertex/edge/face container built incrementally by the grid builder.
//! Vertices are deduplicated by coordinate quantized to 10 decimals, edges by
//! unordered vertex pair.


use std::collections::{HashMap, HashSet};

use config::constants::VERTEX_KEY_SCALE;
use glam::{DVec2, DVec3};

use crate::geometry::{point_key, PointKey};

/// A polygon mesh with an explicit edge list.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use gridit::OutputMesh;
///
/// let mut mesh = OutputMesh::new();
/// let a = mesh.insert_vertex(DVec2::new(0.0, 0.0));
/// let b = mesh.insert_vertex(DVec2::new(1.0, 0.0));
/// assert_eq!(mesh.insert_vertex(DVec2::new(1.0, 1e-12)), b);
/// assert!(mesh.insert_edge(a, b));
/// assert!(!mesh.insert_edge(b, a));
/// assert_eq!(mesh.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutputMesh {
    vertices: Vec<DVec3>,
    edges: Vec<[u32; 2]>,
    faces: Vec<Vec<u32>>,
    vertex_lookup: HashMap<PointKey, u32>,
    edge_lookup: HashSet<(u32, u32)>,
}

impl PartialEq for OutputMesh {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edges == other.edges && self.faces == other.faces
    }
}

impl OutputMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of the vertex at `position`, creating it if no
    /// vertex with the same quantized coordinate exists yet.
    pub fn insert_vertex(&mut self, position: DVec2) -> u32 {
        let key = point_key(position, VERTEX_KEY_SCALE);
        if let Some(&index) = self.vertex_lookup.get(&key) {
            return index;
        }
        let index = self.vertices.len() as u32;
        self.vertices.push(DVec3::new(position.x, position.y, 0.0));
        self.vertex_lookup.insert(key, index);
        index
    }

    /// Adds the edge `a – b` unless it already exists (in either direction)
    /// or is a self-loop. Returns true if an edge was added.
    pub fn insert_edge(&mut self, a: u32, b: u32) -> bool {
        if a == b {
            return false;
        }
        if !self.edge_lookup.insert((a.min(b), a.max(b))) {
            return false;
        }
        self.edges.push([a, b]);
        true
    }

    /// Returns true if the edge `a – b` exists in either direction.
    #[inline]
    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        self.edge_lookup.contains(&(a.min(b), a.max(b)))
    }

    /// Replaces the face list.
    pub fn set_faces(&mut self, faces: Vec<Vec<u32>>) {
        self.faces = faces;
    }

    /// Moves every vertex along Z.
    pub fn translate_z(&mut self, offset: f64) {
        for v in &mut self.vertices {
            v.z += offset;
        }
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Vertex positions projected to the working plane.
    pub fn planar_positions(&self) -> Vec<DVec2> {
        self.vertices.iter().map(|v| v.truncate()).collect()
    }

    /// Edges as vertex index pairs.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Faces as vertex index polygons.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
