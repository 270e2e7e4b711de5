//! # Source Mesh
//!
//! Input collaborator types: what the host application hands to the
//! pipeline. The host's scene graph, selection and evaluation are modelled as
//! plain values so the pipeline stays a pure function of its inputs.


use std::collections::HashMap;

use glam::{DMat4, DVec3};

/// A source vertex with a stable identifier and a local-frame position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceVertex {
    /// Stable vertex identifier
    pub id: u32,
    /// Position in the source's local frame
    pub position: DVec3,
}

impl SourceVertex {
    /// Creates a new vertex.
    pub fn new(id: u32, position: DVec3) -> Self {
        Self { id, position }
    }
}

/// An unordered pair of vertex ids lying on exactly one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawBoundaryEdge {
    /// First endpoint id
    pub a: u32,
    /// Second endpoint id
    pub b: u32,
}

impl RawBoundaryEdge {
    /// Creates a new boundary edge.
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// Returns the endpoint opposite to `id`.
    #[inline]
    pub fn other(&self, id: u32) -> u32 {
        if self.a == id {
            self.b
        } else {
            self.a
        }
    }
}

/// A planar mesh selected as the silhouette source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMesh {
    /// Object name (the output is named `<name>_grid`)
    pub name: String,
    /// Vertices in the local frame
    pub vertices: Vec<SourceVertex>,
    /// Edges adjacent to exactly one face
    pub boundary_edges: Vec<RawBoundaryEdge>,
    /// Local → world transform
    pub transform: DMat4,
}

impl SourceMesh {
    /// Creates a source mesh from an explicit boundary edge set.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<SourceVertex>,
        boundary_edges: Vec<RawBoundaryEdge>,
        transform: DMat4,
    ) -> Self {
        Self {
            name: name.into(),
            vertices,
            boundary_edges,
            transform,
        }
    }

    /// Creates a source mesh from positions and polygon faces.
    ///
    /// Vertex ids are the position indices. Boundary edges are the edges used
    /// by exactly one face, listed in order of first appearance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::{DMat4, DVec3};
    /// use gridit::SourceMesh;
    ///
    /// let positions = vec![
    ///     DVec3::new(0.0, 0.0, 0.0),
    ///     DVec3::new(1.0, 0.0, 0.0),
    ///     DVec3::new(1.0, 1.0, 0.0),
    ///     DVec3::new(0.0, 1.0, 0.0),
    /// ];
    /// // Two triangles share the diagonal 0-2, which is not a boundary edge
    /// let faces = [vec![0, 1, 2], vec![0, 2, 3]];
    /// let mesh = SourceMesh::from_faces("Quad", positions, &faces, DMat4::IDENTITY);
    /// assert_eq!(mesh.boundary_edges.len(), 4);
    /// ```
    pub fn from_faces(
        name: impl Into<String>,
        positions: Vec<DVec3>,
        faces: &[Vec<u32>],
        transform: DMat4,
    ) -> Self {
        let mut order: Vec<(u32, u32)> = Vec::new();
        let mut face_counts: HashMap<(u32, u32), usize> = HashMap::new();
        let mut first_seen: HashMap<(u32, u32), RawBoundaryEdge> = HashMap::new();

        for face in faces {
            let n = face.len();
            for i in 0..n {
                let a = face[i];
                let b = face[(i + 1) % n];
                if a == b {
                    continue;
                }
                let key = (a.min(b), a.max(b));
                let count = face_counts.entry(key).or_insert(0);
                if *count == 0 {
                    order.push(key);
                    first_seen.insert(key, RawBoundaryEdge::new(a, b));
                }
                *count += 1;
            }
        }

        let boundary_edges = order
            .into_iter()
            .filter(|key| face_counts.get(key) == Some(&1))
            .filter_map(|key| first_seen.get(&key).copied())
            .collect();

        let vertices = positions
            .into_iter()
            .enumerate()
            .map(|(i, position)| SourceVertex::new(i as u32, position))
            .collect();

        Self::new(name, vertices, boundary_edges, transform)
    }

    /// World position of the reference vertex used for Z alignment (the
    /// first vertex), if any.
    pub fn reference_point(&self) -> Option<DVec3> {
        self.vertices
            .first()
            .map(|v| self.transform.transform_point3(v.position))
    }
}

/// The host's active object.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    /// A mesh object usable as a silhouette source
    Mesh(SourceMesh),
    /// Any other kind of object (camera, light, curve...)
    Other {
        /// Object name
        name: String,
        /// Kind reported by the host
        kind: String,
    },
}
