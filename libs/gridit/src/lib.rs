//! # GridIt
//!
//! Generates a regular, axis-aligned grid of quads inside the silhouette of a
//! planar mesh. The outer boundary of the result follows the silhouette and
//! is stitched to the interior lattice by nearest-vertex bridges.
//!
//! ## Architecture
//!
//! ```text
//! SourceMesh (vertices + boundary edges + transform)
//!       ↓  boundary::extract_boundary_loop
//! BoundaryLoop (ordered 2D polyline)
//!       ↓  intersect::slice_boundary_at_grid
//! Intersections (ordered grid crossings)
//!       ↓  builder::GridMeshBuilder (classify + stitch)
//! Edge network
//!       ↓  fill::EdgeNetFill
//! OutputMesh → GridObject
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::GridConfig;
//! use glam::{DMat4, DVec3};
//! use gridit::{generate_grid, PlanarFaceFill, SourceMesh};
//!
//! let positions = vec![
//!     DVec3::new(0.0, 0.0, 2.0),
//!     DVec3::new(1.0, 0.0, 2.0),
//!     DVec3::new(1.0, 1.0, 2.0),
//!     DVec3::new(0.0, 1.0, 2.0),
//! ];
//! let source = SourceMesh::from_faces("Plane", positions, &[vec![0, 1, 2, 3]], DMat4::IDENTITY);
//! let config = GridConfig::with_step(0.5).unwrap();
//!
//! let grid = generate_grid(&source, &config, &PlanarFaceFill).unwrap();
//! assert_eq!(grid.name, "Plane_grid");
//! assert_eq!(grid.mesh.vertex_count(), 9);
//! assert_eq!(grid.mesh.face_count(), 4);
//! ```

pub mod boundary;
pub mod builder;
pub mod classify;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod intersect;
pub mod lattice;
pub mod mesh;
pub mod pipeline;
pub mod source;

pub use boundary::{extract_boundary_loop, BoundaryLoop};
pub use builder::{GridMeshBuilder, RingSource};
pub use classify::{classify_points, point_in_polygon};
pub use error::{GridError, GridResult};
pub use fill::{EdgeNetFill, FillOutput, PlanarFaceFill};
pub use geometry::{is_left, Bounds2};
pub use intersect::{slice_boundary_at_grid, Intersection};
pub use lattice::{GridLines, LatticeIndex};
pub use mesh::OutputMesh;
pub use pipeline::{generate_for_selection, generate_grid, GridObject};
pub use source::{RawBoundaryEdge, SceneObject, SourceMesh, SourceVertex};
