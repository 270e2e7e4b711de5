//! # Pipeline
//!
//! End-to-end grid generation for one source mesh: extract the boundary,
//! slice it at the grid lines, build the stitched mesh, then lift it to the
//! source's height.


use config::constants::{GridConfig, GRID_NAME_SUFFIX};
use glam::DVec2;
use tracing::{debug, info};

use crate::boundary::extract_boundary_loop;
use crate::builder::{GridMeshBuilder, RingSource};
use crate::error::{GridError, GridResult};
use crate::fill::EdgeNetFill;
use crate::intersect::slice_boundary_at_grid;
use crate::mesh::OutputMesh;
use crate::source::{SceneObject, SourceMesh};

/// A generated grid object, ready to be linked into the host scene.
#[derive(Debug, Clone, PartialEq)]
pub struct GridObject {
    /// `<source name>_grid`
    pub name: String,
    /// Mesh with vertices already at `z_offset`
    pub mesh: OutputMesh,
    /// World Z of the source's reference vertex
    pub z_offset: f64,
}

/// Generates the grid mesh for `source`.
///
/// The boundary's grid crossings replace the boundary as the outer ring;
/// when there are none the boundary itself is used.
///
/// # Errors
///
/// - [`GridError::NoBoundaryFound`] if the source has no boundary edges
/// - any error from the extraction, intersection, build or fill stages
pub fn generate_grid<F>(source: &SourceMesh, config: &GridConfig, fill: &F) -> GridResult<GridObject>
where
    F: EdgeNetFill + ?Sized,
{
    let boundary = extract_boundary_loop(&source.vertices, &source.boundary_edges, &source.transform)?;
    if boundary.is_empty() {
        return Err(GridError::NoBoundaryFound);
    }

    let crossings: Vec<DVec2> = slice_boundary_at_grid(&boundary, config.step)?
        .iter()
        .map(|c| c.point)
        .collect();
    let ring = if crossings.is_empty() {
        debug!(
            source = %source.name,
            "Boundary crosses no grid line, keeping the source outline"
        );
        RingSource::Boundary
    } else {
        RingSource::Substitute(&crossings)
    };

    let mut mesh = GridMeshBuilder::new(config, fill).build(&boundary, ring)?;

    let z_offset = source.reference_point().map_or(0.0, |p| p.z);
    mesh.translate_z(z_offset);

    let name = format!("{}{}", source.name, GRID_NAME_SUFFIX);
    info!(
        source = %source.name,
        output = %name,
        boundary_points = boundary.len(),
        crossings = crossings.len(),
        z_offset,
        "Generated grid object"
    );

    Ok(GridObject {
        name,
        mesh,
        z_offset,
    })
}

/// Runs [`generate_grid`] on the host's active object.
///
/// # Errors
///
/// - [`GridError::NoSelection`] if nothing is active
/// - [`GridError::WrongType`] if the active object is not a mesh
/// - any error from [`generate_grid`]
pub fn generate_for_selection<F>(
    active: Option<&SceneObject>,
    config: &GridConfig,
    fill: &F,
) -> GridResult<GridObject>
where
    F: EdgeNetFill + ?Sized,
{
    match active {
        None => Err(GridError::NoSelection),
        Some(SceneObject::Other { name, kind }) => Err(GridError::WrongType {
            name: name.clone(),
            kind: kind.clone(),
        }),
        Some(SceneObject::Mesh(source)) => generate_grid(source, config, fill),
    }
}
