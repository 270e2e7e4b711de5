//! # JSON Documents
//!
//! Input: `{ "name", "vertices": [[x, y, z]], "faces": [[i, ...]], "transform"? }`
//! where `transform` is 16 column-major numbers.
//!
//! Output: `{ "name", "z_offset", "vertices", "edges", "faces" }`.

#[cfg(test)]
mod tests;

use std::fs;
use std::path::Path;

use glam::{DMat4, DVec3};
use gridit::{GridObject, SourceMesh};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// A planar source mesh as read from disk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MeshDocument {
    pub name: String,
    pub vertices: Vec<DVec3>,
    pub faces: Vec<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<DMat4>,
}

impl MeshDocument {
    /// Converts to the library's source mesh; boundary edges are derived
    /// from the faces.
    pub fn into_source(self) -> SourceMesh {
        SourceMesh::from_faces(
            self.name,
            self.vertices,
            &self.faces,
            self.transform.unwrap_or(DMat4::IDENTITY),
        )
    }
}

/// A generated grid as written to disk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GridDocument {
    pub name: String,
    pub z_offset: f64,
    pub vertices: Vec<DVec3>,
    pub edges: Vec<[u32; 2]>,
    pub faces: Vec<Vec<u32>>,
}

impl From<&GridObject> for GridDocument {
    fn from(grid: &GridObject) -> Self {
        Self {
            name: grid.name.clone(),
            z_offset: grid.z_offset,
            vertices: grid.mesh.vertices().to_vec(),
            edges: grid.mesh.edges().to_vec(),
            faces: grid.mesh.faces().to_vec(),
        }
    }
}

pub fn read_mesh(path: &Path) -> CliResult<MeshDocument> {
    let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| CliError::json(path, e))
}

pub fn write_grid(path: &Path, grid: &GridDocument) -> CliResult<()> {
    let text = serde_json::to_string_pretty(grid).map_err(|e| CliError::json(path, e))?;
    fs::write(path, text).map_err(|e| CliError::io(path, e))
}
