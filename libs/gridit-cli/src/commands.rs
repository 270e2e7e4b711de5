//! CLI command implementations.

use std::path::Path;

use config::constants::GridConfig;
use gridit::{
    extract_boundary_loop, generate_grid, slice_boundary_at_grid, GridLines, PlanarFaceFill,
};
use tracing::info;

use crate::error::CliResult;
use crate::io::{read_mesh, write_grid, GridDocument};

/// Generate the grid for `input` and write it to `output`.
pub fn generate(input: &Path, output: &Path, config: &GridConfig) -> CliResult<()> {
    let source = read_mesh(input)?.into_source();
    let grid = generate_grid(&source, config, &PlanarFaceFill)?;
    write_grid(output, &GridDocument::from(&grid))?;

    info!(output = %output.display(), "Wrote grid");
    println!(
        "{}: {} vertices, {} edges, {} faces -> {}",
        grid.name,
        grid.mesh.vertex_count(),
        grid.mesh.edge_count(),
        grid.mesh.face_count(),
        output.display()
    );
    Ok(())
}

/// Print boundary, lattice and result statistics for `input`.
pub fn inspect(input: &Path, config: &GridConfig) -> CliResult<()> {
    let source = read_mesh(input)?.into_source();
    let boundary =
        extract_boundary_loop(&source.vertices, &source.boundary_edges, &source.transform)?;

    println!("Source: {}", source.name);
    println!("  vertices:        {}", source.vertices.len());
    println!("  boundary edges:  {}", source.boundary_edges.len());
    println!("  loop points:     {}", boundary.len());

    let Some(bounds) = boundary.bounds() else {
        println!("  (no boundary)");
        return Ok(());
    };
    let size = bounds.size();
    println!(
        "  bounds:          ({:.6}, {:.6}) .. ({:.6}, {:.6})",
        bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
    );
    println!("  size:            {:.6} x {:.6}", size.x, size.y);

    let lines = GridLines::covering(&bounds, config.step)?;
    let crossings = slice_boundary_at_grid(&boundary, config.step)?;
    println!();
    println!("Grid (step {})", config.step);
    println!("  lines:           {} x {}", lines.x_count, lines.y_count);
    println!("  lattice points:  {}", lines.point_count());
    println!("  crossings:       {}", crossings.len());

    let grid = generate_grid(&source, config, &PlanarFaceFill)?;
    let quads = grid.mesh.faces().iter().filter(|f| f.len() == 4).count();
    let triangles = grid.mesh.faces().iter().filter(|f| f.len() == 3).count();
    println!();
    println!("Result: {}", grid.name);
    println!("  z offset:        {}", grid.z_offset);
    println!("  vertices:        {}", grid.mesh.vertex_count());
    println!("  edges:           {}", grid.mesh.edge_count());
    println!(
        "  faces:           {} ({} quads, {} triangles, {} other)",
        grid.mesh.face_count(),
        quads,
        triangles,
        grid.mesh.face_count() - quads - triangles
    );
    Ok(())
}
