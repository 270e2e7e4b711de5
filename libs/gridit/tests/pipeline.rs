use approx::assert_relative_eq;
use config::constants::GridConfig;
use glam::{DMat4, DVec2, DVec3};
use gridit::geometry::signed_area;
use gridit::{
    extract_boundary_loop, generate_for_selection, generate_grid, slice_boundary_at_grid,
    EdgeNetFill, GridError, OutputMesh, PlanarFaceFill, SceneObject, SourceMesh,
};

fn polygon_source(name: &str, outline: &[(f64, f64)]) -> SourceMesh {
    let positions = outline
        .iter()
        .map(|&(x, y)| DVec3::new(x, y, 0.0))
        .collect();
    let face: Vec<u32> = (0..outline.len() as u32).collect();
    SourceMesh::from_faces(name, positions, &[face], DMat4::IDENTITY)
}

fn l_shape() -> SourceMesh {
    polygon_source(
        "L",
        &[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)],
    )
}

fn filled_area(mesh: &OutputMesh) -> f64 {
    let positions = mesh.planar_positions();
    mesh.faces()
        .iter()
        .map(|face| {
            let polygon: Vec<DVec2> = face.iter().map(|&v| positions[v as usize]).collect();
            signed_area(&polygon)
        })
        .sum()
}

#[test]
fn unit_square_quarter_step_matches_lattice() {
    let source = polygon_source("Square", &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let config = GridConfig::with_step(0.25).unwrap();
    let grid = generate_grid(&source, &config, &PlanarFaceFill).unwrap();

    assert_eq!(grid.name, "Square_grid");
    assert_eq!(grid.mesh.vertex_count(), 25);
    assert_eq!(grid.mesh.face_count(), 16);
    assert!(grid.mesh.faces().iter().all(|f| f.len() == 4));
    assert_relative_eq!(filled_area(&grid.mesh), 1.0, epsilon = 1e-9);
}

#[test]
fn l_shape_is_filled_with_quads() {
    let config = GridConfig::with_step(0.5).unwrap();
    let grid = generate_grid(&l_shape(), &config, &PlanarFaceFill).unwrap();

    // 5×5 lattice minus the 2×2 block in the notch
    assert_eq!(grid.mesh.vertex_count(), 21);
    assert_eq!(grid.mesh.face_count(), 12);
    assert!(grid.mesh.faces().iter().all(|f| f.len() == 4));
    assert_relative_eq!(filled_area(&grid.mesh), 3.0, epsilon = 1e-9);
}

#[test]
fn no_vertex_lands_in_the_notch() {
    let config = GridConfig::with_step(0.25).unwrap();
    let grid = generate_grid(&l_shape(), &config, &PlanarFaceFill).unwrap();
    for v in grid.mesh.vertices() {
        assert!(
            !(v.x > 1.0 + 1e-9 && v.y > 1.0 + 1e-9),
            "vertex {v:?} is outside the silhouette"
        );
    }
}

#[test]
fn runs_are_deterministic() {
    let hexagon: Vec<(f64, f64)> = (0..6)
        .map(|k| {
            let angle = std::f64::consts::TAU * k as f64 / 6.0 + 0.1;
            (1.3 * angle.cos(), 1.3 * angle.sin())
        })
        .collect();
    let source = polygon_source("Hex", &hexagon);
    let config = GridConfig::with_step(0.2).unwrap();

    let first = generate_grid(&source, &config, &PlanarFaceFill).unwrap();
    let second = generate_grid(&source, &config, &PlanarFaceFill).unwrap();
    assert_eq!(first, second);
    assert!(first.mesh.face_count() > 0);
    assert!(first.mesh.faces().iter().all(|f| f.len() <= 4));

    // The faces tile the polygon through the crossings, cut corners excluded
    let boundary =
        extract_boundary_loop(&source.vertices, &source.boundary_edges, &source.transform).unwrap();
    let ring: Vec<DVec2> = slice_boundary_at_grid(&boundary, config.step)
        .unwrap()
        .iter()
        .map(|c| c.point)
        .collect();
    assert_relative_eq!(filled_area(&first.mesh), signed_area(&ring), epsilon = 1e-9);

    // One connected planar network with every bounded face filled
    let mesh = &first.mesh;
    let euler = mesh.vertex_count() as i64 - mesh.edge_count() as i64 + mesh.face_count() as i64;
    assert_eq!(euler, 1);
}

#[test]
fn fill_can_be_a_trait_object() {
    let fill: &dyn EdgeNetFill = &PlanarFaceFill;
    let config = GridConfig::with_step(0.5).unwrap();
    let grid = generate_grid(&l_shape(), &config, fill).unwrap();
    assert_eq!(grid.mesh.face_count(), 12);
}

#[test]
fn selection_of_non_mesh_is_rejected() {
    let light = SceneObject::Other {
        name: "Sun".into(),
        kind: "LIGHT".into(),
    };
    let err = generate_for_selection(Some(&light), &GridConfig::default(), &PlanarFaceFill)
        .unwrap_err();
    assert_eq!(err.to_string(), "Object 'Sun' is a LIGHT, not a mesh");
}

#[test]
fn invalid_config_converts_to_grid_error() {
    fn build() -> Result<GridConfig, GridError> {
        Ok(GridConfig::new(0.0, 4)?)
    }
    assert_eq!(build(), Err(GridError::InvalidStep(0.0)));

    fn build_sides() -> Result<GridConfig, GridError> {
        Ok(GridConfig::new(0.5, 2)?)
    }
    let err = build_sides().unwrap_err();
    assert!(matches!(err, GridError::InvalidConfig { .. }));
    assert!(err.to_string().contains("2"));
}

#[test]
fn far_from_origin_square_keeps_its_lattice() {
    let offset = 2.0e9;
    let corners = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    let outline: Vec<(f64, f64)> = corners.iter().map(|&(x, y)| (x + offset, y + offset)).collect();
    let source = polygon_source("Far", &outline);
    let config = GridConfig::with_step(1.0).unwrap();
    let grid = generate_grid(&source, &config, &PlanarFaceFill).unwrap();

    assert_eq!(grid.mesh.vertex_count(), 25);
    assert_eq!(grid.mesh.face_count(), 16);
    assert!(grid.mesh.faces().iter().all(|f| f.len() == 4));
    assert_relative_eq!(filled_area(&grid.mesh), 16.0, epsilon = 1e-6);
}

#[test]
fn tiny_step_is_refused_without_allocating() {
    let source = polygon_source("Square", &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let config = GridConfig::with_step(1.0e-9).unwrap();
    assert!(matches!(
        generate_grid(&source, &config, &PlanarFaceFill),
        Err(GridError::TooManyGridPoints { .. })
    ));
}
