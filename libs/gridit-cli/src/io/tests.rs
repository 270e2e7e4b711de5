use super::*;
use config::constants::GridConfig;
use gridit::{generate_grid, PlanarFaceFill};

const SQUARE: &str = r#"{
    "name": "Plane",
    "vertices": [[0, 0, 1], [1, 0, 1], [1, 1, 1], [0, 1, 1]],
    "faces": [[0, 1, 2, 3]]
}"#;

#[test]
fn test_parse_mesh_without_transform() {
    let doc: MeshDocument = serde_json::from_str(SQUARE).unwrap();
    assert_eq!(doc.name, "Plane");
    assert_eq!(doc.vertices[2], DVec3::new(1.0, 1.0, 1.0));
    assert_eq!(doc.transform, None);

    let source = doc.into_source();
    assert_eq!(source.boundary_edges.len(), 4);
    assert_eq!(source.transform, DMat4::IDENTITY);
}

#[test]
fn test_parse_column_major_transform() {
    let json = r#"{
        "name": "Moved",
        "vertices": [[0, 0, 0], [1, 0, 0], [0, 1, 0]],
        "faces": [[0, 1, 2]],
        "transform": [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 5, 6, 7, 1]
    }"#;
    let doc: MeshDocument = serde_json::from_str(json).unwrap();
    let source = doc.into_source();
    assert_eq!(source.reference_point(), Some(DVec3::new(5.0, 6.0, 7.0)));
}

#[test]
fn test_missing_field_is_rejected() {
    let json = r#"{ "name": "Broken", "vertices": [] }"#;
    assert!(serde_json::from_str::<MeshDocument>(json).is_err());
}

#[test]
fn test_grid_document_from_object() {
    let source = serde_json::from_str::<MeshDocument>(SQUARE)
        .unwrap()
        .into_source();
    let config = GridConfig::with_step(0.5).unwrap();
    let grid = generate_grid(&source, &config, &PlanarFaceFill).unwrap();

    let doc = GridDocument::from(&grid);
    assert_eq!(doc.name, "Plane_grid");
    assert_eq!(doc.z_offset, 1.0);
    assert_eq!(doc.vertices.len(), 9);
    assert_eq!(doc.edges.len(), 12);
    assert_eq!(doc.faces.len(), 4);

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["vertices"][0].as_array().map(Vec::len), Some(3));
    assert_eq!(value["edges"][0].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_write_then_read_grid_file() {
    let path = std::env::temp_dir().join(format!("gridit-io-{}.json", std::process::id()));
    let doc = GridDocument {
        name: "T_grid".into(),
        z_offset: 0.5,
        vertices: vec![DVec3::new(0.0, 0.0, 0.5), DVec3::new(1.0, 0.0, 0.5)],
        edges: vec![[0, 1]],
        faces: vec![],
    };
    write_grid(&path, &doc).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);
    assert_eq!(serde_json::from_str::<GridDocument>(&text).unwrap(), doc);
}

#[test]
fn test_missing_file_reports_path() {
    let path = Path::new("/nonexistent/gridit/input.json");
    let err = read_mesh(path).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().starts_with("/nonexistent/gridit/input.json"));
}
