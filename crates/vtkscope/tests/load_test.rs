//! End-to-end loading tests for vtkscope.

use vtkscope::*;

const UNIT_CUBE: &str = "# vtk DataFile Version 3.0
single hexahedron
ASCII
DATASET UNSTRUCTURED_GRID
POINTS 8 double
0 0 0
1 0 0
1 1 0
0 1 0
0 0 1
1 0 1
1 1 1
0 1 1
CELLS 1 9
8 0 1 2 3 4 5 6 7
CELL_TYPES 1
12
POINT_DATA 8
VECTORS v double
0 0 0
0 0 0
0 0 0
0 0 0
0 0 0
0 0 0
0 0 0
0 0 0
";

/// Two hexahedra stacked along +Z, sharing the middle face.
const TWO_CELLS: &str = "# vtk DataFile Version 2.0
stack
ASCII

DATASET UNSTRUCTURED_GRID
POINTS 12 double
0 0 0  1 0 0  1 1 0  0 1 0
0 0 1  1 0 1  1 1 1  0 1 1
0 0 2  1 0 2  1 1 2  0 1 2

CELLS 2 18
8 0 1 2 3 4 5 6 7
8 4 5 6 7 8 9 10 11

CELL_TYPES 2
12
12

POINT_DATA 12
VECTORS flow double
0 0 1  0 0 1  0 0 1  0 0 1
0 0 1  0 0 1  0 0 1  0 0 1
0 0 1  0 0 1  0 0 1  0 0 1
";

#[test]
fn test_unit_cube() {
    let dataset = load_str(UNIT_CUBE).expect("load failed");

    assert_eq!(dataset.points().len(), 8);
    assert_eq!(dataset.num_cells(), 1);
    assert_eq!(dataset.triangle_indices().len(), 12);
    assert_eq!(dataset.triangle_indices().iter().flatten().count(), 36);

    let vectors = dataset.point_vectors().expect("vectors missing");
    assert_eq!(vectors, &[[0.0; 3]; 8]);
    assert_eq!(dataset.vector_attribute().unwrap().name, "v");
}

#[test]
fn test_unit_cube_triangles_follow_stencil() {
    let dataset = load_str(UNIT_CUBE).unwrap();
    assert_eq!(
        dataset.triangle_indices(),
        triangulate_hex(&[0, 1, 2, 3, 4, 5, 6, 7])
    );
}

#[test]
fn test_two_cells() {
    let dataset = load_str(TWO_CELLS).unwrap();
    assert_eq!(dataset.num_points(), 12);
    assert_eq!(dataset.num_cells(), 2);
    assert_eq!(dataset.num_triangles(), 24);
    assert!(dataset
        .triangle_indices()
        .iter()
        .flatten()
        .all(|&i| (i as usize) < dataset.num_points()));
    assert_eq!(dataset.point_vectors().unwrap()[11], [0.0, 0.0, 1.0]);
}

#[test]
fn test_deterministic() {
    let first = load_bytes(TWO_CELLS.as_bytes()).unwrap();
    let second = load_bytes(TWO_CELLS.as_bytes()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_crlf_matches_lf() {
    let crlf = UNIT_CUBE.replace('\n', "\r\n");
    assert_eq!(load_str(&crlf).unwrap(), load_str(UNIT_CUBE).unwrap());
}

#[test]
fn test_truncated_points() {
    // Drop the last coordinate of the last point.
    let truncated = UNIT_CUBE.replace("0 1 1\nCELLS", "0 1\nCELLS");
    let err = load_str(&truncated).unwrap_err();
    assert!(matches!(err, VtkscopeError::MalformedInput { .. }), "{err}");
}

#[test]
fn test_truncated_file() {
    let cut = &UNIT_CUBE[..UNIT_CUBE.find("VECTORS").unwrap() + 20];
    assert!(matches!(
        load_str(cut).unwrap_err(),
        VtkscopeError::MalformedInput { .. }
    ));
}

#[test]
fn test_missing_point_data() {
    let text = UNIT_CUBE.split("POINT_DATA").next().unwrap();
    let dataset = load_str(text).unwrap();
    assert!(dataset.point_vectors().is_none());
    assert_eq!(dataset.num_triangles(), 12);
}

#[test]
fn test_out_of_range_cell_index() {
    let text = UNIT_CUBE.replace("8 0 1 2 3 4 5 6 7", "8 0 1 2 3 4 5 6 9");
    assert!(matches!(
        load_str(&text).unwrap_err(),
        VtkscopeError::OutOfRangeIndex {
            index: 9,
            num_points: 8
        }
    ));
}

#[test]
fn test_tetrahedron_rejected() {
    let text = UNIT_CUBE.replace("CELLS 1 9\n8 0 1 2 3 4 5 6 7", "CELLS 1 5\n4 0 1 2 4");
    assert!(matches!(
        load_str(&text).unwrap_err(),
        VtkscopeError::UnsupportedCellLayout { cell: 0, count: 4 }
    ));
}

#[test]
fn test_cell_type_policy() {
    let text = UNIT_CUBE.replace("CELL_TYPES 1\n12", "CELL_TYPES 1\n10");
    assert!(matches!(
        load_str(&text).unwrap_err(),
        VtkscopeError::UnsupportedCellType { cell: 0, code: 10 }
    ));

    let options = LoadOptions::from_json_str(r#"{ "cell_type_policy": "Ignore" }"#).unwrap();
    let dataset = load_str_with(&text, &options).unwrap();
    assert_eq!(dataset.num_triangles(), 12);
}

#[test]
fn test_lenient_keywords() {
    let text = UNIT_CUBE.replace("POINTS", "PUNKTE");
    assert!(load_str(&text).is_err());
    assert!(load_str_with(&text, &LoadOptions::lenient()).is_ok());
}

#[test]
fn test_invalid_utf8() {
    let mut bytes = UNIT_CUBE.as_bytes().to_vec();
    bytes[40] = 0xFF;
    assert!(matches!(
        load_bytes(&bytes).unwrap_err(),
        VtkscopeError::MalformedInput { .. }
    ));
}

#[test]
fn test_load_file() {
    let path = std::env::temp_dir().join(format!("vtkscope_load_test_{}.vtk", std::process::id()));
    std::fs::write(&path, TWO_CELLS).unwrap();
    let dataset = load_file(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(dataset.unwrap().num_cells(), 2);
}

#[test]
fn test_missing_file() {
    let err = load_file("/nonexistent/vtkscope/mesh.vtk").unwrap_err();
    assert!(matches!(err, VtkscopeError::Io(_)));
}

#[test]
fn test_dataset_json_roundtrip() {
    let dataset = load_str(TWO_CELLS).unwrap();
    let json = serde_json::to_string(&dataset).unwrap();
    let restored: Dataset = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, dataset);
}

#[test]
fn test_buffers_and_camera() {
    let dataset = load_str(TWO_CELLS).unwrap();

    let buffers = MeshBuffers::from_dataset(&dataset);
    assert_eq!(buffers.index_count(), 72);
    assert_eq!(buffers.vertex_bytes().len(), 12 * VERTEX_STRIDE);
    assert_eq!(buffers.vertices()[8].vector, [0.0, 0.0, 1.0]);

    let camera = camera_for(&dataset, 1.0);
    assert!((camera.target - Vec3::new(0.5, 0.5, 1.0)).length() < 1e-6);
    assert!(camera.view_projection_matrix().is_finite());
}
