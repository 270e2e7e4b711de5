use super::*;
use crate::error::GridError;
use approx::assert_relative_eq;

fn unit_square() -> BoundaryLoop {
    BoundaryLoop::new(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ])
}

fn points(crossings: &[Intersection]) -> Vec<DVec2> {
    crossings.iter().map(|c| c.point).collect()
}

#[test]
fn test_unit_square_half_step() {
    let crossings = slice_boundary_at_grid(&unit_square(), 0.5).unwrap();
    assert_eq!(
        points(&crossings),
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.5, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 0.5),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.5, 1.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(0.0, 0.5),
        ]
    );
}

#[test]
fn test_ordering_is_by_segment_then_parameter() {
    let crossings = slice_boundary_at_grid(&unit_square(), 0.25).unwrap();
    assert_eq!(crossings.len(), 16);
    for pair in crossings.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.segment < b.segment || (a.segment == b.segment && a.t <= b.t));
    }
    assert!(crossings.iter().all(|c| (0.0..=1.0).contains(&c.t)));
}

#[test]
fn test_crossings_lie_on_grid_lines() {
    let triangle = BoundaryLoop::new(vec![
        DVec2::new(0.1, 0.2),
        DVec2::new(2.3, 0.45),
        DVec2::new(1.1, 1.9),
    ]);
    let step = 0.5;
    let crossings = slice_boundary_at_grid(&triangle, step).unwrap();
    assert!(!crossings.is_empty());
    for c in &crossings {
        let on_x = ((c.point.x / step).round() * step - c.point.x).abs() < 1e-9;
        let on_y = ((c.point.y / step).round() * step - c.point.y).abs() < 1e-9;
        assert!(on_x || on_y, "{:?} is not on a grid line", c.point);
    }
}

#[test]
fn test_parameter_matches_position() {
    let boundary = BoundaryLoop::new(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(2.0, 1.0),
        DVec2::new(0.0, 2.0),
    ]);
    let crossings = slice_boundary_at_grid(&boundary, 1.0).unwrap();
    let (_, a, b) = boundary.segments().next().unwrap();
    for c in crossings.iter().filter(|c| c.segment == 0) {
        let expected = a + (b - a) * c.t;
        assert_relative_eq!(c.point.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(c.point.y, expected.y, epsilon = 1e-12);
    }
}

#[test]
fn test_shared_corner_yields_single_entry() {
    // Both segments meeting at (1, 1) cross lines x = 1 and y = 1 there
    let diamond = BoundaryLoop::new(vec![
        DVec2::new(1.0, 0.0),
        DVec2::new(2.0, 1.0),
        DVec2::new(1.0, 2.0),
        DVec2::new(0.0, 1.0),
    ]);
    let crossings = slice_boundary_at_grid(&diamond, 1.0).unwrap();
    let at_corner = crossings
        .iter()
        .filter(|c| c.point == DVec2::new(2.0, 1.0))
        .count();
    assert_eq!(at_corner, 1);
    // First writer wins: segment 0 reaches (2, 1) first, at t = 1
    let corner = crossings
        .iter()
        .find(|c| c.point == DVec2::new(2.0, 1.0))
        .unwrap();
    assert_eq!(corner.segment, 0);
    assert_eq!(corner.t, 1.0);
}

#[test]
fn test_near_duplicates_are_merged() {
    // The crossing of x = 1 at (1, 0) and the vertex at (1 + 1e-10, 0)
    // quantize to the same 8-decimal key
    let boundary = BoundaryLoop::new(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0 + 1e-10, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(2.0, 2.0),
        DVec2::new(0.0, 2.0),
    ]);
    let crossings = slice_boundary_at_grid(&boundary, 1.0).unwrap();
    let near: Vec<_> = crossings
        .iter()
        .filter(|c| c.point.distance(DVec2::new(1.0, 0.0)) < 1e-8)
        .collect();
    assert_eq!(near.len(), 1);
    assert_eq!(near[0].point, DVec2::new(1.0, 0.0));
    assert_eq!(near[0].segment, 0);
}

#[test]
fn test_segment_on_vertical_line_emits_endpoints() {
    let boundary = BoundaryLoop::new(vec![
        DVec2::new(0.0, 0.2),
        DVec2::new(0.0, 0.8),
        DVec2::new(-0.7, 0.5),
    ]);
    let crossings = slice_boundary_at_grid(&boundary, 1.0).unwrap();
    let first: Vec<_> = crossings.iter().filter(|c| c.segment == 0).collect();
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].point, DVec2::new(0.0, 0.2));
    assert_eq!(first[0].t, 0.0);
    assert_eq!(first[1].point, DVec2::new(0.0, 0.8));
    assert_eq!(first[1].t, 1.0);
}

#[test]
fn test_segment_between_lines_has_no_crossings() {
    // Entirely inside one grid cell
    let boundary = BoundaryLoop::new(vec![
        DVec2::new(0.1, 0.1),
        DVec2::new(0.4, 0.1),
        DVec2::new(0.2, 0.4),
    ]);
    let crossings = slice_boundary_at_grid(&boundary, 1.0).unwrap();
    assert!(crossings.is_empty());
}

#[test]
fn test_empty_boundary() {
    let crossings = slice_boundary_at_grid(&BoundaryLoop::default(), 0.5).unwrap();
    assert!(crossings.is_empty());
}

#[test]
fn test_invalid_step() {
    assert_eq!(
        slice_boundary_at_grid(&unit_square(), -0.5),
        Err(GridError::InvalidStep(-0.5))
    );
}

#[test]
fn test_oversized_grid_is_refused_before_slicing() {
    assert!(matches!(
        slice_boundary_at_grid(&unit_square(), 1.0e-9),
        Err(GridError::TooManyGridPoints { .. })
    ));
}
