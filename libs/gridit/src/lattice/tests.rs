use super::*;
use approx::assert_relative_eq;

fn unit_bounds() -> Bounds2 {
    Bounds2 {
        min: DVec2::new(0.0, 0.0),
        max: DVec2::new(1.0, 1.0),
    }
}

#[test]
fn test_covering_unit_square() {
    let lines = GridLines::covering(&unit_bounds(), 0.25).unwrap();
    assert_eq!(lines.x_count, 5);
    assert_eq!(lines.y_count, 5);
    assert_eq!(lines.point_count(), 25);
    assert_eq!(
        lines.y_lines().collect::<Vec<_>>(),
        vec![0.0, 0.25, 0.5, 0.75, 1.0]
    );
}

#[test]
fn test_covering_pads_to_multiples() {
    let bounds = Bounds2 {
        min: DVec2::new(-0.3, 0.2),
        max: DVec2::new(0.7, 0.45),
    };
    let lines = GridLines::covering(&bounds, 0.5).unwrap();
    assert_relative_eq!(lines.start_x, -0.5);
    assert_relative_eq!(lines.start_y, 0.0);
    // -0.5, 0.0, 0.5, 1.0
    assert_eq!(lines.x_count, 4);
    // 0.0, 0.5
    assert_eq!(lines.y_count, 2);
}

#[test]
fn test_covering_degenerate_box() {
    let bounds = Bounds2 {
        min: DVec2::new(1.0, 1.0),
        max: DVec2::new(1.0, 1.0),
    };
    let lines = GridLines::covering(&bounds, 0.5).unwrap();
    assert_eq!(lines.x_count, 1);
    assert_eq!(lines.y_count, 1);
}

#[test]
fn test_covering_rejects_bad_step() {
    assert_eq!(
        GridLines::covering(&unit_bounds(), 0.0),
        Err(GridError::InvalidStep(0.0))
    );
    assert!(GridLines::covering(&unit_bounds(), -1.0).is_err());
    assert!(GridLines::covering(&unit_bounds(), f64::NAN).is_err());
}

#[test]
fn test_nearest_index_and_cell() {
    let lines = GridLines::covering(&unit_bounds(), 0.25).unwrap();
    let p = DVec2::new(0.6, 0.1);
    assert_eq!(lines.nearest_index(p), (2, 0));
    assert_eq!(lines.cell_of(p), (2, 0));

    let q = DVec2::new(0.7, 0.2);
    assert_eq!(lines.nearest_index(q), (3, 1));
    assert_eq!(lines.cell_of(q), (2, 0));
}

#[test]
fn test_points_enumerates_every_index() {
    let lines = GridLines::covering(&unit_bounds(), 0.5).unwrap();
    let points: Vec<_> = lines.points().collect();
    assert_eq!(points.len(), 9);
    assert_eq!(points[0], ((0, 0), DVec2::new(0.0, 0.0)));
    assert_eq!(points[1], ((0, 1), DVec2::new(0.0, 0.5)));
    assert_eq!(points[8], ((2, 2), DVec2::new(1.0, 1.0)));
}

#[test]
fn test_covering_refuses_oversized_lattice() {
    let result = GridLines::covering(&unit_bounds(), 1.0e-9);
    assert!(matches!(
        result,
        Err(GridError::TooManyGridPoints { count, max: MAX_GRID_POINTS }) if count > MAX_GRID_POINTS
    ));
}

#[test]
fn test_covering_survives_overflowing_spans() {
    let bounds = Bounds2 {
        min: DVec2::splat(-1.0e300),
        max: DVec2::splat(1.0e300),
    };
    assert_eq!(
        GridLines::covering(&bounds, 1.0e-300),
        Err(GridError::TooManyGridPoints {
            count: usize::MAX,
            max: MAX_GRID_POINTS,
        })
    );
}

#[test]
fn test_covering_accepts_lattice_at_limit() {
    // 5000 x 5000 lines is exactly the limit
    let bounds = Bounds2 {
        min: DVec2::ZERO,
        max: DVec2::splat(4999.0),
    };
    let lines = GridLines::covering(&bounds, 1.0).unwrap();
    assert_eq!(lines.point_count(), MAX_GRID_POINTS);
}
