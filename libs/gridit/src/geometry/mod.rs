//! # 2D Geometry Primitives
//!
//! Orientation test, axis-aligned bounds and quantized point keys shared by
//! every pipeline stage. Points are `glam::DVec2` in the working frame
//! (world X/Y).


use config::constants::quantize;
use glam::DVec2;

/// Key of a point quantized at a fixed decimal scale.
///
/// Used by the deduplication maps: equal keys mean "same position". See
/// [`config::constants::quantize`] for the per-axis encoding.
pub type PointKey = (u64, u64);

/// Returns the z-component of `(p1 - p0) × (p2 - p0)`.
///
/// Positive when `p2` is left of the directed line `p0 → p1`, negative when
/// right, zero when collinear.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use gridit::is_left;
///
/// let a = DVec2::new(0.0, 0.0);
/// let b = DVec2::new(1.0, 0.0);
/// assert!(is_left(a, b, DVec2::new(0.5, 1.0)) > 0.0);
/// assert!(is_left(a, b, DVec2::new(0.5, -1.0)) < 0.0);
/// assert_eq!(is_left(a, b, DVec2::new(2.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn is_left(p0: DVec2, p1: DVec2, p2: DVec2) -> f64 {
    (p1.x - p0.x) * (p2.y - p0.y) - (p2.x - p0.x) * (p1.y - p0.y)
}

/// Quantizes a point to an integer key at the given scale.
#[inline]
pub fn point_key(point: DVec2, scale: f64) -> PointKey {
    (quantize(point.x, scale), quantize(point.y, scale))
}

/// Returns true if `value` lies in `[min(a, b) - tolerance, max(a, b) + tolerance]`.
#[inline]
pub fn within_range(value: f64, a: f64, b: f64, tolerance: f64) -> bool {
    a.min(b) - tolerance <= value && value <= a.max(b) + tolerance
}

/// Signed area of a closed polygon (positive when counter-clockwise).
///
/// Coordinates are taken relative to the first vertex so that polygons far
/// from the origin do not lose their area to cancellation.
pub fn signed_area(polygon: &[DVec2]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let origin = polygon[0];
    let twice: f64 = (1..n - 1)
        .map(|i| (polygon[i] - origin).perp_dot(polygon[i + 1] - origin))
        .sum();
    twice * 0.5
}

/// Axis-aligned bounding box in the working plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Minimum corner
    pub min: DVec2,
    /// Maximum corner
    pub max: DVec2,
}

impl Bounds2 {
    /// Computes the bounds of a point set, or `None` if it is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use gridit::Bounds2;
    ///
    /// let b = Bounds2::from_points(&[DVec2::new(1.0, -2.0), DVec2::new(-3.0, 4.0)]).unwrap();
    /// assert_eq!(b.min, DVec2::new(-3.0, -2.0));
    /// assert_eq!(b.max, DVec2::new(1.0, 4.0));
    /// ```
    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.min(*p);
            max = max.max(*p);
        }
        Some(Self { min, max })
    }

    /// Width and height of the box.
    #[inline]
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}
