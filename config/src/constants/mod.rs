//! Centralized configuration values shared across the GridIt pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for on-boundary and collinearity tests.
///
/// A point whose cross product against an edge is below this value (and which
/// lies in the edge's padded bounding box) is treated as lying on the edge.
/// The same tolerance pads range checks when validating grid crossings.
///
/// # Examples
/// ```
/// use config::constants::ON_EDGE_EPSILON;
/// assert_eq!(ON_EDGE_EPSILON, 1.0e-9);
/// ```
pub const ON_EDGE_EPSILON: f64 = 1.0e-9;

/// Tolerance for degenerate (near zero-length) segments and axis-parallel
/// segment detection.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_EPSILON;
/// let length: f64 = 1.0e-13;
/// assert!(length < DEGENERATE_EPSILON);
/// ```
pub const DEGENERATE_EPSILON: f64 = 1.0e-12;

/// Quantization scale for intersection deduplication (8 decimal places).
///
/// Two grid crossings whose coordinates round to the same multiple of
/// `1 / INTERSECTION_KEY_SCALE` are the same crossing.
///
/// # Examples
/// ```
/// use config::constants::INTERSECTION_KEY_SCALE;
/// let key = (0.123456789_f64 * INTERSECTION_KEY_SCALE).round() as i64;
/// assert_eq!(key, 12_345_679);
/// ```
pub const INTERSECTION_KEY_SCALE: f64 = 1.0e8;

/// Quantization scale for output vertex deduplication (10 decimal places).
///
/// # Examples
/// ```
/// use config::constants::{INTERSECTION_KEY_SCALE, VERTEX_KEY_SCALE};
/// assert!(VERTEX_KEY_SCALE > INTERSECTION_KEY_SCALE);
/// ```
pub const VERTEX_KEY_SCALE: f64 = 1.0e10;

// =============================================================================
// GRID CONSTANTS
// =============================================================================

/// Default grid spacing in world units.
///
/// Small spacings produce very large vertex counts for moderately sized
/// silhouettes; callers normally override this per run.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_STEP;
/// let user_step: Option<f64> = None;
/// assert_eq!(user_step.unwrap_or(DEFAULT_STEP), 0.001);
/// ```
pub const DEFAULT_STEP: f64 = 0.001;

/// Maximum number of sides of a face produced by the edge-network fill.
///
/// Four favours quads wherever the edge network allows it.
///
/// # Examples
/// ```
/// use config::constants::MAX_FACE_SIDES;
/// assert_eq!(MAX_FACE_SIDES, 4);
/// ```
pub const MAX_FACE_SIDES: usize = 4;

/// Smallest side count a fill can be asked for (a triangle).
pub const MIN_FACE_SIDES: usize = 3;

/// Minimum number of boundary points needed to build a grid mesh.
pub const MIN_BOUNDARY_POINTS: usize = 3;

/// Half-width, in lattice cells, of the neighbourhood searched when bridging
/// an outer-ring vertex to its nearest interior vertex (1 → 3×3 cells).
pub const BRIDGE_SEARCH_RADIUS: i64 = 1;

/// Suffix appended to the source object's name for the generated object.
///
/// # Examples
/// ```
/// use config::constants::GRID_NAME_SUFFIX;
/// assert_eq!(format!("Plane{GRID_NAME_SUFFIX}"), "Plane_grid");
/// ```
pub const GRID_NAME_SUFFIX: &str = "_grid";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of candidate lattice points for one run.
///
/// Safety limit to prevent memory exhaustion when the step is tiny compared
/// to the silhouette's bounding box.
///
/// # Examples
/// ```
/// use config::constants::MAX_GRID_POINTS;
/// let candidates = 1_000 * 1_000;
/// assert!(candidates < MAX_GRID_POINTS);
/// ```
pub const MAX_GRID_POINTS: usize = 25_000_000;

// =============================================================================
// RUN CONFIGURATION
// =============================================================================

/// Immutable, validated settings for one grid generation run.
///
/// # Examples
/// ```
/// use config::constants::GridConfig;
/// let config = GridConfig::default();
/// assert!(config.step > 0.0);
/// assert_eq!(config.max_face_sides, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Grid spacing in world units.
    pub step: f64,
    /// Largest face the fill step may emit.
    pub max_face_sides: usize,
}

impl GridConfig {
    /// Builds a configuration, rejecting non-positive or non-finite steps and
    /// side counts below a triangle.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GridConfig;
    /// let cfg = GridConfig::new(0.5, 4).expect("valid config");
    /// assert_eq!(cfg.step, 0.5);
    /// assert!(GridConfig::new(0.0, 4).is_err());
    /// ```
    pub fn new(step: f64, max_face_sides: usize) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        if max_face_sides < MIN_FACE_SIDES {
            return Err(ConfigError::InvalidFaceSides(max_face_sides));
        }
        Ok(Self {
            step,
            max_face_sides,
        })
    }

    /// Builds a configuration with the given step and the default side limit.
    pub fn with_step(step: f64) -> Result<Self, ConfigError> {
        Self::new(step, MAX_FACE_SIDES)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            max_face_sides: MAX_FACE_SIDES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the step is zero, negative, NaN or infinite.
    InvalidStep(f64),
    /// Raised when the face side limit cannot form a polygon.
    InvalidFaceSides(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStep(value) => {
                write!(f, "step must be a positive finite number: {value}")
            }
            ConfigError::InvalidFaceSides(value) => {
                write!(f, "max_face_sides must be >= {MIN_FACE_SIDES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Quantizes a coordinate to an integer key at the given scale.
///
/// Two coordinates with the same key are considered the same position by the
/// deduplication maps. The key is the bit pattern of the rounded scaled value,
/// so it never saturates: coordinates far from the origin keep distinct keys
/// as long as they differ by more than one quantization step.
///
/// # Examples
/// ```
/// use config::constants::{quantize, VERTEX_KEY_SCALE};
/// assert_eq!(quantize(0.5, VERTEX_KEY_SCALE), quantize(0.5 + 1e-12, VERTEX_KEY_SCALE));
/// assert_ne!(quantize(0.5, VERTEX_KEY_SCALE), quantize(0.5 + 1e-9, VERTEX_KEY_SCALE));
/// assert_ne!(quantize(2.0e9, VERTEX_KEY_SCALE), quantize(2.0e9 + 1.0, VERTEX_KEY_SCALE));
/// ```
#[inline]
pub fn quantize(value: f64, scale: f64) -> u64 {
    // `+ 0.0` folds -0.0 onto 0.0
    ((value * scale).round() + 0.0).to_bits()
}
