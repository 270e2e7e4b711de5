//! # Error Types
//!
//! Error types for the grid generation pipeline.
//!
//! ## Error Policy
//!
//! - Geometry-stage errors are terminal for the run: no partial mesh is emitted
//! - Non-manifold boundaries and empty interiors are not errors (see the
//!   `boundary` and `builder` modules)
//! - Errors carry enough context to be shown to the user as a single message

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating a grid mesh.
///
/// ## Example
///
/// ```rust
/// use gridit::GridError;
///
/// let err = GridError::DegenerateBoundary { count: 2 };
/// assert!(err.to_string().contains("2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// No active object was supplied by the host.
    #[error("No object selected: select a mesh object before running")]
    NoSelection,

    /// The active object is not a mesh.
    #[error("Object '{name}' is a {kind}, not a mesh")]
    WrongType {
        /// Name of the offending object
        name: String,
        /// Kind reported by the host
        kind: String,
    },

    /// The source mesh has no boundary edges.
    #[error("Unable to find a boundary loop on the selected mesh")]
    NoBoundaryFound,

    /// The boundary loop is too short to enclose an area.
    #[error("Degenerate boundary: {count} point(s), at least 3 required")]
    DegenerateBoundary {
        /// Number of points in the extracted loop
        count: usize,
    },

    /// The grid step is zero, negative or not finite.
    #[error("Invalid grid step: {0}")]
    InvalidStep(f64),

    /// Input connectivity references missing vertices.
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// What was wrong
        message: String,
    },

    /// The lattice covering the silhouette exceeds the safety limit.
    #[error("Too many grid points: {count} (max: {max})")]
    TooManyGridPoints {
        /// Requested lattice size
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// Settings were rejected before any geometry ran.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong
        message: String,
    },

    /// The edge-network fill could not produce faces.
    #[error("Face fill failed: {message}")]
    FillFailed {
        /// What was wrong
        message: String,
    },
}

impl GridError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates a fill failure error.
    pub fn fill_failed(message: impl Into<String>) -> Self {
        Self::FillFailed {
            message: message.into(),
        }
    }
}

impl From<ConfigError> for GridError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidStep(step) => Self::InvalidStep(step),
            err @ ConfigError::InvalidFaceSides(_) => Self::invalid_config(err.to_string()),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for grid generation.
pub type GridResult<T> = Result<T, GridError>;

// =============================================================================
// TESTS
// =============================================================================
