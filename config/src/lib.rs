//! # Config Crate
//!
//! Centralized configuration constants for the GridIt pipeline.
//! All tolerances, quantization scales and tunable parameters are defined
//! here so the geometry stages agree on exactly the same numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GridConfig, ON_EDGE_EPSILON, DEFAULT_STEP};
//!
//! // Collinearity tests use ON_EDGE_EPSILON
//! let cross: f64 = 1e-11;
//! assert!(cross.abs() < ON_EDGE_EPSILON);
//!
//! // A validated configuration for one run
//! let cfg = GridConfig::with_step(0.25).unwrap();
//! assert_eq!(cfg.step, 0.25);
//! assert!(DEFAULT_STEP > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dedup tolerances are topology**: the quantization scales decide which
//!   points become the same vertex, so they are fixed here and nowhere else

pub mod constants;
