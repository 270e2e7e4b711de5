//! # Grid Lattice
//!
//! The family of axis-aligned grid lines covering a bounding box. Lines are
//! anchored at multiples of `step`: from `floor(min / step) * step` up to
//! `ceil(max / step) * step`, inclusive.
//!
//! Lattice point `(i, j)` sits at `(start_x + i * step, start_y + j * step)`.

#[cfg(test)]
mod tests;

use config::constants::MAX_GRID_POINTS;
use glam::DVec2;

use crate::error::{GridError, GridResult};
use crate::geometry::Bounds2;

/// Integer lattice coordinate of a grid point.
pub type LatticeIndex = (i64, i64);

/// Grid lines covering a bounding box at a fixed spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLines {
    /// Grid spacing
    pub step: f64,
    /// X of the first vertical line
    pub start_x: f64,
    /// Y of the first horizontal line
    pub start_y: f64,
    /// Number of vertical lines
    pub x_count: usize,
    /// Number of horizontal lines
    pub y_count: usize,
}

impl GridLines {
    /// Computes the grid lines covering `bounds` at spacing `step`.
    ///
    /// The lattice size is checked here, before any stage enumerates lines or
    /// points.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidStep`] if `step` is not positive and finite
    /// - [`GridError::TooManyGridPoints`] if the lattice would exceed
    ///   [`MAX_GRID_POINTS`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use gridit::{Bounds2, GridLines};
    ///
    /// let bounds = Bounds2 { min: DVec2::new(0.1, 0.0), max: DVec2::new(0.9, 1.0) };
    /// let lines = GridLines::covering(&bounds, 0.5).unwrap();
    /// assert_eq!(lines.x_lines().collect::<Vec<_>>(), vec![0.0, 0.5, 1.0]);
    /// ```
    pub fn covering(bounds: &Bounds2, step: f64) -> GridResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(GridError::InvalidStep(step));
        }

        let start_x = (bounds.min.x / step).floor() * step;
        let end_x = (bounds.max.x / step).ceil() * step;
        let start_y = (bounds.min.y / step).floor() * step;
        let end_y = (bounds.max.y / step).ceil() * step;

        // Counted in f64 so absurd spans cannot overflow before the check
        let x_count = line_count(start_x, end_x, step);
        let y_count = line_count(start_y, end_y, step);
        let points = x_count * y_count;
        if points.is_nan() || points > MAX_GRID_POINTS as f64 {
            return Err(GridError::TooManyGridPoints {
                count: points as usize,
                max: MAX_GRID_POINTS,
            });
        }

        Ok(Self {
            step,
            start_x,
            start_y,
            x_count: x_count as usize,
            y_count: y_count as usize,
        })
    }

    /// X coordinates of the vertical lines, ascending.
    pub fn x_lines(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.x_count).map(move |i| self.start_x + i as f64 * self.step)
    }

    /// Y coordinates of the horizontal lines, ascending.
    pub fn y_lines(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.y_count).map(move |j| self.start_y + j as f64 * self.step)
    }

    /// Total number of lattice points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.x_count.saturating_mul(self.y_count)
    }

    /// Position of lattice point `(i, j)`.
    #[inline]
    pub fn point(&self, index: LatticeIndex) -> DVec2 {
        DVec2::new(
            self.start_x + index.0 as f64 * self.step,
            self.start_y + index.1 as f64 * self.step,
        )
    }

    /// Every lattice point with its index, column by column.
    pub fn points(&self) -> impl Iterator<Item = (LatticeIndex, DVec2)> + '_ {
        (0..self.x_count as i64).flat_map(move |i| {
            (0..self.y_count as i64).map(move |j| ((i, j), self.point((i, j))))
        })
    }

    /// Index of the lattice point nearest to `point` (rounded).
    #[inline]
    pub fn nearest_index(&self, point: DVec2) -> LatticeIndex {
        (
            ((point.x - self.start_x) / self.step).round() as i64,
            ((point.y - self.start_y) / self.step).round() as i64,
        )
    }

    /// Index of the lower-left corner of the cell containing `point` (floored).
    #[inline]
    pub fn cell_of(&self, point: DVec2) -> LatticeIndex {
        (
            ((point.x - self.start_x) / self.step).floor() as i64,
            ((point.y - self.start_y) / self.step).floor() as i64,
        )
    }
}

fn line_count(start: f64, end: f64, step: f64) -> f64 {
    ((end - start) / step).round().max(0.0) + 1.0
}
