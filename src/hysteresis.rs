//! Enclosed area of closed force-deformation loops.
//!
//! The area of a hysteresis loop is the energy dissipated in one load cycle. It is
//! computed with the shoelace formula over the implicitly closed polygon, taking the
//! absolute value so clockwise and counter-clockwise traversals agree.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::errors::LoopError;

/// Closed polygon in the deformation-force plane.
///
/// The last vertex connects back to the first; the caller does not need to repeat it.
#[derive(Clone, Debug, PartialEq)]
pub struct HysteresisLoop {
    /// Deformation coordinate of every vertex.
    deformation: DVector<f64>,
    /// Force coordinate of every vertex.
    force: DVector<f64>,
}

/// Two-feature summary of a loop consumed by damage-severity classifiers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopFeatures {
    /// Largest deformation reached during the cycle.
    pub peak_deformation: f64,
    /// Enclosed area of the loop.
    pub area: f64,
}

impl HysteresisLoop {
    /// Pair deformation and force samples into a loop.
    ///
    /// # Errors
    ///
    /// Returns [`LoopError::LengthMismatch`] when the sequences differ in length and
    /// [`LoopError::NonFiniteCoordinate`] when any coordinate is NaN or infinite.
    pub fn new(deformation: &[f64], force: &[f64]) -> Result<Self, LoopError> {
        if deformation.len() != force.len() {
            return Err(LoopError::LengthMismatch {
                deformation: deformation.len(),
                force: force.len(),
            });
        }
        if let Some(index) = deformation
            .iter()
            .zip(force)
            .position(|(x, y)| !(x.is_finite() && y.is_finite()))
        {
            return Err(LoopError::NonFiniteCoordinate { index });
        }
        Ok(Self {
            deformation: DVector::from_column_slice(deformation),
            force: DVector::from_column_slice(force),
        })
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deformation.len()
    }

    /// Whether the loop has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deformation.is_empty()
    }

    /// Enclosed area, `0.5 * |x · roll(y) - y · roll(x)|`.
    ///
    /// # Examples
    /// ```
    /// use pushover::HysteresisLoop;
    ///
    /// let square = HysteresisLoop::new(&[0.0, 2.0, 2.0, 0.0], &[0.0, 0.0, 2.0, 2.0])?;
    /// assert_eq!(square.area(), 4.0);
    /// # Ok::<(), pushover::LoopError>(())
    /// ```
    #[must_use]
    pub fn area(&self) -> f64 {
        let rolled_force = roll(&self.force);
        let rolled_deformation = roll(&self.deformation);
        0.5 * (self.deformation.dot(&rolled_force) - self.force.dot(&rolled_deformation)).abs()
    }

    /// Largest deformation in the loop, or `None` for an empty loop.
    #[must_use]
    pub fn peak_deformation(&self) -> Option<f64> {
        self.deformation.iter().copied().reduce(f64::max)
    }

    /// Peak deformation and area, or `None` for an empty loop.
    #[must_use]
    pub fn features(&self) -> Option<LoopFeatures> {
        self.peak_deformation()
            .map(|peak_deformation| LoopFeatures {
                peak_deformation,
                area: self.area(),
            })
    }
}

/// Area enclosed by the loop through `(deformation[i], force[i])`.
///
/// # Errors
///
/// Returns [`LoopError`] under the same conditions as [`HysteresisLoop::new`].
pub fn loop_area(deformation: &[f64], force: &[f64]) -> Result<f64, LoopError> {
    HysteresisLoop::new(deformation, force).map(|cycle| cycle.area())
}

/// Shift every element one position forward, wrapping the last element to the front.
fn roll(values: &DVector<f64>) -> DVector<f64> {
    let n = values.len();
    DVector::from_fn(n, |row, _| values[(row + n - 1) % n])
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn unit_square_has_unit_area() {
        let area = loop_area(&[0.0, 1.0, 1.0, 0.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
        assert_relative_eq!(area, 1.0);
    }

    #[test]
    fn traversal_direction_does_not_change_area() {
        let x = [0.0, 4.0, 5.0, 1.0, -1.0];
        let y = [0.0, -1.0, 3.0, 4.0, 2.0];
        let forward = loop_area(&x, &y).unwrap();

        let mut x_rev = x;
        let mut y_rev = y;
        x_rev.reverse();
        y_rev.reverse();
        let backward = loop_area(&x_rev, &y_rev).unwrap();

        assert!(forward > 0.0);
        assert_relative_eq!(forward, backward, epsilon = 1.0e-12);
    }

    #[test]
    fn rotation_of_start_vertex_does_not_change_area() {
        let x = vec![0.0, 3.0, 4.0, 1.0];
        let y = vec![0.0, 0.5, 2.0, 3.0];
        let reference = loop_area(&x, &y).unwrap();
        for shift in 1..x.len() {
            let mut xs = x.clone();
            let mut ys = y.clone();
            xs.rotate_left(shift);
            ys.rotate_left(shift);
            assert_relative_eq!(loop_area(&xs, &ys).unwrap(), reference, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn ellipse_matches_closed_form() {
        // x = a sin t, y = b cos t traces an ellipse of area pi * a * b.
        let samples = 2_000;
        let (a, b) = (2.0, 3.0);
        let t: Vec<f64> = (0..samples)
            .map(|idx| 2.0 * PI * idx as f64 / samples as f64)
            .collect();
        let x: Vec<f64> = t.iter().map(|t| a * t.sin()).collect();
        let y: Vec<f64> = t.iter().map(|t| b * t.cos()).collect();
        assert_relative_eq!(loop_area(&x, &y).unwrap(), PI * a * b, max_relative = 1.0e-4);
    }

    #[test]
    fn degenerate_loops_have_zero_area() {
        assert_eq!(loop_area(&[], &[]).unwrap(), 0.0);
        assert_eq!(loop_area(&[1.0], &[2.0]).unwrap(), 0.0);
        assert_eq!(loop_area(&[1.0, 3.0], &[2.0, -4.0]).unwrap(), 0.0);
        assert_eq!(loop_area(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap(), 0.0);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert_eq!(
            loop_area(&[0.0, 1.0, 2.0], &[0.0, 1.0]),
            Err(LoopError::LengthMismatch {
                deformation: 3,
                force: 2
            })
        );
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        assert_eq!(
            HysteresisLoop::new(&[0.0, 1.0, 2.0], &[0.0, f64::NAN, 1.0]),
            Err(LoopError::NonFiniteCoordinate { index: 1 })
        );
    }

    #[test]
    fn features_report_peak_deformation_and_area() {
        let cycle = HysteresisLoop::new(&[-1.0, 1.0, 1.0, -1.0], &[-2.0, -2.0, 2.0, 2.0]).unwrap();
        let features = cycle.features().expect("non-empty loop");
        assert_relative_eq!(features.peak_deformation, 1.0);
        assert_relative_eq!(features.area, 8.0);
        assert_eq!(cycle.len(), 4);

        let empty = HysteresisLoop::new(&[], &[]).unwrap();
        assert!(empty.is_empty());
        assert!(empty.features().is_none());
    }
}
