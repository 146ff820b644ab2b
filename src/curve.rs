//! Capacity curves traced by sweeping a pushover model over a sequence of loads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::SequenceError;
use crate::response::{PushoverModel, Regime};

/// One sample of a capacity curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Applied load in newtons.
    pub load: f64,
    /// Displacement in metres.
    pub displacement: f64,
    /// Branch of the response law that produced the sample.
    pub regime: Regime,
}

impl CurvePoint {
    /// Create a [`CurvePoint`] with explicit values.
    #[must_use]
    pub const fn new(load: f64, displacement: f64, regime: Regime) -> Self {
        Self {
            load,
            displacement,
            regime,
        }
    }
}

/// Evenly spaced values from `start` to `end` inclusive.
///
/// A single sample yields `start`; zero samples yield an empty vector.
///
/// # Examples
/// ```
/// use pushover::linspace;
///
/// let loads = linspace(0.0, 1_000.0, 5);
/// assert_eq!(loads, vec![0.0, 250.0, 500.0, 750.0, 1_000.0]);
/// ```
#[must_use]
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (samples - 1) as f64;
            (0..samples)
                .map(|idx| {
                    if idx == samples - 1 {
                        end
                    } else {
                        start + step * idx as f64
                    }
                })
                .collect()
        }
    }
}

/// Ordered force-displacement samples produced by a [`PushoverModel`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PushoverCurve {
    /// Samples in the order the loads were supplied.
    points: Vec<CurvePoint>,
}

impl PushoverCurve {
    /// Evaluate `model` at every load, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError`] for the first load that is negative or not finite.
    pub fn trace(model: &PushoverModel, loads: &[f64]) -> Result<Self, SequenceError> {
        let points = loads
            .iter()
            .enumerate()
            .map(|(index, &load)| {
                model
                    .response(load)
                    .map(|response| {
                        CurvePoint::new(response.load, response.displacement, response.regime)
                    })
                    .map_err(|source| SequenceError { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points })
    }

    /// All samples of the curve.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Loads of every sample, in order.
    #[must_use]
    pub fn loads(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.load).collect()
    }

    /// Displacements of every sample, in order.
    #[must_use]
    pub fn displacements(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.displacement).collect()
    }

    /// Largest displacement on the curve, if any.
    #[must_use]
    pub fn peak_displacement(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|point| point.displacement)
            .reduce(f64::max)
    }

    /// First sample, in curve order, that sits on the collapse plateau.
    #[must_use]
    pub fn first_saturated(&self) -> Option<CurvePoint> {
        self.points
            .iter()
            .copied()
            .find(|point| point.regime == Regime::Saturated)
    }

    /// Number of samples falling in each regime. Regimes with no samples are omitted.
    #[must_use]
    pub fn regime_counts(&self) -> BTreeMap<Regime, usize> {
        let mut counts = BTreeMap::new();
        for point in &self.points {
            *counts.entry(point.regime).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::errors::InputError;
    use crate::response::ResponseParameters;

    fn reference_model() -> PushoverModel {
        PushoverModel::new(ResponseParameters::default()).expect("default parameters are valid")
    }

    #[test]
    fn linspace_includes_both_ends() {
        let values = linspace(0.0, 1_000.0, 200);
        assert_eq!(values.len(), 200);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[199], 1_000.0);
        assert_relative_eq!(values[1], 1_000.0 / 199.0);
    }

    #[test]
    fn linspace_degenerate_sample_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn trace_preserves_order_and_regimes() {
        let curve = PushoverCurve::trace(&reference_model(), &[2_500.0, 100.0, 900.0])
            .expect("valid loads");
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.loads(), vec![2_500.0, 100.0, 900.0]);
        assert_relative_eq!(curve.displacements()[0], 2.0);
        assert_relative_eq!(curve.displacements()[1], 0.1);
        assert_relative_eq!(curve.displacements()[2], 2.1);
        assert_eq!(curve.points()[2].regime, Regime::Hardening);
    }

    #[test]
    fn trace_rejects_invalid_load() {
        let error = PushoverCurve::trace(&reference_model(), &[0.0, -3.0])
            .expect_err("negative load rejected");
        assert_eq!(error.index, 1);
        assert_eq!(error.source, InputError::NegativeLoad { load: -3.0 });
    }

    #[test]
    fn summary_statistics() {
        let loads = linspace(0.0, 3_000.0, 7);
        let curve = PushoverCurve::trace(&reference_model(), &loads).expect("valid loads");
        let counts = curve.regime_counts();
        assert_eq!(counts.get(&Regime::Elastic), Some(&2));
        assert_eq!(counts.get(&Regime::Hardening), Some(&2));
        assert_eq!(counts.get(&Regime::Saturated), Some(&3));

        let onset = curve.first_saturated().expect("curve reaches the plateau");
        assert_relative_eq!(onset.load, 2_000.0);
        assert_relative_eq!(onset.displacement, 2.0);

        // 1500 N sits just below the ultimate load on the steep hardening branch.
        assert_relative_eq!(curve.peak_displacement().unwrap(), 4.5);
    }

    #[test]
    fn empty_curve_has_no_statistics() {
        let curve = PushoverCurve::default();
        assert!(curve.is_empty());
        assert!(curve.peak_displacement().is_none());
        assert!(curve.first_saturated().is_none());
        assert!(curve.regime_counts().is_empty());
    }
}
