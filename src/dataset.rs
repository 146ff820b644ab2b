//! Training samples for regressors that learn the pushover curve.
//!
//! Each load becomes the feature row `[load, load² / 1000]`. The regression target is the
//! model displacement with zero-mean Gaussian noise whose standard deviation is a fixed
//! fraction of that displacement. The random generator is always supplied by the caller.

use std::io;

use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;

use crate::curve::PushoverCurve;
use crate::errors::AnalysisError;
use crate::response::PushoverModel;

/// Standard deviation of the target noise as a fraction of the displacement.
pub const DEFAULT_NOISE_FRACTION: f64 = 0.01;

/// Scale applied to the squared load in the second feature column.
const QUADRATIC_FEATURE_SCALE: f64 = 1_000.0;

/// Feature row derived from a single load.
#[must_use]
pub fn feature_row(load: f64) -> [f64; 2] {
    [load, load * load / QUADRATIC_FEATURE_SCALE]
}

/// Features, clean displacements and noisy targets for a set of loads.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingSet {
    /// One row per load, columns `[load, load² / 1000]`.
    features: Array2<f64>,
    /// Noise-free model displacements.
    displacements: Array1<f64>,
    /// Displacements with additive noise.
    targets: Array1<f64>,
}

/// CSV record for one training sample.
#[derive(Serialize)]
struct Record {
    /// Applied load.
    load: f64,
    /// Squared load over the feature scale.
    load_sq_scaled: f64,
    /// Noise-free displacement.
    displacement: f64,
    /// Noisy target.
    target: f64,
}

fn check_noise_fraction(noise_fraction: f64) -> Result<(), AnalysisError> {
    if noise_fraction.is_finite() && noise_fraction >= 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidNoise {
            fraction: noise_fraction,
        })
    }
}

impl TrainingSet {
    /// Evaluate `model` at every load and perturb each displacement independently.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidNoise`] when `noise_fraction` is negative or not
    /// finite, and [`AnalysisError::Load`] when a load is rejected by the model.
    ///
    /// # Examples
    /// ```
    /// use pushover::{PushoverModel, ResponseParameters, TrainingSet};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let model = PushoverModel::new(ResponseParameters::default())?;
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let set = TrainingSet::generate(&model, &[0.0, 250.0, 1_000.0], 0.01, &mut rng)?;
    /// assert_eq!(set.features().shape(), &[3, 2]);
    /// assert_eq!(set.features()[[2, 1]], 1_000.0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        model: &PushoverModel,
        loads: &[f64],
        noise_fraction: f64,
        rng: &mut R,
    ) -> Result<Self, AnalysisError> {
        check_noise_fraction(noise_fraction)?;
        let curve = PushoverCurve::trace(model, loads)?;
        Self::from_curve(&curve, noise_fraction, rng)
    }

    /// Build samples from an already traced curve without evaluating the model again.
    ///
    /// The loads and clean displacements are those of `curve`; only the noise is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidNoise`] when `noise_fraction` is negative or not
    /// finite, or when the noise it implies for a sample is not finite.
    pub fn from_curve<R: Rng + ?Sized>(
        curve: &PushoverCurve,
        noise_fraction: f64,
        rng: &mut R,
    ) -> Result<Self, AnalysisError> {
        check_noise_fraction(noise_fraction)?;
        let points = curve.points();
        let features = Array2::from_shape_fn((points.len(), 2), |(row, col)| {
            feature_row(points[row].load)[col]
        });
        let displacements: Array1<f64> = points.iter().map(|point| point.displacement).collect();

        let mut targets = Array1::<f64>::zeros(points.len());
        for (target, &displacement) in targets.iter_mut().zip(displacements.iter()) {
            let noise = Normal::new(0.0, noise_fraction * displacement).map_err(|_| {
                AnalysisError::InvalidNoise {
                    fraction: noise_fraction,
                }
            })?;
            *target = displacement + noise.sample(rng);
        }

        log::debug!(
            "generated {} training samples with noise fraction {noise_fraction}",
            points.len()
        );
        Ok(Self {
            features,
            displacements,
            targets,
        })
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the set holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Feature matrix with one row per sample.
    #[must_use]
    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    /// Noise-free displacements.
    #[must_use]
    pub fn displacements(&self) -> &Array1<f64> {
        &self.displacements
    }

    /// Noisy regression targets.
    #[must_use]
    pub fn targets(&self) -> &Array1<f64> {
        &self.targets
    }

    /// Write the samples as CSV with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`csv::Error`] when serialisation or the underlying writer fails.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (row, (&displacement, &target)) in self
            .features
            .rows()
            .into_iter()
            .zip(self.displacements.iter().zip(self.targets.iter()))
        {
            csv_writer.serialize(Record {
                load: row[0],
                load_sq_scaled: row[1],
                displacement,
                target,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
