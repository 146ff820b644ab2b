//! Error types produced while configuring or evaluating pushover models.

use thiserror::Error;

/// Error returned when the parameters of a [`PushoverModel`](crate::PushoverModel) are rejected.
///
/// Non-finite values are reported through the same variants as out-of-range ones, since
/// either way the piecewise law is undefined.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ParameterError {
    /// Returned when the elastic stiffness is zero, negative or not finite.
    #[error("elastic stiffness must be positive and finite (received {k_elastic})")]
    NonPositiveStiffness {
        /// Rejected elastic stiffness in newtons per metre.
        k_elastic: f64,
    },
    /// Returned when the yield force is zero, negative or not finite.
    #[error("yield force must be positive and finite (received {yield_force})")]
    NonPositiveYieldForce {
        /// Rejected yield force in newtons.
        yield_force: f64,
    },
    /// Returned when the ductility is below one or not finite.
    #[error("ductility must be a finite value of at least 1 (received {ductility})")]
    InsufficientDuctility {
        /// Rejected ductility ratio.
        ductility: f64,
    },
    /// Returned when the inputs are individually valid but a derived breakpoint overflows.
    #[error("{breakpoint} is not finite for these parameters (evaluates to {value})")]
    NonFiniteBreakpoint {
        /// Name of the derived quantity.
        breakpoint: &'static str,
        /// Value the quantity evaluated to.
        value: f64,
    },
}

/// Error returned when a single load sample cannot be evaluated.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InputError {
    /// Returned when the load is below zero.
    #[error("load must be non-negative (received {load})")]
    NegativeLoad {
        /// Rejected load in newtons.
        load: f64,
    },
    /// Returned when the load is NaN or infinite.
    #[error("load must be finite (received {load})")]
    NonFiniteLoad {
        /// Rejected load in newtons.
        load: f64,
    },
}

/// Error returned when a sequence of loads contains an invalid sample.
///
/// # Examples
///
/// ```
/// use pushover::{InputError, PushoverModel, ResponseParameters};
///
/// let model = PushoverModel::new(ResponseParameters::default()).expect("default parameters");
/// let error = model
///     .displacements(&[0.0, 100.0, -5.0])
///     .expect_err("negative load is rejected");
/// assert_eq!(error.index, 2);
/// assert_eq!(error.source, InputError::NegativeLoad { load: -5.0 });
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("load sample {index} is invalid: {source}")]
pub struct SequenceError {
    /// Position of the first offending sample.
    pub index: usize,
    /// Reason the sample was rejected.
    #[source]
    pub source: InputError,
}

/// Error returned when a hysteresis loop cannot be assembled.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum LoopError {
    /// Returned when the deformation and force sequences differ in length.
    #[error("loop has {deformation} deformation samples but {force} force samples")]
    LengthMismatch {
        /// Number of deformation samples supplied.
        deformation: usize,
        /// Number of force samples supplied.
        force: usize,
    },
    /// Returned when a coordinate of the loop is NaN or infinite.
    #[error("loop vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending vertex.
        index: usize,
    },
}

/// Error returned when a pushover analysis run fails.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Returned when the response parameters are invalid.
    #[error("invalid response parameters: {0}")]
    Parameters(#[from] ParameterError),
    /// Returned when one of the swept loads is invalid.
    #[error(transparent)]
    Load(#[from] SequenceError),
    /// Returned when the load sweep requests no samples.
    #[error("load sweep must contain at least one sample")]
    EmptySweep,
    /// Returned when the maximum load of the sweep is negative or not finite.
    #[error("maximum sweep load must be non-negative and finite (received {max_load})")]
    InvalidSweep {
        /// Rejected maximum load in newtons.
        max_load: f64,
    },
    /// Returned when the noise fraction is negative or not finite.
    #[error("noise fraction must be non-negative and finite (received {fraction})")]
    InvalidNoise {
        /// Rejected noise fraction.
        fraction: f64,
    },
}

/// Error returned when a run configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the configuration file cannot be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    /// Returned when the configuration file is not valid JSON for a run.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// Returned when the configuration parses but describes an invalid run.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] AnalysisError),
}
