//! Piecewise force-displacement law for a single-degree-of-freedom frame under pushover load.

use serde::{Deserialize, Serialize};

use crate::errors::{InputError, ParameterError, SequenceError};

/// Configuration of the pushover response law.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// Elastic stiffness in newtons per metre.
    pub k_elastic: f64,
    /// Load at first yield in newtons.
    pub yield_force: f64,
    /// Ratio of ultimate to yield displacement.
    pub ductility: f64,
}

impl ResponseParameters {
    /// Create a parameter set with explicit values.
    #[must_use]
    pub const fn new(k_elastic: f64, yield_force: f64, ductility: f64) -> Self {
        Self {
            k_elastic,
            yield_force,
            ductility,
        }
    }

    /// Check that the parameters describe a well-defined response law.
    ///
    /// # Errors
    ///
    /// Returns the [`ParameterError`] for the first offending value, checked in the order
    /// stiffness, yield force, ductility. Inputs that are valid on their own are still
    /// rejected with [`ParameterError::NonFiniteBreakpoint`] when the yield displacement,
    /// ultimate load, ultimate displacement or hardening limit overflows.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.k_elastic.is_finite() && self.k_elastic > 0.0) {
            return Err(ParameterError::NonPositiveStiffness {
                k_elastic: self.k_elastic,
            });
        }
        if !(self.yield_force.is_finite() && self.yield_force > 0.0) {
            return Err(ParameterError::NonPositiveYieldForce {
                yield_force: self.yield_force,
            });
        }
        if !(self.ductility.is_finite() && self.ductility >= 1.0) {
            return Err(ParameterError::InsufficientDuctility {
                ductility: self.ductility,
            });
        }

        let yield_displacement = self.yield_force / self.k_elastic;
        let breakpoints = [
            ("yield displacement", yield_displacement),
            ("ultimate load", self.yield_force * self.ductility),
            ("ultimate displacement", self.ductility * yield_displacement),
            ("hardening displacement limit", self.hardening_limit()),
        ];
        for (breakpoint, value) in breakpoints {
            if !value.is_finite() {
                return Err(ParameterError::NonFiniteBreakpoint { breakpoint, value });
            }
        }
        Ok(())
    }

    /// Displacement the hardening branch approaches just below the ultimate load.
    fn hardening_limit(&self) -> f64 {
        self.yield_force / self.k_elastic
            + (self.yield_force * self.ductility - self.yield_force)
                / (self.k_elastic / self.ductility)
    }
}

impl Default for ResponseParameters {
    fn default() -> Self {
        Self::new(1_000.0, 500.0, 4.0)
    }
}

/// Branch of the response law that governs a given load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Load at or below the yield force; displacement proportional to load.
    Elastic,
    /// Load between the yield force and the ultimate load; reduced stiffness.
    Hardening,
    /// Load at or beyond the ultimate load; displacement held at the collapse plateau.
    Saturated,
}

impl Regime {
    /// Short lowercase label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Elastic => "elastic",
            Self::Hardening => "hardening",
            Self::Saturated => "saturated",
        }
    }
}

/// Displacement of the frame at one load, tagged with the governing regime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Applied load in newtons.
    pub load: f64,
    /// Resulting displacement in metres.
    pub displacement: f64,
    /// Branch of the law that produced the displacement.
    pub regime: Regime,
}

/// Stateless pushover response model built from validated [`ResponseParameters`].
///
/// The law has three branches:
///
/// * elastic, `load <= yield_force`: `load / k_elastic`;
/// * hardening, `load < yield_force * ductility`: the yield displacement plus the excess
///   load over the post-yield stiffness `k_elastic / ductility`;
/// * saturated, otherwise: the ultimate displacement `ductility * yield_force / k_elastic`.
///
/// The elastic and hardening branches meet at the yield point. The hardening branch
/// overshoots the collapse plateau before the ultimate load is reached whenever
/// `ductility > 1`, so the curve drops back onto the plateau at `yield_force * ductility`.
///
/// # Examples
///
/// ```
/// use pushover::{PushoverModel, Regime, ResponseParameters};
///
/// let model = PushoverModel::new(ResponseParameters::new(1_000.0, 500.0, 4.0))?;
/// assert_eq!(model.displacement(250.0)?, 0.25);
/// assert_eq!(model.displacement(1_000.0)?, 2.5);
/// assert_eq!(model.displacement(10_000.0)?, 2.0);
/// assert_eq!(model.regime(1_000.0)?, Regime::Hardening);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PushoverModel {
    /// Validated response parameters.
    parameters: ResponseParameters,
}

impl PushoverModel {
    /// Build a model, rejecting parameters that make the law undefined.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] when the stiffness or yield force is not strictly positive,
    /// or when the ductility is below one.
    pub fn new(parameters: ResponseParameters) -> Result<Self, ParameterError> {
        parameters.validate()?;
        Ok(Self { parameters })
    }

    /// Parameters the model was built from.
    #[must_use]
    pub const fn parameters(&self) -> ResponseParameters {
        self.parameters
    }

    /// Displacement at first yield in metres.
    #[must_use]
    pub fn yield_displacement(&self) -> f64 {
        self.parameters.yield_force / self.parameters.k_elastic
    }

    /// Displacement on the collapse plateau in metres.
    #[must_use]
    pub fn ultimate_displacement(&self) -> f64 {
        self.parameters.ductility * self.yield_displacement()
    }

    /// Stiffness of the hardening branch in newtons per metre.
    #[must_use]
    pub fn post_yield_stiffness(&self) -> f64 {
        self.parameters.k_elastic / self.parameters.ductility
    }

    /// Load at which the response saturates, in newtons.
    #[must_use]
    pub fn ultimate_load(&self) -> f64 {
        self.parameters.yield_force * self.parameters.ductility
    }

    /// Upper bound on any displacement the model returns, in metres.
    ///
    /// This is the collapse plateau or, when `ductility > 1`, the larger value the
    /// hardening branch approaches just below the ultimate load.
    #[must_use]
    pub fn displacement_bound(&self) -> f64 {
        self.ultimate_displacement().max(self.parameters.hardening_limit())
    }

    /// Classify a load into the branch of the law that governs it.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the load is negative or not finite.
    pub fn regime(&self, load: f64) -> Result<Regime, InputError> {
        check_load(load)?;
        Ok(self.classify(load))
    }

    /// Displacement produced by a single load.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the load is negative or not finite.
    pub fn displacement(&self, load: f64) -> Result<f64, InputError> {
        self.response(load).map(|response| response.displacement)
    }

    /// Displacement produced by a single load together with its governing regime.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the load is negative or not finite.
    pub fn response(&self, load: f64) -> Result<Response, InputError> {
        check_load(load)?;
        let regime = self.classify(load);
        let displacement = match regime {
            Regime::Elastic => load / self.parameters.k_elastic,
            Regime::Hardening => {
                self.yield_displacement()
                    + (load - self.parameters.yield_force) / self.post_yield_stiffness()
            }
            Regime::Saturated => self.ultimate_displacement(),
        };
        Ok(Response {
            load,
            displacement,
            regime,
        })
    }

    /// Displacements for an ordered sequence of loads, aligned index-for-index.
    ///
    /// Each load is evaluated independently; no ordering of the input is required.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError`] describing the first load that is negative or not finite.
    pub fn displacements(&self, loads: &[f64]) -> Result<Vec<f64>, SequenceError> {
        loads
            .iter()
            .enumerate()
            .map(|(index, &load)| {
                self.displacement(load)
                    .map_err(|source| SequenceError { index, source })
            })
            .collect()
    }

    /// Regime lookup for a load that has already been checked.
    fn classify(&self, load: f64) -> Regime {
        if load <= self.parameters.yield_force {
            Regime::Elastic
        } else if load < self.ultimate_load() {
            Regime::Hardening
        } else {
            Regime::Saturated
        }
    }
}

/// Reject loads outside the domain of the response law.
fn check_load(load: f64) -> Result<(), InputError> {
    if !load.is_finite() {
        return Err(InputError::NonFiniteLoad { load });
    }
    if load < 0.0 {
        return Err(InputError::NegativeLoad { load });
    }
    Ok(())
}
