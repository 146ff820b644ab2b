//! End-to-end pushover analysis over a configured load sweep.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::PushoverConfig;
use crate::curve::{CurvePoint, PushoverCurve};
use crate::errors::AnalysisError;
use crate::response::{PushoverModel, Regime, ResponseParameters};

/// Breakpoints of the response law.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Breakpoints {
    /// Load at first yield in newtons.
    pub yield_load: f64,
    /// Displacement at first yield in metres.
    pub yield_displacement: f64,
    /// Load at which the response saturates in newtons.
    pub ultimate_load: f64,
    /// Displacement on the collapse plateau in metres.
    pub ultimate_displacement: f64,
    /// Stiffness of the hardening branch in newtons per metre.
    pub post_yield_stiffness: f64,
}

impl Breakpoints {
    /// Read the breakpoints off a model.
    #[must_use]
    pub fn of(model: &PushoverModel) -> Self {
        Self {
            yield_load: model.parameters().yield_force,
            yield_displacement: model.yield_displacement(),
            ultimate_load: model.ultimate_load(),
            ultimate_displacement: model.ultimate_displacement(),
            post_yield_stiffness: model.post_yield_stiffness(),
        }
    }
}

/// Summary of the results from a pushover analysis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisSummary {
    /// Parameters that generated the result.
    pub parameters: ResponseParameters,
    /// Breakpoints of the response law.
    pub breakpoints: Breakpoints,
    /// Number of sweep samples in each regime.
    pub regime_counts: BTreeMap<Regime, usize>,
    /// Largest displacement reached over the sweep.
    pub peak_displacement: f64,
    /// First sweep sample on the collapse plateau, if the sweep reaches it.
    pub collapse_onset: Option<CurvePoint>,
    /// Traced capacity curve.
    pub curve: PushoverCurve,
}

/// Trace the capacity curve for `config` and extract key response metrics.
///
/// # Errors
///
/// Returns [`AnalysisError`] when the configuration is invalid.
pub fn run_analysis(config: &PushoverConfig) -> Result<AnalysisSummary, AnalysisError> {
    config.validate()?;
    let model = PushoverModel::new(config.parameters)?;
    log::debug!("built pushover model from {:?}", config.parameters);

    let loads = config.sweep.loads();
    let curve = PushoverCurve::trace(&model, &loads)?;
    log::debug!(
        "traced {} samples up to {} N",
        curve.len(),
        config.sweep.max_load
    );

    let summary = AnalysisSummary {
        parameters: config.parameters,
        breakpoints: Breakpoints::of(&model),
        regime_counts: curve.regime_counts(),
        peak_displacement: curve.peak_displacement().unwrap_or(0.0),
        collapse_onset: curve.first_saturated(),
        curve,
    };
    log::info!(
        "pushover analysis complete: peak displacement {:.4} m, collapse {}",
        summary.peak_displacement,
        if summary.collapse_onset.is_some() {
            "reached"
        } else {
            "not reached"
        }
    );
    Ok(summary)
}
