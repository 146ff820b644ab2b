#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod analysis;
pub mod config;
pub mod curve;
pub mod dataset;
pub mod errors;
pub mod hysteresis;
pub mod report;
pub mod response;

pub use analysis::{run_analysis, AnalysisSummary, Breakpoints};
pub use config::{LoadSweep, PushoverConfig};
pub use curve::{linspace, CurvePoint, PushoverCurve};
pub use dataset::{feature_row, TrainingSet, DEFAULT_NOISE_FRACTION};
pub use errors::{AnalysisError, ConfigError, InputError, LoopError, ParameterError, SequenceError};
pub use hysteresis::{loop_area, HysteresisLoop, LoopFeatures};
pub use report::render_summary;
pub use response::{PushoverModel, Regime, Response, ResponseParameters};
