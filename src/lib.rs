#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod chart;
mod deflection;
mod errors;
mod evaluator;
mod frequency;
mod parameters;
mod resonance;

pub use chart::{render_deflection_chart, ChartOptions};
pub use deflection::{midspan_deflection_at, sample_times, simulate_deflection, DeflectionHistory};
pub use errors::{ParameterError, RenderError, ScenarioError};
pub use evaluator::{BeamResonanceEvaluator, Evaluation};
pub use frequency::{compute_natural_frequency, NaturalFrequency};
pub use parameters::{
    AnalysisSettings, BeamParameters, Scenario, DEFAULT_AMPLITUDE_SCALE,
    DEFAULT_RESONANCE_TOLERANCE, DEFAULT_SAMPLE_COUNT, GRAVITY,
};
pub use resonance::{assess_resonance, classify_resonance, ResonanceAssessment, ResonanceVerdict};
