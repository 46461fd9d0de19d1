//! Single-pass evaluation of a vehicle crossing.

use serde::Serialize;

use crate::deflection::{simulate_deflection, DeflectionHistory};
use crate::errors::ParameterError;
use crate::frequency::{compute_natural_frequency, NaturalFrequency};
use crate::parameters::{AnalysisSettings, BeamParameters, Scenario};
use crate::resonance::{assess_resonance, ResonanceAssessment};

/// Everything computed for one crossing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    /// Parameters that generated the result, exposed for reporting.
    pub parameters: BeamParameters,
    /// Settings that generated the result.
    pub settings: AnalysisSettings,
    /// Fundamental natural frequency of the beam.
    pub natural_frequency: NaturalFrequency,
    /// Comparison of the vehicle excitation with the natural frequency.
    pub resonance: ResonanceAssessment,
    /// Midspan deflection history across the crossing.
    pub deflection: DeflectionHistory,
}

/// Evaluates the natural frequency, resonance risk and deflection of a crossing.
///
/// The evaluator holds no results between calls; every call to
/// [`BeamResonanceEvaluator::evaluate`] recomputes from the stored inputs.
///
/// # Examples
/// ```
/// use bridge_resonance::{BeamResonanceEvaluator, ResonanceVerdict};
///
/// let evaluation = BeamResonanceEvaluator::default().evaluate().unwrap();
/// assert_eq!(evaluation.resonance.excitation_frequency, 0.25);
/// assert_eq!(evaluation.resonance.verdict, ResonanceVerdict::NoSignificantResonance);
/// assert_eq!(evaluation.deflection.len(), 500);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BeamResonanceEvaluator {
    /// Vehicle and beam properties.
    parameters: BeamParameters,
    /// Sampling and tolerance settings.
    settings: AnalysisSettings,
}

impl BeamResonanceEvaluator {
    /// Create an evaluator for the supplied crossing.
    #[must_use]
    pub const fn new(parameters: BeamParameters, settings: AnalysisSettings) -> Self {
        Self {
            parameters,
            settings,
        }
    }

    /// Create an evaluator from a loaded [`Scenario`].
    #[must_use]
    pub const fn from_scenario(scenario: Scenario) -> Self {
        Self::new(scenario.beam, scenario.analysis)
    }

    /// Beam and vehicle parameters.
    #[must_use]
    pub fn parameters(&self) -> &BeamParameters {
        &self.parameters
    }

    /// Analysis settings.
    #[must_use]
    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Run the natural frequency, resonance and deflection steps in order.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] when the parameters or settings are invalid. No
    /// partial result is produced.
    pub fn evaluate(&self) -> Result<Evaluation, ParameterError> {
        self.parameters.validate()?;
        self.settings.validate()?;

        let natural_frequency = compute_natural_frequency(&self.parameters)?;
        let resonance = assess_resonance(
            self.parameters.vehicle_speed,
            self.parameters.span,
            natural_frequency.hertz,
            self.settings.resonance_tolerance,
        )?;
        let deflection =
            simulate_deflection(&self.parameters, natural_frequency.angular, &self.settings)?;

        tracing::info!(
            natural_frequency = natural_frequency.hertz,
            excitation_frequency = resonance.excitation_frequency,
            verdict = ?resonance.verdict,
            "crossing evaluated"
        );

        Ok(Evaluation {
            parameters: self.parameters,
            settings: self.settings,
            natural_frequency,
            resonance,
            deflection,
        })
    }
}
