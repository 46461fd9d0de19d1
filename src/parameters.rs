//! Physical parameters of the bridge and vehicle, plus the analysis settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ParameterError, ScenarioError};

/// Standard gravitational acceleration in metres per second squared.
pub const GRAVITY: f64 = 9.81;

/// Number of time samples taken across one crossing.
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// Symmetric relative tolerance inside which the crossing is flagged as resonant.
pub const DEFAULT_RESONANCE_TOLERANCE: f64 = 0.10;

/// Scaling applied to the static load ratio `m·g / (μ·L)` to obtain the
/// deflection amplitude.
///
/// This factor is an arbitrary placeholder carried over from the reference
/// calculation. It has no modal-participation derivation behind it and the
/// resulting deflections are only indicative.
pub const DEFAULT_AMPLITUDE_SCALE: f64 = 0.01;

/// Immutable description of the vehicle and the simply-supported beam, in SI units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BeamParameters {
    /// Vehicle mass in kilograms.
    pub vehicle_mass: f64,
    /// Span between the supports in metres.
    pub span: f64,
    /// Constant vehicle speed in metres per second.
    pub vehicle_speed: f64,
    /// Mass per unit length of the beam in kilograms per metre.
    pub linear_density: f64,
    /// Elastic modulus in pascals.
    pub elastic_modulus: f64,
    /// Second moment of area of the cross-section in metres to the fourth.
    pub second_moment_of_area: f64,
}

impl Default for BeamParameters {
    fn default() -> Self {
        Self {
            vehicle_mass: 1_000.0,
            span: 20.0,
            vehicle_speed: 10.0,
            linear_density: 200.0,
            elastic_modulus: 2.1e11,
            second_moment_of_area: 8.0e-5,
        }
    }
}

impl BeamParameters {
    /// Check that every quantity can be used in the closed-form expressions.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::DivisionByZero`] when the vehicle speed is zero and
    /// [`ParameterError::InvalidParameter`] for any other non-positive or non-finite value.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_positive("vehicle_mass", self.vehicle_mass)?;
        self.validate_beam()?;
        if self.vehicle_speed == 0.0 {
            return Err(ParameterError::DivisionByZero {
                name: "vehicle_speed",
                consequence: "the crossing duration",
            });
        }
        require_positive("vehicle_speed", self.vehicle_speed)
    }

    /// Check only the beam properties `L`, `μ`, `E` and `I`.
    ///
    /// The vehicle is ignored, so a bridge with no traffic still validates.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidParameter`] for a non-positive or non-finite
    /// beam property.
    pub fn validate_beam(&self) -> Result<(), ParameterError> {
        require_positive("span", self.span)?;
        require_positive("linear_density", self.linear_density)?;
        require_positive("elastic_modulus", self.elastic_modulus)?;
        require_positive("second_moment_of_area", self.second_moment_of_area)
    }

    /// Time taken by the vehicle to cross the span, `L / v`.
    #[must_use]
    pub fn crossing_duration(&self) -> f64 {
        self.span / self.vehicle_speed
    }

    /// Excitation frequency `v / (2L)`, taking the first-mode wavelength as twice the span.
    #[must_use]
    pub fn excitation_frequency(&self) -> f64 {
        self.vehicle_speed / (2.0 * self.span)
    }

    /// Indicative midspan amplitude `m·g / (μ·L) · scale` in metres.
    #[must_use]
    pub fn deflection_amplitude(&self, scale: f64) -> f64 {
        (self.vehicle_mass * GRAVITY) / (self.linear_density * self.span) * scale
    }
}

/// Numerical settings that shape the analysis but are not physical properties.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSettings {
    /// Number of evenly spaced samples across the crossing, endpoints included.
    pub sample_count: usize,
    /// Relative tolerance used by the resonance check.
    pub resonance_tolerance: f64,
    /// Amplitude scaling placeholder, see [`DEFAULT_AMPLITUDE_SCALE`].
    pub amplitude_scale: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            resonance_tolerance: DEFAULT_RESONANCE_TOLERANCE,
            amplitude_scale: DEFAULT_AMPLITUDE_SCALE,
        }
    }
}

impl AnalysisSettings {
    /// Check that the settings describe a usable time series and tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::TooFewSamples`] for fewer than two samples and
    /// [`ParameterError::InvalidParameter`] for a negative or non-finite tolerance or a
    /// non-finite amplitude scale.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.sample_count < 2 {
            return Err(ParameterError::TooFewSamples(self.sample_count));
        }
        if !self.resonance_tolerance.is_finite() || self.resonance_tolerance < 0.0 {
            return Err(ParameterError::InvalidParameter {
                name: "resonance_tolerance",
                value: self.resonance_tolerance,
            });
        }
        if !self.amplitude_scale.is_finite() {
            return Err(ParameterError::InvalidParameter {
                name: "amplitude_scale",
                value: self.amplitude_scale,
            });
        }
        Ok(())
    }
}

/// A complete crossing scenario as stored on disk.
///
/// Every field is optional in JSON; anything left out takes the value of the
/// reference crossing.
///
/// ```json
/// {
///   "beam": { "span": 30.0, "vehicle_speed": 25.0 },
///   "analysis": { "sample_count": 1000 }
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// Vehicle and beam properties.
    pub beam: BeamParameters,
    /// Sampling and tolerance settings.
    pub analysis: AnalysisSettings,
}

impl Scenario {
    /// Parse and validate a scenario from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Json`] for malformed input and
    /// [`ScenarioError::Parameter`] when the values fail validation.
    pub fn from_json(contents: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = serde_json::from_str(contents)?;
        scenario.beam.validate()?;
        scenario.analysis.validate()?;
        Ok(scenario)
    }

    /// Load and validate a scenario from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] when the file cannot be read, otherwise the
    /// same errors as [`Scenario::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

/// Reject zero, negative and non-finite values.
fn require_positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidParameter { name, value })
    }
}
