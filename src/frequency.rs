//! Fundamental natural frequency of the simply-supported beam.

use std::f64::consts::PI;

use serde::Serialize;

use crate::errors::ParameterError;
use crate::parameters::BeamParameters;

/// Fundamental natural frequency in both cyclic and angular form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NaturalFrequency {
    /// Cyclic frequency `f1` in hertz.
    pub hertz: f64,
    /// Angular frequency `ω1 = 2π·f1` in radians per second.
    pub angular: f64,
}

/// Compute the fundamental natural frequency of the beam.
///
/// Evaluates `f1 = π / (2L²) · √(E·I / (μ·L²))` and `ω1 = 2π·f1`.
///
/// # Errors
///
/// Returns [`ParameterError`] when the beam properties fail
/// [`BeamParameters::validate_beam`] or the result is not finite. The vehicle
/// mass and speed play no part.
///
/// # Examples
/// ```
/// use bridge_resonance::{compute_natural_frequency, BeamParameters};
///
/// let frequency = compute_natural_frequency(&BeamParameters::default()).unwrap();
/// assert!((frequency.hertz - 0.0569).abs() < 1.0e-4);
/// ```
pub fn compute_natural_frequency(
    parameters: &BeamParameters,
) -> Result<NaturalFrequency, ParameterError> {
    parameters.validate_beam()?;
    let span_squared = parameters.span.powi(2);
    let flexural_rigidity = parameters.elastic_modulus * parameters.second_moment_of_area;
    let hertz = (PI / (2.0 * span_squared))
        * (flexural_rigidity / (parameters.linear_density * span_squared)).sqrt();
    if !hertz.is_finite() {
        return Err(ParameterError::InvalidParameter {
            name: "natural_frequency",
            value: hertz,
        });
    }
    let angular = 2.0 * PI * hertz;
    tracing::debug!(hertz, angular, "computed fundamental natural frequency");
    Ok(NaturalFrequency { hertz, angular })
}
