//! Comparison of the vehicle excitation frequency against the natural frequency.

use std::fmt;

use serde::Serialize;

use crate::errors::ParameterError;

/// Outcome of the resonance check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResonanceVerdict {
    /// The excitation frequency lies within the tolerance band around the natural frequency.
    Risk,
    /// The excitation frequency is clear of the natural frequency.
    NoSignificantResonance,
}

impl ResonanceVerdict {
    /// Return `true` for [`ResonanceVerdict::Risk`].
    #[must_use]
    pub fn is_risk(self) -> bool {
        self == Self::Risk
    }
}

impl fmt::Display for ResonanceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Risk => f.write_str(
                "WARNING: dynamic resonance risk (excitation frequency ≈ natural frequency)",
            ),
            Self::NoSignificantResonance => f.write_str(
                "OK: no significant resonance (excitation frequency ≠ natural frequency)",
            ),
        }
    }
}

/// Result of comparing the excitation frequency with the natural frequency.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResonanceAssessment {
    /// Excitation frequency `v / (2L)` in hertz.
    pub excitation_frequency: f64,
    /// Fundamental natural frequency in hertz.
    pub natural_frequency: f64,
    /// `|f_exc − f1| / f1`.
    pub relative_deviation: f64,
    /// Tolerance the deviation was compared against.
    pub tolerance: f64,
    /// Binary classification of the crossing.
    pub verdict: ResonanceVerdict,
}

/// Classify a pair of frequencies.
///
/// The band is symmetric and inclusive: a deviation exactly equal to `tolerance`
/// counts as a resonance risk.
///
/// # Examples
/// ```
/// use bridge_resonance::{classify_resonance, ResonanceVerdict};
///
/// assert_eq!(classify_resonance(11.0, 10.0, 0.10), ResonanceVerdict::Risk);
/// assert_eq!(classify_resonance(12.0, 10.0, 0.10), ResonanceVerdict::NoSignificantResonance);
/// ```
#[must_use]
pub fn classify_resonance(
    excitation_frequency: f64,
    natural_frequency: f64,
    tolerance: f64,
) -> ResonanceVerdict {
    if relative_deviation(excitation_frequency, natural_frequency) <= tolerance {
        ResonanceVerdict::Risk
    } else {
        ResonanceVerdict::NoSignificantResonance
    }
}

/// Compare the excitation of a vehicle at `speed` on a span of length `span`
/// with the natural frequency `natural_frequency`.
///
/// # Errors
///
/// Returns [`ParameterError::InvalidParameter`] when the speed is negative or the
/// span, natural frequency or tolerance cannot be used, and [`ParameterError::DivisionByZero`] when the natural
/// frequency is zero.
pub fn assess_resonance(
    speed: f64,
    span: f64,
    natural_frequency: f64,
    tolerance: f64,
) -> Result<ResonanceAssessment, ParameterError> {
    if !(span.is_finite() && span > 0.0) {
        return Err(ParameterError::InvalidParameter {
            name: "span",
            value: span,
        });
    }
    if !(speed.is_finite() && speed >= 0.0) {
        return Err(ParameterError::InvalidParameter {
            name: "vehicle_speed",
            value: speed,
        });
    }
    if natural_frequency == 0.0 {
        return Err(ParameterError::DivisionByZero {
            name: "natural_frequency",
            consequence: "the relative deviation",
        });
    }
    if !(natural_frequency.is_finite() && natural_frequency > 0.0) {
        return Err(ParameterError::InvalidParameter {
            name: "natural_frequency",
            value: natural_frequency,
        });
    }
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        return Err(ParameterError::InvalidParameter {
            name: "resonance_tolerance",
            value: tolerance,
        });
    }

    let excitation_frequency = speed / (2.0 * span);
    let verdict = classify_resonance(excitation_frequency, natural_frequency, tolerance);
    let assessment = ResonanceAssessment {
        excitation_frequency,
        natural_frequency,
        relative_deviation: relative_deviation(excitation_frequency, natural_frequency),
        tolerance,
        verdict,
    };
    tracing::debug!(
        excitation_frequency,
        natural_frequency,
        relative_deviation = assessment.relative_deviation,
        ?verdict,
        "assessed resonance"
    );
    Ok(assessment)
}

/// `|f_exc − f1| / f1`.
fn relative_deviation(excitation_frequency: f64, natural_frequency: f64) -> f64 {
    (excitation_frequency - natural_frequency).abs() / natural_frequency
}
