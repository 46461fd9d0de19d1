//! Error types produced while configuring, evaluating or rendering a bridge crossing.

use thiserror::Error;

/// Error returned when a physical parameter or analysis setting is rejected.
///
/// Each variant names the offending beam, vehicle or sampling quantity, so a
/// rejected scenario file points straight at the field to correct.
///
/// # Examples
///
/// ```
/// use bridge_resonance::{BeamParameters, ParameterError};
///
/// let parameters = BeamParameters {
///     span: 0.0,
///     ..BeamParameters::default()
/// };
/// let error = parameters.validate().expect_err("zero span is rejected");
/// assert!(matches!(error, ParameterError::InvalidParameter { name: "span", .. }));
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ParameterError {
    /// Returned when a quantity is zero, negative or not finite.
    #[error("{name} must be positive and finite (received {value})")]
    InvalidParameter {
        /// Name of the offending quantity.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Returned when a quantity would be used as a divisor while equal to zero.
    #[error("{name} is zero, so {consequence} is undefined")]
    DivisionByZero {
        /// Name of the quantity that is zero.
        name: &'static str,
        /// The derived quantity that cannot be formed.
        consequence: &'static str,
    },
    /// Returned when the time series would hold fewer than two samples.
    #[error("at least two samples are required (received {0})")]
    TooFewSamples(usize),
}

/// Error returned when a scenario file cannot be loaded.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    #[error("unable to read scenario: {0}")]
    Io(#[from] std::io::Error),
    /// The scenario file is not valid JSON for a [`Scenario`](crate::Scenario).
    #[error("unable to parse scenario: {0}")]
    Json(#[from] serde_json::Error),
    /// The scenario parsed but holds physically meaningless values.
    #[error("invalid scenario: {0}")]
    Parameter(#[from] ParameterError),
}

/// Error returned when the deflection chart cannot be drawn.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    /// The time and deflection series differ in length.
    #[error("series length mismatch: {time} time samples, {deflection} deflection samples")]
    LengthMismatch {
        /// Number of time samples.
        time: usize,
        /// Number of deflection samples.
        deflection: usize,
    },
    /// There is nothing to draw.
    #[error("cannot render an empty series")]
    EmptySeries,
    /// The drawing backend reported a failure.
    #[error("drawing failed: {0}")]
    Drawing(String),
}

