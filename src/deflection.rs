//! Approximate midspan deflection history while the vehicle crosses the span.
//!
//! The response is the free first-mode oscillation `u(t) = A·sin(ω1·t)` switched
//! off once the vehicle has left the bridge. It is not a forced-vibration solution;
//! the amplitude `A` comes from [`BeamParameters::deflection_amplitude`] and the
//! arbitrary scale stored in [`AnalysisSettings`].

use ndarray::Array1;
use serde::Serialize;

use crate::errors::ParameterError;
use crate::parameters::{AnalysisSettings, BeamParameters};

/// Time series of the vehicle position and the midspan deflection.
///
/// All three sequences share one length and index `i` in each describes the same
/// instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeflectionHistory {
    /// Sample times in seconds.
    time: Array1<f64>,
    /// Vehicle position `v·t` in metres.
    vehicle_position: Array1<f64>,
    /// Midspan deflection in metres.
    deflection: Array1<f64>,
    /// Amplitude `A` in metres.
    amplitude: f64,
}

impl DeflectionHistory {
    /// Sample times in seconds.
    #[must_use]
    pub fn time(&self) -> &Array1<f64> {
        &self.time
    }

    /// Vehicle position along the span in metres.
    #[must_use]
    pub fn vehicle_position(&self) -> &Array1<f64> {
        &self.vehicle_position
    }

    /// Midspan deflection in metres.
    #[must_use]
    pub fn deflection(&self) -> &Array1<f64> {
        &self.deflection
    }

    /// Midspan deflection rescaled to millimetres for display.
    #[must_use]
    pub fn deflection_mm(&self) -> Array1<f64> {
        &self.deflection * 1_000.0
    }

    /// Amplitude `A` used for the series, in metres.
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Return `true` when the history holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Largest absolute deflection in metres.
    #[must_use]
    pub fn peak_deflection(&self) -> f64 {
        self.deflection.iter().fold(0.0, |peak, u| peak.max(u.abs()))
    }

    /// Iterate over `(time, vehicle_position, deflection)` triples.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.time
            .iter()
            .zip(self.vehicle_position.iter())
            .zip(self.deflection.iter())
            .map(|((&t, &x), &u)| (t, x, u))
    }
}

/// Evenly spaced samples on `[0, duration]`, both endpoints included.
///
/// The final sample is exactly `duration`. The matching vehicle position `v·duration`
/// is only guaranteed to equal the span when that product rounds exactly; it may
/// exceed `L` by one ulp, in which case the final deflection sample is zero.
///
/// # Errors
///
/// Returns [`ParameterError::TooFewSamples`] when `count < 2` and
/// [`ParameterError::InvalidParameter`] when `duration` is not positive and finite.
///
/// # Examples
/// ```
/// use bridge_resonance::sample_times;
///
/// let times = sample_times(2.0, 5).unwrap();
/// assert_eq!(times.to_vec(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
/// ```
pub fn sample_times(duration: f64, count: usize) -> Result<Array1<f64>, ParameterError> {
    if count < 2 {
        return Err(ParameterError::TooFewSamples(count));
    }
    if !(duration.is_finite() && duration > 0.0) {
        return Err(ParameterError::InvalidParameter {
            name: "crossing_duration",
            value: duration,
        });
    }
    let last = count - 1;
    let step = duration / last as f64;
    Ok(Array1::from_shape_fn(count, |i| {
        if i == last {
            duration
        } else {
            step * i as f64
        }
    }))
}

/// Deflection at the midspan at time `t` for a vehicle that entered at `t = 0`.
///
/// Returns `0.0` once the vehicle position `v·t` is beyond the span, which lets
/// callers probe instants after the crossing has finished.
#[must_use]
pub fn midspan_deflection_at(
    parameters: &BeamParameters,
    angular_frequency: f64,
    amplitude: f64,
    time: f64,
) -> f64 {
    deflection_for(
        parameters.span,
        parameters.vehicle_speed * time,
        angular_frequency,
        amplitude,
        time,
    )
}

/// Simulate the midspan deflection over one crossing.
///
/// Samples `settings.sample_count` instants on `[0, L/v]`, places the vehicle at
/// `x = v·t` and evaluates `A·sin(ω1·t)` while `x ≤ L`.
///
/// # Errors
///
/// Returns [`ParameterError`] when the parameters or settings fail validation,
/// `angular_frequency` is not finite, or the amplitude overflows.
pub fn simulate_deflection(
    parameters: &BeamParameters,
    angular_frequency: f64,
    settings: &AnalysisSettings,
) -> Result<DeflectionHistory, ParameterError> {
    parameters.validate()?;
    settings.validate()?;
    if !angular_frequency.is_finite() {
        return Err(ParameterError::InvalidParameter {
            name: "angular_frequency",
            value: angular_frequency,
        });
    }

    let time = sample_times(parameters.crossing_duration(), settings.sample_count)?;
    let vehicle_position = &time * parameters.vehicle_speed;
    let amplitude = parameters.deflection_amplitude(settings.amplitude_scale);
    if !amplitude.is_finite() {
        return Err(ParameterError::InvalidParameter {
            name: "amplitude",
            value: amplitude,
        });
    }
    let deflection = Array1::from_iter(time.iter().zip(vehicle_position.iter()).map(
        |(&t, &x)| deflection_for(parameters.span, x, angular_frequency, amplitude, t),
    ));

    tracing::debug!(
        samples = time.len(),
        amplitude,
        duration = parameters.crossing_duration(),
        "simulated midspan deflection"
    );

    Ok(DeflectionHistory {
        time,
        vehicle_position,
        deflection,
        amplitude,
    })
}

/// First-mode deflection while the vehicle is on the span, zero afterwards.
fn deflection_for(
    span: f64,
    position: f64,
    angular_frequency: f64,
    amplitude: f64,
    time: f64,
) -> f64 {
    if position <= span {
        amplitude * (angular_frequency * time).sin()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    fn reference_history() -> (DeflectionHistory, f64) {
        let parameters = BeamParameters::default();
        let omega = 2.0 * PI * 0.0569;
        let history = simulate_deflection(&parameters, omega, &AnalysisSettings::default())
            .expect("valid parameters");
        (history, omega)
    }

    #[test]
    fn produces_five_hundred_ordered_samples() {
        let (history, _) = reference_history();
        assert_eq!(history.len(), 500);
        assert_eq!(history.vehicle_position().len(), 500);
        assert_eq!(history.deflection().len(), 500);
        assert_eq!(history.time()[0], 0.0);
        assert_eq!(history.time()[499], 2.0);
        for pair in history.time().windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn vehicle_reaches_far_support_on_last_sample() {
        let (history, _) = reference_history();
        assert_eq!(history.vehicle_position()[499], 20.0);
    }

    #[test]
    fn deflection_follows_first_mode_on_span() {
        let (history, omega) = reference_history();
        let amplitude = 1_000.0 * 9.81 / (200.0 * 20.0) * 0.01;
        assert_relative_eq!(history.amplitude(), amplitude, max_relative = 1.0e-15);
        for (t, x, u) in history.samples() {
            assert!(x <= 20.0);
            assert_eq!(u, amplitude * (omega * t).sin());
        }
    }

    #[test]
    fn millimetre_series_is_scaled_copy() {
        let (history, _) = reference_history();
        let millimetres = history.deflection_mm();
        assert_eq!(millimetres.len(), history.len());
        assert_relative_eq!(
            millimetres[250],
            history.deflection()[250] * 1_000.0,
            max_relative = 1.0e-15
        );
        assert!(history.peak_deflection() > 0.0);
        assert!(history.peak_deflection() <= history.amplitude());
    }

    #[test]
    fn deflection_vanishes_after_vehicle_leaves() {
        let parameters = BeamParameters::default();
        let omega = 2.0 * PI * 0.0569;
        let amplitude = parameters.deflection_amplitude(0.01);
        let duration = parameters.crossing_duration();
        for t in [duration + 1.0e-6, 2.5, 10.0] {
            assert_eq!(midspan_deflection_at(&parameters, omega, amplitude, t), 0.0);
        }
        assert_eq!(
            midspan_deflection_at(&parameters, omega, amplitude, 1.0),
            amplitude * omega.sin()
        );
    }

    #[test]
    fn sample_times_reject_degenerate_ranges() {
        assert_eq!(sample_times(2.0, 1), Err(ParameterError::TooFewSamples(1)));
        assert!(matches!(
            sample_times(f64::INFINITY, 10),
            Err(ParameterError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn overflowing_amplitude_is_rejected() {
        let heavy = BeamParameters {
            vehicle_mass: 1.0e308,
            ..BeamParameters::default()
        };
        assert!(heavy.validate().is_ok());
        let error = simulate_deflection(&heavy, 1.0, &AnalysisSettings::default())
            .expect_err("infinite amplitude rejected");
        assert!(matches!(
            error,
            ParameterError::InvalidParameter { name: "amplitude", .. }
        ));

        let flimsy = BeamParameters {
            linear_density: f64::MIN_POSITIVE / 4.0,
            ..BeamParameters::default()
        };
        assert!(matches!(
            simulate_deflection(&flimsy, 1.0, &AnalysisSettings::default()),
            Err(ParameterError::InvalidParameter { name: "amplitude", .. })
        ));
    }

    #[test]
    fn zero_speed_is_rejected() {
        let parameters = BeamParameters {
            vehicle_speed: 0.0,
            ..BeamParameters::default()
        };
        let error = simulate_deflection(&parameters, 1.0, &AnalysisSettings::default())
            .expect_err("zero speed rejected");
        assert!(matches!(error, ParameterError::DivisionByZero { .. }));
    }
}
