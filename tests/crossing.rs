#![warn(clippy::pedantic)]

use std::f64::consts::PI;

use approx::assert_relative_eq;
use bridge_resonance::{
    assess_resonance, classify_resonance, compute_natural_frequency, midspan_deflection_at,
    render_deflection_chart, simulate_deflection, AnalysisSettings, BeamParameters,
    BeamResonanceEvaluator, ChartOptions, ParameterError, ResonanceVerdict, Scenario,
};

#[derive(Debug, Clone, Copy)]
struct ReferenceCrossing {
    vehicle_mass: f64,
    span: f64,
    vehicle_speed: f64,
    linear_density: f64,
    elastic_modulus: f64,
    second_moment_of_area: f64,
}

impl Default for ReferenceCrossing {
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

impl ReferenceCrossing {
    fn natural_frequency(self) -> f64 {
        (PI / (2.0 * self.span.powi(2)))
            * (self.elastic_modulus * self.second_moment_of_area
                / (self.linear_density * self.span.powi(2)))
            .sqrt()
    }

    fn amplitude(self) -> f64 {
        self.vehicle_mass * 9.81 / (self.linear_density * self.span) * 0.01
    }
}

#[test]
fn natural_frequency_matches_closed_form_solution() {
    let reference = ReferenceCrossing::default();
    let frequency =
        compute_natural_frequency(&BeamParameters::default()).expect("reference beam is valid");

    assert_relative_eq!(frequency.hertz, reference.natural_frequency(), max_relative = 1.0e-9);
    assert_relative_eq!(
        frequency.angular,
        2.0 * PI * reference.natural_frequency(),
        max_relative = 1.0e-9
    );
}

#[test]
fn excitation_frequency_is_a_quarter_hertz() {
    let reference = ReferenceCrossing::default();
    let assessment = assess_resonance(
        reference.vehicle_speed,
        reference.span,
        reference.natural_frequency(),
        0.10,
    )
    .expect("reference inputs are valid");

    assert_eq!(assessment.excitation_frequency, 0.25);
    assert_eq!(assessment.verdict, ResonanceVerdict::NoSignificantResonance);
}

#[test]
fn synthetic_pairs_either_side_of_the_band() {
    assert_eq!(classify_resonance(0.26, 0.25, 0.10), ResonanceVerdict::Risk);
    assert_eq!(
        classify_resonance(0.30, 0.25, 0.10),
        ResonanceVerdict::NoSignificantResonance
    );
}

#[test]
fn deflection_history_covers_the_whole_crossing() {
    let reference = ReferenceCrossing::default();
    let omega = 2.0 * PI * reference.natural_frequency();
    let history = simulate_deflection(
        &BeamParameters::default(),
        omega,
        &AnalysisSettings::default(),
    )
    .expect("reference crossing simulates");

    assert_eq!(history.len(), 500);
    assert_eq!(history.time()[0], 0.0);
    assert_eq!(history.time()[history.len() - 1], 2.0);
    assert_eq!(history.vehicle_position()[history.len() - 1], reference.span);
    assert!(history.time().windows(2).into_iter().all(|pair| pair[1] > pair[0]));

    let amplitude = reference.amplitude();
    for (t, x, u) in history.samples() {
        assert!(x <= reference.span);
        assert_relative_eq!(u, amplitude * (omega * t).sin(), epsilon = 1.0e-15);
    }
}

#[test]
fn deflection_is_zero_once_the_vehicle_has_left() {
    let reference = ReferenceCrossing::default();
    let omega = 2.0 * PI * reference.natural_frequency();
    let parameters = BeamParameters::default();
    let duration = parameters.crossing_duration();

    for t in [duration * 1.001, duration + 0.5, 3.0 * duration] {
        assert_eq!(midspan_deflection_at(&parameters, omega, reference.amplitude(), t), 0.0);
    }
}

#[test]
fn evaluator_reproduces_the_individual_steps() {
    let evaluation = BeamResonanceEvaluator::default()
        .evaluate()
        .expect("reference crossing evaluates");
    let frequency =
        compute_natural_frequency(&BeamParameters::default()).expect("reference beam is valid");
    let history = simulate_deflection(
        &BeamParameters::default(),
        frequency.angular,
        &AnalysisSettings::default(),
    )
    .expect("reference crossing simulates");

    assert_eq!(evaluation.natural_frequency, frequency);
    assert_eq!(evaluation.deflection, history);
}

#[test]
fn zero_speed_fails_fast() {
    let evaluator = BeamResonanceEvaluator::new(
        BeamParameters {
            vehicle_speed: 0.0,
            ..BeamParameters::default()
        },
        AnalysisSettings::default(),
    );
    assert!(matches!(
        evaluator.evaluate(),
        Err(ParameterError::DivisionByZero { name: "vehicle_speed", .. })
    ));
}

#[test]
fn scenario_file_round_trip_through_disk() {
    let path = std::env::temp_dir().join(format!(
        "bridge-resonance-scenario-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"{ "beam": { "vehicle_speed": 4.0 } }"#).expect("scenario written");

    let scenario = Scenario::from_file(&path).expect("scenario loads");
    std::fs::remove_file(&path).ok();

    let evaluation = BeamResonanceEvaluator::from_scenario(scenario)
        .evaluate()
        .expect("scenario evaluates");
    assert_eq!(evaluation.resonance.excitation_frequency, 0.1);
    assert_eq!(evaluation.deflection.time()[evaluation.deflection.len() - 1], 5.0);
}

#[test]
fn evaluation_renders_to_svg() {
    let evaluation = BeamResonanceEvaluator::default()
        .evaluate()
        .expect("reference crossing evaluates");
    let path = std::env::temp_dir().join(format!(
        "bridge-resonance-crossing-{}.svg",
        std::process::id()
    ));

    render_deflection_chart(
        &evaluation.deflection.time().to_vec(),
        &evaluation.deflection.deflection_mm().to_vec(),
        &path,
        &ChartOptions::default(),
    )
    .expect("chart renders");

    let svg = std::fs::read_to_string(&path).expect("chart written");
    std::fs::remove_file(&path).ok();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Dynamic deflection at bridge midspan"));
}

#[test]
fn evaluation_serialises_to_json() {
    let evaluation = BeamResonanceEvaluator::default()
        .evaluate()
        .expect("reference crossing evaluates");
    let json = serde_json::to_value(&evaluation).expect("evaluation serialises");

    assert_eq!(json["resonance"]["verdict"], "no_significant_resonance");
    assert_eq!(json["parameters"]["span"], 20.0);
    assert_eq!(json["settings"]["sample_count"], 500);
}
