use bridge_resonance::Evaluation;
use std::fmt::Write;
use std::path::Path;

/// Render a textual summary of the crossing analysis.
///
/// The formatted report walks through the key numbers so readers can cross-check
/// the output against the closed-form expressions for a simply-supported beam
/// (<https://en.wikipedia.org/wiki/Euler%E2%80%93Bernoulli_beam_theory#Dynamic_beam_equation>).
#[must_use]
pub fn render_summary(evaluation: &Evaluation, chart: Option<&Path>) -> String {
    let mut output = String::new();
    let beam = &evaluation.parameters;

    // State the problem first so the reader knows what the numbers represent.
    writeln!(
        &mut output,
        "Vehicle crossing a simply-supported bridge (m = {:.0} kg, L = {:.1} m, v = {:.1} m/s)",
        beam.vehicle_mass, beam.span, beam.vehicle_speed
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Beam: mu = {:.1} kg/m, E = {:.2e} Pa, I = {:.2e} m^4",
        beam.linear_density, beam.elastic_modulus, beam.second_moment_of_area
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Fundamental natural frequency of the bridge: {:.3} Hz",
        evaluation.natural_frequency.hertz
    )
    .expect("writing to string cannot fail");
    writeln!(&mut output, "Vehicle speed: {} m/s", beam.vehicle_speed)
        .expect("writing to string cannot fail");

    // The excitation assumes the first mode, whose wavelength is twice the span.
    let resonance = &evaluation.resonance;
    writeln!(
        &mut output,
        "Excitation frequency (v / 2L): {:.3} Hz, deviation {:.1}% (tolerance {:.1}%)",
        resonance.excitation_frequency,
        resonance.relative_deviation * 100.0,
        resonance.tolerance * 100.0
    )
    .expect("writing to string cannot fail");
    writeln!(&mut output, "{}", resonance.verdict).expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Peak midspan deflection: {:.3} mm over {} samples ({:.2} s crossing)",
        evaluation.deflection.peak_deflection() * 1_000.0,
        evaluation.deflection.len(),
        beam.crossing_duration()
    )
    .expect("writing to string cannot fail");

    match chart {
        Some(path) => writeln!(&mut output, "Deflection chart written to {}", path.display())
            .expect("writing to string cannot fail"),
        None => output.push_str("Deflection chart: not rendered\n"),
    }

    output
}
