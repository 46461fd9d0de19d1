use bridge_resonance::{AnalysisSettings, BeamParameters, BeamResonanceEvaluator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Sweep the vehicle speed over the reference bridge and report where the
    // excitation frequency v / 2L comes close to the natural frequency.
    for speed in [1.0, 2.0, 2.2, 2.3, 2.5, 5.0, 10.0, 20.0] {
        let parameters = BeamParameters {
            vehicle_speed: speed,
            ..BeamParameters::default()
        };
        let evaluation = BeamResonanceEvaluator::new(parameters, AnalysisSettings::default())
            .evaluate()?;

        println!(
            "v = {speed:>5.1} m/s  f_exc = {:.4} Hz  f1 = {:.4} Hz  {}",
            evaluation.resonance.excitation_frequency,
            evaluation.natural_frequency.hertz,
            evaluation.resonance.verdict
        );
    }

    Ok(())
}
