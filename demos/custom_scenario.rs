use std::path::Path;

use bridge_resonance::{render_deflection_chart, BeamResonanceEvaluator, ChartOptions, Scenario};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A longer, lighter footbridge crossed slowly, described the same way a
    // scenario file would be.
    let scenario = Scenario::from_json(
        r#"{
            "beam": { "span": 30.0, "vehicle_speed": 3.0, "linear_density": 150.0 },
            "analysis": { "sample_count": 1000 }
        }"#,
    )?;

    let evaluation = BeamResonanceEvaluator::from_scenario(scenario).evaluate()?;
    println!("f1 = {:.3} Hz", evaluation.natural_frequency.hertz);
    println!("{}", evaluation.resonance.verdict);

    let options = ChartOptions {
        title: "Footbridge midspan deflection".to_owned(),
        ..ChartOptions::default()
    };
    render_deflection_chart(
        &evaluation.deflection.time().to_vec(),
        &evaluation.deflection.deflection_mm().to_vec(),
        Path::new("footbridge.svg"),
        &options,
    )?;
    println!("Chart written to footbridge.svg");

    Ok(())
}
