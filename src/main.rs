mod cli;
mod report;

use bridge_resonance::{render_deflection_chart, BeamResonanceEvaluator, ChartOptions, Scenario};
use clap::Parser;
use cli::Cli;
use report::render_summary;
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    // Diagnostics go to stderr so the report and JSON output stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Without a scenario file the reference crossing is evaluated.
    let scenario = match &args.scenario {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading scenario");
            Scenario::from_file(path)?
        }
        None => Scenario::default(),
    };

    // Natural frequency, resonance check and deflection history, in that order.
    // The beam model is Euler-Bernoulli, see
    // https://en.wikipedia.org/wiki/Euler%E2%80%93Bernoulli_beam_theory.
    let evaluation = BeamResonanceEvaluator::from_scenario(scenario).evaluate()?;

    // The chart only sees plain series; millimetres are a display concern.
    let chart = if args.no_plot {
        None
    } else {
        let time = evaluation.deflection.time().to_vec();
        let deflection_mm = evaluation.deflection.deflection_mm().to_vec();
        render_deflection_chart(&time, &deflection_mm, &args.output, &ChartOptions::default())?;
        tracing::info!(path = %args.output.display(), "deflection chart written");
        Some(args.output.as_path())
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{}", render_summary(&evaluation, chart));
    }

    Ok(())
}
