use std::path::PathBuf;

use clap::Parser;

/// Natural frequency, resonance check and midspan deflection for a vehicle
/// crossing a simply-supported bridge.
///
/// Without arguments the reference crossing is evaluated and the deflection chart
/// is written to `deflection.svg`.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// JSON scenario overriding the reference beam and analysis settings
    #[arg(short, long, value_name = "FILE")]
    pub scenario: Option<PathBuf>,

    /// Where to write the SVG deflection chart
    #[arg(short, long, value_name = "FILE", default_value = "deflection.svg")]
    pub output: PathBuf,

    /// Skip rendering the chart
    #[arg(long)]
    pub no_plot: bool,

    /// Print the full evaluation as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}
