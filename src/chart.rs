//! SVG line chart of the midspan deflection history.
//!
//! This module only draws what it is given: it knows nothing about beams,
//! vehicles or frequencies.

use std::path::Path;

use plotters::prelude::*;

use crate::errors::RenderError;

/// Presentation options for the deflection chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Chart title.
    pub title: String,
    /// Label for the horizontal axis.
    pub x_label: String,
    /// Label for the vertical axis.
    pub y_label: String,
    /// Legend entry for the series.
    pub legend: String,
    /// Image size in pixels.
    pub size: (u32, u32),
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Dynamic deflection at bridge midspan".to_owned(),
            x_label: "Time (s)".to_owned(),
            y_label: "Midspan deflection (mm)".to_owned(),
            legend: "Deflection (mm)".to_owned(),
            size: (800, 500),
        }
    }
}

/// Render `deflection_mm` against `time` as an SVG line chart at `path`.
///
/// # Errors
///
/// Returns [`RenderError::LengthMismatch`] or [`RenderError::EmptySeries`] for
/// unusable input and [`RenderError::Drawing`] when the backend fails, for example
/// because the file cannot be written.
pub fn render_deflection_chart(
    time: &[f64],
    deflection_mm: &[f64],
    path: &Path,
    options: &ChartOptions,
) -> Result<(), RenderError> {
    if time.len() != deflection_mm.len() {
        return Err(RenderError::LengthMismatch {
            time: time.len(),
            deflection: deflection_mm.len(),
        });
    }
    if time.is_empty() {
        return Err(RenderError::EmptySeries);
    }

    let (x_range, y_range) = (axis_range(time), axis_range(deflection_mm));

    let root = SVGBackend::new(path, options.size).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&options.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(drawing_error)?;

    chart
        .configure_mesh()
        .x_desc(options.x_label.as_str())
        .y_desc(options.y_label.as_str())
        .draw()
        .map_err(drawing_error)?;

    chart
        .draw_series(LineSeries::new(
            time.iter().copied().zip(deflection_mm.iter().copied()),
            &BLUE,
        ))
        .map_err(drawing_error)?
        .label(options.legend.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing_error)?;

    root.present().map_err(drawing_error)?;
    tracing::debug!(path = %path.display(), samples = time.len(), "rendered deflection chart");
    Ok(())
}

/// Span of the data, widened when every value is identical.
fn axis_range(values: &[f64]) -> std::ops::Range<f64> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if max > min {
        min..max
    } else {
        (min - 1.0)..(max + 1.0)
    }
}

/// Flatten a backend error into a [`RenderError`].
fn drawing_error<E: std::error::Error + Send + Sync>(
    error: DrawingAreaErrorKind<E>,
) -> RenderError {
    RenderError::Drawing(error.to_string())
}
