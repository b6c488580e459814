use std::path::Path;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use tracing::debug;
use crate::models::PriceSeries;
use crate::utils::errors::ChartError;

/// Upper bound on x tick labels so long series stay legible
const MAX_X_LABELS: usize = 12;

const X_LABEL_FONT_SIZE: f64 = 12.0;

/// Canvas size and y-axis caption for a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub y_desc: &'static str,
}

impl ChartStyle {
    /// Wide canvas for fetched USD prices
    pub const fn price() -> Self {
        Self { width: 1200, height: 600, y_desc: "Price (USD)" }
    }

    /// Canvas for unitless sample series
    pub const fn sample() -> Self {
        Self { width: 1000, height: 500, y_desc: "Value" }
    }
}

/// y-axis bounds with 10% padding, never below zero
fn value_range(values: &[f64]) -> (f64, f64) {
    let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let spread = max_value - min_value;
    let padding = if spread > 0.0 {
        spread * 0.1
    } else {
        (max_value.abs() * 0.1).max(1.0)
    };

    ((min_value - padding).max(0.0), max_value + padding)
}

/// Date label for an x position, empty between points
fn label_at(labels: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

/// Height of the x label strip: the longest rotated date label plus room
/// for the "Date" caption below it
fn x_label_area_size(labels: &[String]) -> u32 {
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
    (longest * X_LABEL_FONT_SIZE * 0.6).ceil() as u32 + 40
}

/// Render `series` as a line chart with point markers and save it as a PNG.
///
/// Points are spaced evenly along the x axis and labelled with their dates.
/// An existing file at `path` is overwritten.
pub fn render_line_chart(
    series: &PriceSeries,
    title: &str,
    style: &ChartStyle,
    path: &Path,
) -> Result<(), ChartError> {
    if series.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let labels = series.labels();
    let points: Vec<(f64, f64)> = series
        .values()
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();
    let (y_min, y_max) = value_range(series.values());
    let x_max = points.len() as f64 - 0.5;

    debug!("Rendering {} points to {}", points.len(), path.display());

    // Backend is dropped at the end of this block, after the PNG is written
    {
        let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::Render(format!("Failed to fill canvas: {}", e)))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 32.0).into_font())
            .margin(15)
            .x_label_area_size(x_label_area_size(&labels))
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5..x_max, y_min..y_max)
            .map_err(|e| ChartError::Render(format!("Failed to build chart: {}", e)))?;

        let x_label_formatter = |x: &f64| label_at(&labels, *x);
        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc(style.y_desc)
            .x_labels(labels.len().min(MAX_X_LABELS))
            .x_label_formatter(&x_label_formatter)
            // Right-angle rotation only; anchored at the text start so dates hang below the ticks
            .x_label_style(
                TextStyle::from(
                    ("sans-serif", X_LABEL_FONT_SIZE)
                        .into_font()
                        .transform(FontTransform::Rotate90),
                )
                .pos(Pos::new(HPos::Left, VPos::Center)),
            )
            .draw()
            .map_err(|e| ChartError::Render(format!("Failed to draw mesh: {}", e)))?;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
            .map_err(|e| ChartError::Render(format!("Failed to draw line: {}", e)))?;

        chart
            .draw_series(points.iter().map(|p| Circle::new(*p, 3, BLUE.filled())))
            .map_err(|e| ChartError::Render(format!("Failed to draw points: {}", e)))?;

        root.present()
            .map_err(|e| ChartError::Render(format!("Failed to write {}: {}", path.display(), e)))?;
    }

    Ok(())
}
