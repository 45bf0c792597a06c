//! Histogram drawing on plotters backends.
//!
//! One drawing routine renders the bars, axis labels, tick formatting and
//! the sample-size annotation; the PNG and SVG entry points only differ in
//! the backend they open, so both outputs depict the identical chart.

use crate::chart::config::ChartConfig;
use crate::histogram::Histogram;
use crate::utils::error::ChartError;
use log::{debug, info};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Format an axis tick value as its integer part
///
/// **Public** - display-only truncation; bin boundaries are not altered
///
/// # Examples
/// `12.7` formats as `"12"`, `21000.0` as `"21000"`.
pub fn format_tick(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

/// Render the histogram to a PNG file
///
/// **Public** - raster half of the persist stage
pub fn render_png(hist: &Histogram, config: &ChartConfig, path: &Path) -> Result<(), ChartError> {
    info!("Rendering PNG figure: {}", path.display());

    let root = BitMapBackend::new(path, (config.size, config.size)).into_drawing_area();
    draw_histogram(&root, hist, config)?;
    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    Ok(())
}

/// Render the histogram to an SVG file
///
/// **Public** - vector half of the persist stage
pub fn render_svg(hist: &Histogram, config: &ChartConfig, path: &Path) -> Result<(), ChartError> {
    info!("Rendering SVG figure: {}", path.display());

    let root = SVGBackend::new(path, (config.size, config.size)).into_drawing_area();
    draw_histogram(&root, hist, config)?;
    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draw bars, axes and annotation onto an open drawing area
///
/// **Private** - shared by both backends so the two outputs depict the
/// identical chart
fn draw_histogram<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    hist: &Histogram,
    config: &ChartConfig,
) -> Result<(), ChartError> {
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let (x_min, x_max) = hist.range();
    // Headroom above the tallest bar keeps the annotation clear of it
    let y_max = (hist.max_percentage() * 1.15).max(1.0);

    debug!(
        "Drawing {} bars over {:.0}..{:.0}, y up to {:.1}%",
        hist.percentages.len(),
        x_min,
        x_max,
        y_max
    );

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(48);
    if let Some(title) = &config.title {
        builder.caption(title.as_str(), ("sans-serif", 20));
    }

    let mut chart = builder
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .x_label_formatter(&|x| format_tick(*x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .label_style(("sans-serif", 13))
        .axis_desc_style(("sans-serif", 15))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    let fill = RGBColor(config.bar_color.0, config.bar_color.1, config.bar_color.2);

    // Filled bars
    chart
        .draw_series(hist.percentages.iter().enumerate().map(|(i, &pct)| {
            Rectangle::new(
                [(hist.edges[i], 0.0), (hist.edges[i + 1], pct)],
                fill.filled(),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    // Black bar outlines on top of the fills
    chart
        .draw_series(hist.percentages.iter().enumerate().map(|(i, &pct)| {
            let (x0, x1) = (hist.edges[i], hist.edges[i + 1]);
            PathElement::new(
                vec![(x0, 0.0), (x0, pct), (x1, pct), (x1, 0.0), (x0, 0.0)],
                BLACK,
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    draw_annotation(root, &chart, hist, config, y_max)?;

    Ok(())
}

/// Overlay the sample-size annotation at 80% across, 94% up the axes
///
/// **Private** - drawn in pixel space so the backing box hugs the text
fn draw_annotation<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    hist: &Histogram,
    config: &ChartConfig,
    y_max: f64,
) -> Result<(), ChartError> {
    let text = config.annotation_text(hist.sample_count);

    let (x_min, x_max) = hist.range();
    let anchor = (x_min + (x_max - x_min) * 0.80, y_max * 0.94);
    let (px, py) = chart.plotting_area().map_coordinate(&anchor);

    // Semi-transparent white backing box, sized from the text length
    let box_w = text.len() as i32 * 8 + 8;
    let box_h = 20;
    root.draw(&Rectangle::new(
        [(px - 4, py - 3), (px + box_w, py + box_h)],
        WHITE.mix(0.2).filled(),
    ))
    .map_err(|e| ChartError::Drawing(e.to_string()))?;
    root.draw(&Rectangle::new(
        [(px - 4, py - 3), (px + box_w, py + box_h)],
        BLACK,
    ))
    .map_err(|e| ChartError::Drawing(e.to_string()))?;

    root.draw(&Text::new(text, (px, py), ("sans-serif", 14).into_font()))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    Ok(())
}
