//! PNG charts of the discount distribution.
//!
//! Both charts are drawn with the [`plotters`] bitmap backend at a fixed
//! 1200x800 resolution.

use std::path::Path;

use ofertas_stats::DiscountSummary;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::ReportError;

const SIZE: (u32, u32) = (1200, 800);
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const MEDIAN_ORANGE: RGBColor = RGBColor(255, 127, 14);

/// Whiskers reach the furthest value within this many IQRs of the box.
const WHISKER_IQR: f64 = 1.5;

fn chart_err(e: impl std::fmt::Display) -> ReportError {
    ReportError::Chart(e.to_string())
}

/// Box, whisker and outlier positions for one horizontal boxplot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGeometry {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxGeometry {
    /// Derives the plot geometry from the raw discounts and their summary.
    ///
    /// Returns `None` when `values` is empty.
    #[must_use]
    pub fn new(values: &[u8], summary: &DiscountSummary) -> Option<Self> {
        let low_fence = summary.q1 - WHISKER_IQR * summary.iqr;
        let high_fence = summary.q3 + WHISKER_IQR * summary.iqr;

        let mut inside = values
            .iter()
            .map(|v| f64::from(*v))
            .filter(|v| (low_fence..=high_fence).contains(v))
            .peekable();
        inside.peek()?;
        let (whisker_low, whisker_high) = inside
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        let outliers = values
            .iter()
            .map(|v| f64::from(*v))
            .filter(|v| !(low_fence..=high_fence).contains(v))
            .collect();

        Some(Self {
            q1: summary.q1,
            median: summary.median,
            q3: summary.q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

/// Horizontal extent covering the data and every annotated statistic, with
/// a 5% margin on each side.
pub(crate) fn annotated_range(summary: &DiscountSummary) -> (f64, f64) {
    let (lo, hi) = summary
        .labelled()
        .iter()
        .map(|(_, v)| *v)
        .fold((summary.min, summary.max), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let pad = ((hi - lo) * 0.05).max(1.0);
    (lo - pad, hi + pad)
}

fn fill_background(root: &DrawingArea<BitMapBackend<'_>, Shift>) -> Result<(), ReportError> {
    root.fill(&WHITE).map_err(chart_err)
}

/// Draws a horizontal boxplot of `values` and writes every labelled
/// statistic of `summary` as text at its value, all on the box's centre line.
///
/// # Errors
///
/// - [`ReportError::EmptyData`] if `values` is empty.
/// - [`ReportError::Chart`] if the backend fails to draw or save.
pub fn render_boxplot(
    values: &[u8],
    summary: &DiscountSummary,
    output_path: &Path,
) -> Result<(), ReportError> {
    let geometry =
        BoxGeometry::new(values, summary).ok_or(ReportError::EmptyData("boxplot values"))?;
    let (x_min, x_max) = annotated_range(summary);

    let root = BitMapBackend::new(output_path, SIZE).into_drawing_area();
    fill_background(&root)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Boxplot dos Descontos dos Produtos", ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(40)
        .build_cartesian_2d(x_min..x_max, 0.5f64..1.5f64)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Desconto (%)")
        .y_labels(3)
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(chart_err)?;

    let (box_bottom, box_top) = (0.75, 1.25);
    let (cap_bottom, cap_top) = (0.875, 1.125);
    let outline = BLUE.stroke_width(2);

    chart
        .draw_series([
            Rectangle::new([(geometry.q1, box_bottom), (geometry.q3, box_top)], SKY_BLUE.filled()),
            Rectangle::new([(geometry.q1, box_bottom), (geometry.q3, box_top)], outline),
        ])
        .map_err(chart_err)?;

    let segments = [
        // Median
        vec![(geometry.median, box_bottom), (geometry.median, box_top)],
        // Whiskers
        vec![(geometry.whisker_low, 1.0), (geometry.q1, 1.0)],
        vec![(geometry.q3, 1.0), (geometry.whisker_high, 1.0)],
        // Caps
        vec![(geometry.whisker_low, cap_bottom), (geometry.whisker_low, cap_top)],
        vec![(geometry.whisker_high, cap_bottom), (geometry.whisker_high, cap_top)],
    ];
    let styles = [MEDIAN_ORANGE.stroke_width(2), BLACK.stroke_width(1)];
    chart
        .draw_series(
            segments
                .into_iter()
                .enumerate()
                .map(|(i, points)| PathElement::new(points, styles[usize::from(i > 0)])),
        )
        .map_err(chart_err)?;

    chart
        .draw_series(
            geometry
                .outliers
                .iter()
                .map(|x| Circle::new((*x, 1.0), 4, BLACK.stroke_width(1))),
        )
        .map_err(chart_err)?;

    let label_style = TextStyle::from(("sans-serif", 18).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(
            summary
                .labelled()
                .into_iter()
                .map(|(_, v)| Text::new(format!("{v:.2}"), (v, 1.0), label_style.clone())),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::info!(path = %output_path.display(), "rendered boxplot");
    Ok(())
}

/// Draws one horizontal bar per labelled statistic, each annotated with its
/// value at the bar's end.
///
/// # Errors
///
/// Returns [`ReportError::Chart`] if the backend fails to draw or save.
pub fn render_summary_bars(
    summary: &DiscountSummary,
    output_path: &Path,
) -> Result<(), ReportError> {
    let stats = summary.labelled();
    let labels: Vec<&'static str> = stats.iter().map(|(label, _)| *label).collect();
    let widest = stats.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    // Room to the right for the value annotation.
    let x_max = (widest * 1.15).max(1.0);
    let bar_count = i32::try_from(stats.len()).map_err(chart_err)?;

    let root = BitMapBackend::new(output_path, SIZE).into_drawing_area();
    fill_background(&root)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Medidas de Dispersão e Distribuição dos Descontos",
            ("sans-serif", 36),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(260)
        .build_cartesian_2d(0.0..x_max, (0..bar_count).into_segmented())
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Valor")
        .disable_y_mesh()
        .y_labels(stats.len())
        .y_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => usize::try_from(*i)
                .ok()
                .and_then(|i| labels.get(i))
                .map_or_else(String::new, |label| (*label).to_string()),
            SegmentValue::Last => String::new(),
        })
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series((0..bar_count).zip(stats).map(|(i, (_, value))| {
            let mut bar = Rectangle::new(
                [(0.0, SegmentValue::Exact(i)), (value, SegmentValue::Exact(i + 1))],
                SKY_BLUE.filled(),
            );
            bar.set_margin(10, 10, 0, 0);
            bar
        }))
        .map_err(chart_err)?;

    let value_style = TextStyle::from(("sans-serif", 18).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    chart
        .draw_series((0..bar_count).zip(stats).map(|(i, (_, value))| {
            Text::new(
                format!("{value:.2}"),
                (value, SegmentValue::CenterOf(i)),
                value_style.clone(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::info!(path = %output_path.display(), "rendered summary bar chart");
    Ok(())
}
