//! Rendering tests for the PNG chart sinks.

use ofertas_report::{render_boxplot, render_summary_bars, ReportError};
use ofertas_stats::summarize_values;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn assert_png(path: &std::path::Path) {
    let bytes = std::fs::read(path).unwrap();
    assert!(
        bytes.starts_with(PNG_SIGNATURE),
        "{} is not a PNG",
        path.display()
    );
}

#[test]
fn boxplot_is_written_as_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("PROJ_boxplot.png");
    let values = [10, 20, 30, 40];
    let summary = summarize_values(&values).unwrap();

    render_boxplot(&values, &summary, &path).unwrap();

    assert_png(&path);
}

#[test]
fn boxplot_with_outlier_is_written_as_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("outliers.png");
    let values = [20, 20, 21, 22, 22, 90];
    let summary = summarize_values(&values).unwrap();

    render_boxplot(&values, &summary, &path).unwrap();

    assert_png(&path);
}

#[test]
fn boxplot_without_values_is_empty_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.png");
    let summary = summarize_values(&[10, 20]).unwrap();

    let err = render_boxplot(&[], &summary, &path).unwrap_err();

    assert!(matches!(err, ReportError::EmptyData(_)), "got: {err:?}");
    assert!(!path.exists());
}

#[test]
fn summary_bars_are_written_as_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("PROJ_estatisticas.png");
    let summary = summarize_values(&[15, 25, 35, 60, 70]).unwrap();

    render_summary_bars(&summary, &path).unwrap();

    assert_png(&path);
}
