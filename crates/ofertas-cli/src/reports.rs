use anyhow::Context;
use chrono::NaiveDate;
use ofertas_core::{AppConfig, Catalog};
use ofertas_report::OutputFiles;
use ofertas_stats::DiscountSummary;

/// Writes the CSV and spreadsheet exports and, when `charts` is set, both
/// PNG charts into the configured output directory.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or any sink
/// fails. Sinks already written stay on disk.
pub(crate) fn write_reports(
    catalog: &Catalog,
    summary: &DiscountSummary,
    config: &AppConfig,
    charts: bool,
    run_date: NaiveDate,
) -> anyhow::Result<OutputFiles> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;
    let files = OutputFiles::new(&config.output_dir, &config.project_id, run_date);

    ofertas_report::write_csv(catalog, &files.csv)
        .with_context(|| format!("failed to write {}", files.csv.display()))?;
    ofertas_report::write_xlsx(catalog, &config.project_id, &files.xlsx)
        .with_context(|| format!("failed to write {}", files.xlsx.display()))?;

    if charts {
        let discounts = catalog.discounts();
        ofertas_report::render_boxplot(&discounts, summary, &files.boxplot)
            .with_context(|| format!("failed to render {}", files.boxplot.display()))?;
        ofertas_report::render_summary_bars(summary, &files.summary_bars)
            .with_context(|| format!("failed to render {}", files.summary_bars.display()))?;
    } else {
        tracing::debug!("chart rendering disabled");
    }

    Ok(files)
}
