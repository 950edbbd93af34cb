use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Where one run writes its artifacts.
///
/// The CSV name carries the run date (`DD_MM_YYYY`); the spreadsheet and
/// charts are overwritten on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub csv: PathBuf,
    pub xlsx: PathBuf,
    pub boxplot: PathBuf,
    pub summary_bars: PathBuf,
}

impl OutputFiles {
    #[must_use]
    pub fn new(dir: &Path, project_id: &str, run_date: NaiveDate) -> Self {
        let date = run_date.format("%d_%m_%Y");
        Self {
            csv: dir.join(format!("{project_id}_{date}.csv")),
            xlsx: dir.join(format!("{project_id}.xlsx")),
            boxplot: dir.join(format!("{project_id}_boxplot.png")),
            summary_bars: dir.join(format!("{project_id}_estatisticas.png")),
        }
    }
}
