//! Plain-text run summary for the terminal.

use std::fmt;

use ofertas_core::Catalog;
use ofertas_stats::DiscountSummary;

use crate::COLUMNS;

/// Rows shown in the dataset preview.
const PREVIEW_ROWS: usize = 5;

/// Renders the record count, a preview of the first rows, and every
/// statistic with its label.
#[must_use]
pub fn render_console_summary(catalog: &Catalog, summary: &DiscountSummary) -> String {
    ConsoleSummary { catalog, summary }.to_string()
}

struct ConsoleSummary<'a> {
    catalog: &'a Catalog,
    summary: &'a DiscountSummary,
}

impl fmt::Display for ConsoleSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        writeln!(f, "Número de registros: {}", self.catalog.len())?;
        writeln!(f, "Amostras do dataset:")?;
        write!(f, "{}", Preview(self.catalog))?;

        let lines = [
            ("Média do desconto", summary.mean),
            ("Mediana do desconto", summary.median),
            ("Desvio padrão do desconto", summary.std_dev),
            ("Desconto mínimo", summary.min),
            ("Desconto máximo", summary.max),
            ("Variância do desconto", summary.variance),
            ("Coeficiente de variação do desconto", summary.coefficient_of_variation),
            ("Intervalo interquartil (IQR) do desconto", summary.iqr),
        ];
        for (label, value) in lines {
            writeln!(f, "{label}: {value}")?;
        }

        writeln!(f, "Quartis:")?;
        for (q, value) in summary.quartiles() {
            writeln!(f, "{q:.2}    {value}")?;
        }
        Ok(())
    }
}

/// Left-aligned table of the first [`PREVIEW_ROWS`] records with a row index.
struct Preview<'a>(&'a Catalog);

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 3]> = self
            .0
            .iter()
            .take(PREVIEW_ROWS)
            .map(|r| [r.name.clone(), r.price.clone(), r.discount_percent.to_string()])
            .collect();

        let mut widths = COLUMNS.map(|c| c.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let index_width = rows.len().saturating_sub(1).to_string().len();

        write!(f, "{:index_width$}", "")?;
        for (header, width) in COLUMNS.iter().zip(widths) {
            write!(f, "  {header:<width$}")?;
        }
        writeln!(f)?;
        for (i, row) in rows.iter().enumerate() {
            write!(f, "{i:>index_width$}")?;
            for (cell, width) in row.iter().zip(widths) {
                write!(f, "  {cell:<width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
