use std::path::Path;

use ofertas_core::Catalog;
use rust_xlsxwriter::{Format, FormatAlign, Workbook};

use crate::error::ReportError;
use crate::COLUMNS;

/// Excel rejects worksheet names longer than this.
const MAX_SHEET_NAME_CHARS: usize = 31;

/// Extra characters added to the widest cell of each column.
const COLUMN_PADDING: usize = 2;

/// Writes the catalog to a single-sheet workbook.
///
/// The sheet is named after `sheet_name` (truncated to Excel's limit). Every
/// cell, header included, is centered horizontally and vertically, and each
/// column is sized to its longest cell text plus padding.
///
/// # Errors
///
/// Returns [`ReportError::Xlsx`] if the sheet name is rejected, a cell falls
/// outside the worksheet limits, or the file cannot be saved.
pub fn write_xlsx(catalog: &Catalog, sheet_name: &str, path: &Path) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let name: String = sheet_name.chars().take(MAX_SHEET_NAME_CHARS).collect();
    worksheet.set_name(name)?;

    let centered = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for (col, header) in (0u16..).zip(COLUMNS) {
        worksheet.write_string_with_format(0, col, header, &centered)?;
    }

    for (index, record) in catalog.iter().enumerate() {
        // Past u32::MAX the writer's own row-limit error fires first.
        let row = u32::try_from(index + 1).unwrap_or(u32::MAX);
        worksheet.write_string_with_format(row, 0, &record.name, &centered)?;
        worksheet.write_string_with_format(row, 1, &record.price, &centered)?;
        worksheet.write_number_with_format(
            row,
            2,
            f64::from(record.discount_percent),
            &centered,
        )?;
    }

    for (col, width) in (0u16..).zip(column_widths(catalog)) {
        worksheet.set_column_width(col, width_as_f64(width))?;
    }

    workbook.save(path)?;
    tracing::info!(path = %path.display(), rows = catalog.len(), "wrote spreadsheet export");
    Ok(())
}

/// Character width for each export column: the longest of the header and
/// every cell's displayed text, plus [`COLUMN_PADDING`].
pub(crate) fn column_widths(catalog: &Catalog) -> [usize; 3] {
    let mut widths = COLUMNS.map(|header| header.chars().count());
    for record in catalog {
        let cells = [
            record.name.chars().count(),
            record.price.chars().count(),
            record.discount_percent.to_string().len(),
        ];
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell);
        }
    }
    widths.map(|w| w + COLUMN_PADDING)
}

#[allow(clippy::cast_precision_loss)]
fn width_as_f64(width: usize) -> f64 {
    width as f64
}
