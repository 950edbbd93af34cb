use std::path::Path;

use ofertas_core::Catalog;

use crate::error::ReportError;

/// Writes the catalog as comma-separated text with a header row.
///
/// # Errors
///
/// Returns [`ReportError::Csv`] if the file cannot be created or a row
/// cannot be written.
pub fn write_csv(catalog: &Catalog, path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    if catalog.is_empty() {
        // serialize() emits headers lazily; an empty catalog still gets them.
        writer.write_record(crate::COLUMNS)?;
    }
    for record in catalog {
        writer.serialize(record)?;
    }

    writer.flush()?;
    tracing::info!(path = %path.display(), rows = catalog.len(), "wrote CSV export");
    Ok(())
}
