//! Output sinks for a finished catalog: delimited text, spreadsheet, console
//! summary and PNG charts. Each sink only reads the catalog and summary.

pub mod charts;
pub mod console;
pub mod csv_export;
pub mod error;
pub mod paths;
pub mod xlsx_export;

pub use charts::{render_boxplot, render_summary_bars, BoxGeometry};
pub use console::render_console_summary;
pub use csv_export::write_csv;
pub use error::ReportError;
pub use paths::OutputFiles;
pub use xlsx_export::write_xlsx;

/// Export column headers, in column order.
pub const COLUMNS: [&str; 3] = ["Nome do Produto", "Preço", "Desconto"];
