use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Drawing-area, mesh or series failure from the plotting backend.
    #[error("chart error: {0}")]
    Chart(String),

    #[error("nothing to plot: {0}")]
    EmptyData(&'static str),
}
