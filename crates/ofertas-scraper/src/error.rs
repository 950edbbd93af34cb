use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("listing page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// A container carried a qualifying discount but not the `field` element
    /// the listing template promises.
    #[error("promotional container #{container} has no {field} element")]
    Structure {
        field: &'static str,
        container: usize,
    },

    #[error("invalid CSS selector \"{selector}\": {reason}")]
    InvalidSelector { selector: String, reason: String },
}

impl ScraperError {
    /// `true` for transport and HTTP status failures.
    #[must_use]
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::NotFound { .. } | Self::UnexpectedStatus { .. }
        )
    }
}
