pub mod app_config;
pub mod config;
pub mod products;

pub use app_config::{AppConfig, PipelineConfig, SelectorConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Catalog, ProductRecord};

use thiserror::Error;

/// Placeholder substituted with the page index in listing URL templates.
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Minimum discount (percent) a badge must show for its item to be kept.
pub const DEFAULT_DISCOUNT_THRESHOLD: u8 = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("invalid page range {first}..={last}: first page must be >= 1 and <= last page")]
    InvalidPageRange { first: u32, last: u32 },

    #[error("discount threshold {0} is outside 0..=100")]
    InvalidThreshold(u8),

    #[error("URL template \"{0}\" has no {{page}} placeholder")]
    InvalidUrlTemplate(String),
}
