pub mod error;
pub mod summary;

pub use error::StatsError;
pub use summary::{quantile, summarize, summarize_values, DiscountSummary};
