use thiserror::Error;

/// Conditions under which a discount summary cannot be computed without
/// producing NaN or infinite values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("cannot summarize an empty catalog")]
    EmptyCatalog,

    /// Sample variance divides by `n - 1`.
    #[error("sample statistics need at least {needed} records, got {found}")]
    InsufficientData { needed: usize, found: usize },

    #[error("coefficient of variation is undefined: mean discount is zero")]
    DivideByZero,
}
