//! Descriptive statistics over the catalog's discount column.
//!
//! Spread measures use the sample definitions (divisor `n - 1`) and
//! quantiles use linear interpolation between closest ranks: for quantile
//! `q` over `n` sorted values the position is `q * (n - 1)`, and a
//! fractional position blends the two neighbouring order statistics.

use ofertas_core::Catalog;

use crate::error::StatsError;

/// Summary of the discount distribution. Percent values are `f64` so the
/// interpolated statistics share one type with the exact ones.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    /// `std_dev / mean`.
    pub coefficient_of_variation: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    /// `q3 - q1`.
    pub iqr: f64,
}

impl DiscountSummary {
    /// The statistics shown on the charts, in display order, with their
    /// report labels.
    #[must_use]
    pub fn labelled(&self) -> [(&'static str, f64); 8] {
        [
            ("Média", self.mean),
            ("Mediana", self.median),
            ("Desvio Padrão", self.std_dev),
            ("Variância", self.variance),
            ("Coeficiente de Variação", self.coefficient_of_variation),
            ("IQR", self.iqr),
            ("Mínimo", self.min),
            ("Máximo", self.max),
        ]
    }

    /// The three quartiles as `(q, value)` pairs.
    #[must_use]
    pub fn quartiles(&self) -> [(f64, f64); 3] {
        [(0.25, self.q1), (0.5, self.q2), (0.75, self.q3)]
    }
}

/// Summarizes the `discount_percent` column of `catalog`.
///
/// # Errors
///
/// See [`summarize_values`].
pub fn summarize(catalog: &Catalog) -> Result<DiscountSummary, StatsError> {
    summarize_values(&catalog.discounts())
}

/// Summarizes raw discount values (order does not matter).
///
/// # Errors
///
/// - [`StatsError::EmptyCatalog`] when `values` is empty.
/// - [`StatsError::InsufficientData`] when there is a single value, since
///   the sample variance is undefined. A one-record catalog therefore ends
///   the run before any CSV or XLSX export is written.
/// - [`StatsError::DivideByZero`] when every value is zero, since the
///   coefficient of variation divides by the mean.
#[allow(clippy::cast_precision_loss)]
pub fn summarize_values(values: &[u8]) -> Result<DiscountSummary, StatsError> {
    let count = values.len();
    match count {
        0 => return Err(StatsError::EmptyCatalog),
        1 => {
            return Err(StatsError::InsufficientData {
                needed: 2,
                found: 1,
            })
        }
        _ => {}
    }
    // Discounts are non-negative, so a zero mean means every value is zero.
    if values.iter().all(|v| *v == 0) {
        return Err(StatsError::DivideByZero);
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let n = count as f64;
    let mean = sorted.iter().map(|v| f64::from(*v)).sum::<f64>() / n;
    let variance = sorted
        .iter()
        .map(|v| {
            let d = f64::from(*v) - mean;
            d * d
        })
        .sum::<f64>()
        / (n - 1.0);
    let std_dev = variance.sqrt();

    let q1 = interpolate(&sorted, 0.25);
    let q2 = interpolate(&sorted, 0.5);
    let q3 = interpolate(&sorted, 0.75);

    let summary = DiscountSummary {
        count,
        mean,
        median: q2,
        std_dev,
        variance,
        min: f64::from(sorted[0]),
        max: f64::from(sorted[count - 1]),
        coefficient_of_variation: std_dev / mean,
        q1,
        q2,
        q3,
        iqr: q3 - q1,
    };
    tracing::debug!(count, mean, std_dev, "summarized discounts");
    Ok(summary)
}

/// Quantile `q` (in `0.0..=1.0`) of `values` by linear interpolation.
///
/// Returns `None` for an empty slice or a `q` outside the unit interval.
#[must_use]
pub fn quantile(values: &[u8], q: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    Some(interpolate(&sorted, q))
}

/// `sorted` must be non-empty and ascending; `q` within `0.0..=1.0`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn interpolate(sorted: &[u8], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let low = f64::from(sorted[lower]);
    let high = f64::from(sorted[upper]);
    low + (high - low) * (position - position.floor())
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
