//! Catalog build followed by the discount summary.

use anyhow::Context;
use ofertas_core::{Catalog, PipelineConfig};
use ofertas_scraper::PageFetcher;
use ofertas_stats::DiscountSummary;

/// Builds the catalog for `config` and summarizes it.
///
/// Both steps finish before anything is written, so a failed run leaves no
/// export files behind.
///
/// # Errors
///
/// Returns an error if any page fails to fetch or extract, or if the
/// catalog cannot be summarized (empty, single record, or all-zero discounts).
pub(crate) async fn run_pipeline<F: PageFetcher>(
    fetcher: &F,
    config: &PipelineConfig,
) -> anyhow::Result<(Catalog, DiscountSummary)> {
    let catalog = ofertas_scraper::build_catalog(fetcher, config)
        .await
        .context("failed to build promotions catalog")?;
    let summary =
        ofertas_stats::summarize(&catalog).context("failed to summarize catalog discounts")?;
    Ok((catalog, summary))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use ofertas_scraper::ScraperError;
    use ofertas_stats::StatsError;

    use super::*;

    struct MapFetcher(HashMap<String, String>);

    impl PageFetcher for MapFetcher {
        async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
            self.0.get(url).cloned().ok_or_else(|| ScraperError::NotFound {
                url: url.to_owned(),
            })
        }
    }

    fn listing(items: &[(&str, &str)]) -> String {
        let items: String = items
            .iter()
            .map(|(title, badge)| {
                format!(
                    r#"<li class="promotion-item">
                         <p class="promotion-item__title">{title}</p>
                         <span class="andes-money-amount__fraction">100</span>
                         <span class="promotion-item__discount-text">{badge}</span>
                       </li>"#
                )
            })
            .collect();
        format!("<ol>{items}</ol>")
    }

    fn fetcher(pages: &[String]) -> MapFetcher {
        MapFetcher(
            pages
                .iter()
                .enumerate()
                .map(|(i, body)| (format!("mem://p/{}", i + 1), body.clone()))
                .collect(),
        )
    }

    fn config(pages: u32) -> PipelineConfig {
        PipelineConfig::new("mem://p/{page}", 1, pages, 15).unwrap()
    }

    #[tokio::test]
    async fn returns_sorted_catalog_and_summary() {
        let pages = [
            listing(&[("Panela", "40% OFF")]),
            listing(&[("Faca", "10% OFF"), ("Garfo", "20% OFF")]),
            listing(&[("Colher", "30% OFF")]),
        ];

        let (catalog, summary) = run_pipeline(&fetcher(&pages), &config(3)).await.unwrap();

        let names: Vec<&str> = catalog.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Colher", "Garfo", "Panela"]);
        assert_eq!(summary.count, 3);
        assert!((summary.mean - 30.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn empty_catalog_fails_in_statistics() {
        let pages = [listing(&[("Faca", "10% OFF")])];

        let err = run_pipeline(&fetcher(&pages), &config(1)).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<StatsError>(),
            Some(&StatsError::EmptyCatalog)
        );
    }

    #[tokio::test]
    async fn single_record_fails_before_any_export() {
        let pages = [listing(&[("Panela", "40% OFF"), ("Faca", "5% OFF")])];

        let err = run_pipeline(&fetcher(&pages), &config(1)).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<StatsError>(),
            Some(&StatsError::InsufficientData {
                needed: 2,
                found: 1
            })
        );
    }

    #[tokio::test]
    async fn fetch_failure_surfaces_scraper_error() {
        let pages = [listing(&[("Panela", "40% OFF")])];

        let err = run_pipeline(&fetcher(&pages), &config(2)).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScraperError>(),
            Some(ScraperError::NotFound { .. })
        ));
    }
}
