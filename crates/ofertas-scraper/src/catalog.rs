//! Multi-page catalog build.

use ofertas_core::{Catalog, PipelineConfig, ProductRecord, PAGE_PLACEHOLDER};

use crate::client::PageFetcher;
use crate::error::ScraperError;
use crate::extract::{extract_records, ListingSelectors};

/// Substitutes `page` for every `{page}` placeholder in `template`.
#[must_use]
pub fn page_url(template: &str, page: u32) -> String {
    template.replace(PAGE_PLACEHOLDER, &page.to_string())
}

/// Fetches and extracts every configured page, returning the sorted catalog.
///
/// **All-or-nothing semantics**: the first page that fails to fetch or
/// extract aborts the build and records from earlier pages are dropped.
///
/// # Errors
///
/// Propagates the first error from [`collect_pages`].
pub async fn build_catalog<F: PageFetcher>(
    fetcher: &F,
    config: &PipelineConfig,
) -> Result<Catalog, ScraperError> {
    let records = collect_pages(fetcher, config).await?;
    let catalog = Catalog::from_unsorted(records);
    tracing::info!(records = catalog.len(), "catalog built");
    Ok(catalog)
}

/// Walks the page range in ascending order and concatenates each page's
/// records, keeping page order and in-page order. No sorting is done here.
///
/// With `stop_on_empty_page` set, the first page producing no records ends
/// the walk early.
///
/// # Errors
///
/// - [`ScraperError::InvalidSelector`] if the configured selectors do not compile.
/// - Any fetch-class error from `fetcher`.
/// - [`ScraperError::Structure`] from [`extract_records`].
pub async fn collect_pages<F: PageFetcher>(
    fetcher: &F,
    config: &PipelineConfig,
) -> Result<Vec<ProductRecord>, ScraperError> {
    let selectors = ListingSelectors::compile(config.selectors())?;
    let mut all_records: Vec<ProductRecord> = Vec::new();

    for page in config.pages() {
        let url = page_url(config.url_template(), page);

        let html = fetcher.fetch(&url).await.inspect_err(|e| {
            tracing::error!(page, url = %url, error = %e, "listing page fetch failed");
        })?;
        let records = extract_records(&html, &selectors, config.threshold()).inspect_err(|e| {
            tracing::error!(page, url = %url, error = %e, "listing page has unexpected structure");
        })?;

        let page_records = records.len();
        all_records.extend(records);
        tracing::info!(
            page,
            records = page_records,
            total = all_records.len(),
            "processed listing page"
        );

        if page_records == 0 && config.stop_on_empty_page() {
            tracing::info!(page, "page yielded no records; stopping pagination");
            break;
        }
    }

    Ok(all_records)
}
