//! Record extraction from one listing page.
//!
//! A page holds a list of promotional containers. Each container may carry
//! several discount badges; the first badge at or above the threshold decides
//! that the container becomes a [`ProductRecord`], and the remaining badges
//! are not looked at.

use ofertas_core::{ProductRecord, SelectorConfig};
use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;
use crate::normalize::{normalize_name, normalize_price, parse_discount};

/// Compiled form of a [`SelectorConfig`].
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    container: Selector,
    badge: Selector,
    title: Selector,
    price: Selector,
}

impl ListingSelectors {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] for the first selector that
    /// does not parse as CSS.
    pub fn compile(config: &SelectorConfig) -> Result<Self, ScraperError> {
        Ok(Self {
            container: compile_selector(&config.container)?,
            badge: compile_selector(&config.badge)?,
            title: compile_selector(&config.title)?,
            price: compile_selector(&config.price)?,
        })
    }
}

fn compile_selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::InvalidSelector {
        selector: css.to_owned(),
        reason: e.to_string(),
    })
}

/// Extracts every qualifying record from a listing page, in document order.
///
/// Elements that do not match the container selector are ignored, as are
/// badges without a digit run and badges below `threshold`.
///
/// # Errors
///
/// Returns [`ScraperError::Structure`] when a container has a qualifying
/// badge but lacks its title or price element. The whole page fails; no
/// records from it are returned.
pub fn extract_records(
    html: &str,
    selectors: &ListingSelectors,
    threshold: u8,
) -> Result<Vec<ProductRecord>, ScraperError> {
    let document = Html::parse_document(html);
    let mut records = Vec::new();

    for (index, container) in document.select(&selectors.container).enumerate() {
        if let Some(record) = extract_container(container, index, selectors, threshold)? {
            records.push(record);
        }
    }

    Ok(records)
}

fn extract_container(
    container: ElementRef<'_>,
    index: usize,
    selectors: &ListingSelectors,
    threshold: u8,
) -> Result<Option<ProductRecord>, ScraperError> {
    let qualifying = container
        .select(&selectors.badge)
        .filter_map(|badge| parse_discount(&element_text(badge)))
        .find(|discount| *discount >= threshold);

    let Some(discount_percent) = qualifying else {
        return Ok(None);
    };

    let title = container
        .select(&selectors.title)
        .next()
        .ok_or(ScraperError::Structure {
            field: "title",
            container: index,
        })?;
    let price = container
        .select(&selectors.price)
        .next()
        .ok_or(ScraperError::Structure {
            field: "price",
            container: index,
        })?;

    Ok(Some(ProductRecord {
        name: normalize_name(&element_text(title)),
        price: normalize_price(&element_text(price)),
        discount_percent,
    }))
}

/// Concatenated text of all descendant text nodes.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
