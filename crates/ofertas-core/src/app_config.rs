use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::{ConfigError, PAGE_PLACEHOLDER};

/// CSS selectors describing the listing page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// One element per promotional item.
    pub container: String,
    /// Discount badge text inside a container; a container may carry several.
    pub badge: String,
    pub title: String,
    pub price: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: "li.promotion-item".to_string(),
            badge: "span.promotion-item__discount-text".to_string(),
            title: "p.promotion-item__title".to_string(),
            price: "span.andes-money-amount__fraction".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub url_template: String,
    pub first_page: u32,
    pub last_page: u32,
    pub discount_threshold: u8,
    pub stop_on_empty_page: bool,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub output_dir: PathBuf,
    /// Prefix for every export file and the worksheet name.
    pub project_id: String,
    pub log_level: String,
}

impl AppConfig {
    /// Validates the scraping settings and packages them for the pipeline.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidUrlTemplate`] if the template lacks `{page}`.
    /// - [`ConfigError::InvalidPageRange`] if the range is empty or starts at 0.
    /// - [`ConfigError::InvalidThreshold`] if the threshold exceeds 100.
    pub fn pipeline_config(&self) -> Result<PipelineConfig, ConfigError> {
        PipelineConfig::new(
            &self.url_template,
            self.first_page,
            self.last_page,
            self.discount_threshold,
        )
        .map(|cfg| cfg.with_stop_on_empty_page(self.stop_on_empty_page))
    }
}

/// Everything one catalog build needs: where to fetch, which pages, and
/// what qualifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    url_template: String,
    pages: RangeInclusive<u32>,
    threshold: u8,
    stop_on_empty_page: bool,
    selectors: SelectorConfig,
}

impl PipelineConfig {
    /// # Errors
    ///
    /// Same conditions as [`AppConfig::pipeline_config`].
    pub fn new(
        url_template: &str,
        first_page: u32,
        last_page: u32,
        threshold: u8,
    ) -> Result<Self, ConfigError> {
        if !url_template.contains(PAGE_PLACEHOLDER) {
            return Err(ConfigError::InvalidUrlTemplate(url_template.to_string()));
        }
        if first_page == 0 || first_page > last_page {
            return Err(ConfigError::InvalidPageRange {
                first: first_page,
                last: last_page,
            });
        }
        if threshold > 100 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(Self {
            url_template: url_template.to_string(),
            pages: first_page..=last_page,
            threshold,
            stop_on_empty_page: false,
            selectors: SelectorConfig::default(),
        })
    }

    #[must_use]
    pub fn with_stop_on_empty_page(mut self, stop: bool) -> Self {
        self.stop_on_empty_page = stop;
        self
    }

    #[must_use]
    pub fn with_selectors(mut self, selectors: SelectorConfig) -> Self {
        self.selectors = selectors;
        self
    }

    #[must_use]
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    #[must_use]
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.pages.clone()
    }

    #[must_use]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    #[must_use]
    pub fn stop_on_empty_page(&self) -> bool {
        self.stop_on_empty_page
    }

    #[must_use]
    pub fn selectors(&self) -> &SelectorConfig {
        &self.selectors
    }
}
