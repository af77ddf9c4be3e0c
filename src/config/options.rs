// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::data::CardField;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Point both the cache and the results at directories under `root`.
    /// Handy for tests and for running several catalogs side by side.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut opts = Self::default();
        opts.scrape.raw_data_dir = root.join(RAW_DATA_DIR);
        opts.export.results_dir = root.join(DEFAULT_RESULTS_DIR);
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub card_list_path: String,
    pub raw_data_dir: PathBuf,
    /// Cached bodies younger than this are reused without a request.
    pub freshness_window: Duration,
    /// Pause after every live fetch (not after cache hits).
    pub inter_request_delay: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            card_list_path: s!(CARD_LIST_PATH),
            raw_data_dir: PathBuf::from(RAW_DATA_DIR),
            freshness_window: Duration::from_secs(FRESHNESS_HOURS as u64 * 3600),
            inter_request_delay: Duration::from_millis(REQUEST_PAUSE_MS),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl ScrapeOptions {
    pub fn card_list_url(&self) -> String {
        if self.base_url.ends_with('/') || self.card_list_path.starts_with('/') {
            join!(&self.base_url, &self.card_list_path)
        } else {
            join!(&self.base_url, "/", &self.card_list_path)
        }
    }

    pub fn body_path(&self, series_id: &str) -> PathBuf {
        self.raw_data_dir.join(format!("{series_id}.{CACHE_EXT}"))
    }

    pub fn timestamp_path(&self, series_id: &str) -> PathBuf {
        self.raw_data_dir
            .join(format!("{series_id}{TIMESTAMP_SUFFIX}.{CACHE_EXT}"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub results_dir: PathBuf,
    pub delimiter: char,
    /// Column schema, in output order.
    pub fields: Vec<CardField>,
    pub text_file: String,
    pub table_file: String,
    pub converter_file: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            delimiter: DELIMITER,
            fields: CardField::ALL.to_vec(),
            text_file: s!(CARD_DATA_TEXT_FILE),
            table_file: s!(CARD_DATA_TABLE_FILE),
            converter_file: s!(CONVERTER_FILE),
        }
    }
}

impl ExportOptions {
    pub fn text_path(&self) -> PathBuf { self.results_dir.join(&self.text_file) }
    pub fn table_path(&self) -> PathBuf { self.results_dir.join(&self.table_file) }
    pub fn converter_path(&self) -> PathBuf { self.results_dir.join(&self.converter_file) }
}
