// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://en.onepiece-cardgame.com/";
pub const CARD_LIST_PATH: &str = "cardlist/";
pub const SERIES_FORM_KEY: &str = "series";
pub const USER_AGENT: &str = concat!("cardlist_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local cache
pub const RAW_DATA_DIR: &str = "raw_data";
pub const TIMESTAMP_SUFFIX: &str = "_timestamp";
pub const CACHE_EXT: &str = "txt";
pub const FRESHNESS_HOURS: i64 = 24;
pub const REQUEST_PAUSE_MS: u64 = 1_000; // be polite

// Logging
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const CARD_DATA_TEXT_FILE: &str = "card_data.txt";
pub const CARD_DATA_TABLE_FILE: &str = "card_data.csv";
pub const CONVERTER_FILE: &str = "converter_card_data.csv";
pub const DELIMITER: char = '|';
pub const COLUMN_SEP: &str = " | ";

// Markup
pub const SPINLINE_MARKERS: [&str; 2] = [
    r#"<br class="spInline">-"#,
    r#"<br class='spInline'>-"#,
];
pub const ALT_ART_MARKER: &str = "_p";
pub const PARENT_DIR_MARKER: &str = "..";
pub const FEATURE_LABEL: &str = "Type";
pub const EFFECT_LABEL: &str = "Effect";
