// src/specs/series.rs
//! Scraping *spec* for the series selector.
//!
//! The card list page carries `<select id="series">` whose options are the
//! catalog partitions. Only options with a numeric value are real series; the
//! rest are placeholders like "choose a series".

use crate::core::html::Document;
use crate::core::sanitize::{clean_series_name, is_numeric_id};
use crate::data::Series;
use crate::error::DiscoveryError;

pub fn parse_series(body: &str) -> Result<Vec<Series>, DiscoveryError> {
    let doc = Document::parse(body);
    let select = doc
        .root()
        .find_by_attr("select", "id", "series")
        .ok_or(DiscoveryError::MissingSelect)?;

    let series = select
        .descendants_named("option")
        .into_iter()
        .filter_map(|opt| {
            let value = opt.attr("value")?.trim();
            if !is_numeric_id(value) {
                return None;
            }
            Some(Series::new(value, clean_series_name(&opt.text())))
        })
        .collect();

    Ok(series)
}
