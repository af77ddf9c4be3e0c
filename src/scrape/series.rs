// src/scrape/series.rs
use crate::config::consts::SERIES_FORM_KEY;
use crate::config::options::ScrapeOptions;
use crate::core::net::Transport;
use crate::data::Series;
use crate::error::DiscoveryError;
use crate::specs::series::parse_series;

/// List the series on offer. Any failure is logged and yields an empty list,
/// which simply leaves the rest of the run with nothing to do.
pub fn discover(transport: &dyn Transport, opts: &ScrapeOptions) -> Vec<Series> {
    match try_discover(transport, opts) {
        Ok(series) => {
            logf!("Discovered {} series", series.len());
            series
        }
        Err(e) => {
            loge!("Series discovery failed: {e}");
            Vec::new()
        }
    }
}

pub fn try_discover(transport: &dyn Transport, opts: &ScrapeOptions) -> Result<Vec<Series>, DiscoveryError> {
    let resp = transport.post(&opts.card_list_url(), &[(SERIES_FORM_KEY, "")])?;
    if !resp.is_success() {
        return Err(DiscoveryError::Status(resp.status));
    }
    logd!("Series list fetched ({} bytes)", resp.body.len());
    parse_series(&resp.body)
}
