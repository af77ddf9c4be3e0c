// src/scrape/cache.rs
//
// Per-series page cache: `{raw_data_dir}/{id}.txt` holds the body,
// `{id}_timestamp.txt` the local time of the last successful fetch.
// A body younger than the freshness window is reused without a request.

use std::thread;

use chrono::{Local, NaiveDateTime};

use crate::config::consts::SERIES_FORM_KEY;
use crate::config::options::ScrapeOptions;
use crate::core::net::Transport;
use crate::data::Series;
use crate::error::{FetchError, StoreError};
use crate::store::BlobStore;

const TIMESTAMP_FMT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug)]
pub enum FetchOutcome {
    /// Cached copy is within the freshness window; nothing was requested.
    Fresh,
    /// Live fetch succeeded and was persisted.
    Fetched(String),
    /// Request or persistence failed; any previous cache entry is untouched.
    Failed(FetchError),
}

pub struct FetchCache<'a> {
    transport: &'a dyn Transport,
    store: &'a dyn BlobStore,
    opts: &'a ScrapeOptions,
}

impl<'a> FetchCache<'a> {
    pub fn new(transport: &'a dyn Transport, store: &'a dyn BlobStore, opts: &'a ScrapeOptions) -> Self {
        Self { transport, store, opts }
    }

    pub fn fetch_or_reuse(&self, series: &Series) -> FetchOutcome {
        self.fetch_or_reuse_at(series, Local::now().naive_local())
    }

    pub fn fetch_or_reuse_at(&self, series: &Series, now: NaiveDateTime) -> FetchOutcome {
        let id = series.id.as_str();

        if self.is_fresh(id, now) {
            logf!("Data for series {id} is up to date.");
            return FetchOutcome::Fresh;
        }

        let url = self.opts.card_list_url();
        let resp = match self.transport.post(&url, &[(SERIES_FORM_KEY, id)]) {
            Ok(resp) => resp,
            Err(source) => {
                let err = FetchError::Transport { series: s!(id), source };
                loge!("{err}");
                return FetchOutcome::Failed(err);
            }
        };

        if !resp.is_success() {
            let err = FetchError::Status { series: s!(id), status: resp.status };
            loge!("{err}");
            return FetchOutcome::Failed(err);
        }
        logf!("POST request successful for series {id}");

        if let Err(e) = self.persist(id, &resp.body, now) {
            loge!("Could not cache series {id}: {e}");
            return FetchOutcome::Failed(e.into());
        }

        if !self.opts.inter_request_delay.is_zero() {
            thread::sleep(self.opts.inter_request_delay);
        }
        FetchOutcome::Fetched(resp.body)
    }

    /// When the series was last fetched, if we have a readable record of it.
    pub fn last_fetched(&self, id: &str) -> Option<NaiveDateTime> {
        let path = self.opts.timestamp_path(id);
        if !self.store.exists(&path) {
            return None;
        }
        let text = match self.store.read(&path) {
            Ok(t) => t,
            Err(e) => {
                logw!("Unreadable timestamp for series {id}: {e}");
                return None;
            }
        };
        match text.trim().parse::<NaiveDateTime>() {
            Ok(ts) => Some(ts),
            Err(e) => {
                logw!("Bad timestamp {:?} for series {id}: {e}; treating as stale", text.trim());
                None
            }
        }
    }

    /// A timestamp in the future counts as fresh. A timestamp without its
    /// body does not.
    pub fn is_fresh(&self, id: &str, now: NaiveDateTime) -> bool {
        let Some(fetched_at) = self.last_fetched(id) else { return false };
        if !self.store.exists(&self.opts.body_path(id)) {
            logw!("Timestamp for series {id} has no cached body; refetching");
            return false;
        }
        match now.signed_duration_since(fetched_at).to_std() {
            Ok(age) => age < self.opts.freshness_window,
            Err(_) => true,
        }
    }

    /// Re-read a previously cached body.
    pub fn cached_body(&self, id: &str) -> Option<String> {
        let path = self.opts.body_path(id);
        if !self.store.exists(&path) {
            return None;
        }
        match self.store.read(&path) {
            Ok(body) => Some(body),
            Err(e) => {
                logw!("Cached body for series {id} unreadable: {e}");
                None
            }
        }
    }

    fn persist(&self, id: &str, body: &str, now: NaiveDateTime) -> Result<(), StoreError> {
        let dir = &self.opts.raw_data_dir;
        if !self.store.exists(dir) {
            self.store.mkdir(dir)?;
        }

        let body_path = self.opts.body_path(id);
        self.store.write(&body_path, body)?;
        logd!("Response written to {}", body_path.display());

        let stamp = now.format(TIMESTAMP_FMT).to_string();
        self.store.write(&self.opts.timestamp_path(id), &stamp)?;
        logd!("Timestamp updated for series {id}: {stamp}");
        Ok(())
    }
}
