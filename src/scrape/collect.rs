// src/scrape/collect.rs
use crate::data::{Card, Series};
use super::cache::{FetchCache, FetchOutcome};

/// Concatenate per-series card batches in series order, document order within
/// each. `fetch` returning `None` skips the series. No deduplication: the same
/// card id may legitimately appear in several series.
pub fn aggregate<F, E>(series: &[Series], mut fetch: F, extract: E) -> Vec<Card>
where
    F: FnMut(&Series) -> Option<String>,
    E: Fn(&str, &Series) -> Vec<Card>,
{
    let mut cards = Vec::new();
    for s in series {
        let Some(body) = fetch(s) else { continue };
        cards.extend(extract(&body, s));
    }
    cards
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub fetched: usize,
    pub fresh: usize,
    pub failed: usize,
    /// Failed fetches that fell back to an older cached body.
    pub stale_reused: usize,
    /// Series that contributed nothing this run.
    pub skipped: usize,
}

/// What became of one series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesStatus {
    Fetched,
    Fresh,
    StaleReused,
    Skipped,
}

/// Turns fetch outcomes into markup for the extractor.
/// - `Fetched(body)` is used as-is.
/// - `Fresh` re-reads the cached body.
/// - `Failed` falls back to whatever is cached, however old.
pub struct Collector<'a> {
    cache: FetchCache<'a>,
    stats: CollectStats,
}

impl<'a> Collector<'a> {
    pub fn new(cache: FetchCache<'a>) -> Self {
        Self { cache, stats: CollectStats::default() }
    }

    pub fn stats(&self) -> CollectStats { self.stats }

    pub fn fetch(&mut self, series: &Series) -> (SeriesStatus, Option<String>) {
        match self.cache.fetch_or_reuse(series) {
            FetchOutcome::Fetched(body) => {
                self.stats.fetched += 1;
                (SeriesStatus::Fetched, Some(body))
            }
            FetchOutcome::Fresh => {
                self.stats.fresh += 1;
                match self.cache.cached_body(&series.id) {
                    Some(body) => (SeriesStatus::Fresh, Some(body)),
                    None => {
                        logw!("Series {} marked fresh but its cached body is missing", series.id);
                        self.stats.skipped += 1;
                        (SeriesStatus::Skipped, None)
                    }
                }
            }
            FetchOutcome::Failed(e) => {
                self.stats.failed += 1;
                match self.cache.cached_body(&series.id) {
                    Some(body) => {
                        logw!("Using stale cache for series {} ({e})", series.id);
                        self.stats.stale_reused += 1;
                        (SeriesStatus::StaleReused, Some(body))
                    }
                    None => {
                        self.stats.skipped += 1;
                        (SeriesStatus::Skipped, None)
                    }
                }
            }
        }
    }
}
