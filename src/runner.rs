// src/runner.rs
use std::path::PathBuf;

use crate::config::options::AppOptions;
use crate::core::net::Transport;
use crate::data::Card;
use crate::error::RunError;
use crate::export::{to_aligned_text, to_delimited_table, to_filtered_projection, validate_delimiter};
use crate::file::write_artifact;
use crate::progress::{NullProgress, Progress};
use crate::scrape::{self, CollectStats, Collector, FetchCache, SeriesStatus};
use crate::specs::cards::extract_cards_with_base;
use crate::store::BlobStore;

/// Summary of what one run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub series_discovered: usize,
    pub stats: CollectStats,
    pub cards: usize,
    pub alternate_art: usize,
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: discover → collect → validate → render → write.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    transport: &dyn Transport,
    store: &dyn BlobStore,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let result = run_inner(opts, transport, store, progress);
    progress.finish();
    result
}

fn run_inner(
    opts: &AppOptions,
    transport: &dyn Transport,
    store: &dyn BlobStore,
    progress: &mut dyn Progress,
) -> Result<RunSummary, RunError> {
    let series = scrape::discover(transport, &opts.scrape);
    if series.is_empty() {
        logw!("No series discovered; nothing to do.");
        progress.log("No series found.");
        return Ok(RunSummary::default());
    }

    progress.begin(series.len());

    let mut collector = Collector::new(FetchCache::new(transport, store, &opts.scrape));
    let cards = scrape::aggregate(
        &series,
        |s| {
            let (status, body) = collector.fetch(s);
            match status {
                SeriesStatus::Skipped => progress.item_failed(s, "no markup available"),
                _ => progress.item_done(s),
            }
            body
        },
        |body, s| extract_cards_with_base(body, s, &opts.scrape.base_url),
    );
    let stats = collector.stats();
    logf!(
        "Collected {} cards from {} series ({} fetched, {} fresh, {} failed, {} skipped)",
        cards.len(), series.len(), stats.fetched, stats.fresh, stats.failed, stats.skipped
    );

    let files_written = write_outputs(opts, store, &cards)?;

    Ok(RunSummary {
        series_discovered: series.len(),
        stats,
        cards: cards.len(),
        alternate_art: cards.iter().filter(|c| c.alternate_art).count(),
        files_written,
    })
}

/// Everything is rendered and checked before the first write.
fn write_outputs(opts: &AppOptions, store: &dyn BlobStore, cards: &[Card]) -> Result<Vec<PathBuf>, RunError> {
    let export = &opts.export;
    validate_delimiter(cards, export.delimiter)?;

    let mut text = to_aligned_text(cards, &export.fields).join("\n");
    text.push('\n');
    let table = to_delimited_table(cards, &export.fields, export.delimiter);
    let projection = to_filtered_projection(&table, export.delimiter)?;

    Ok(vec![
        write_artifact(store, &export.text_path(), &text)?,
        write_artifact(store, &export.table_path(), &table)?,
        write_artifact(store, &export.converter_path(), &projection)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::Duration;

    use crate::core::net::HttpResponse;
    use crate::data::Series;
    use crate::error::{ExportError, TransportError};
    use crate::store::MemStore;

    const LISTING: &str = r#"<select id="series"><option value="1">One</option><option value="2">Two</option></select>"#;

    /// Series list on an empty form, `pages[id]` otherwise; unknown ids 404.
    struct Site {
        pages: Vec<(&'static str, String)>,
    }

    impl Transport for Site {
        fn post(&self, _: &str, form: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
            let id = form[0].1;
            if id.is_empty() {
                return Ok(HttpResponse { status: 200, body: s!(LISTING) });
            }
            Ok(match self.pages.iter().find(|(k, _)| *k == id) {
                Some((_, body)) => HttpResponse { status: 200, body: body.clone() },
                None => HttpResponse { status: 404, body: s!() },
            })
        }
    }

    fn card(id: &str, effect: &str) -> String {
        format!(
            r#"<dl class="modalCol"><dt><div class="infoCol"><span>{id}</span></div><div class="cardName">N</div></dt><dd><div class="text"><h3>Effect</h3>{effect}</div></dd></dl>"#
        )
    }

    fn opts() -> AppOptions {
        let mut o = AppOptions::default();
        o.scrape.inter_request_delay = Duration::ZERO;
        o
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.events.push(format!("begin {total}")); }
        fn item_done(&mut self, s: &Series) { self.events.push(format!("done {}", s.id)); }
        fn item_failed(&mut self, s: &Series, _: &str) { self.events.push(format!("failed {}", s.id)); }
        fn finish(&mut self) { self.events.push(s!("finish")); }
    }

    #[test]
    fn skipped_series_still_produces_outputs() {
        let site = Site { pages: vec![("1", card("OP01-001", "x"))] };
        let store = MemStore::new();
        let mut rec = Recorder::default();

        let summary = run(&opts(), &site, &store, Some(&mut rec)).unwrap();
        assert_eq!(summary.series_discovered, 2);
        assert_eq!(summary.cards, 1);
        assert_eq!(summary.stats.fetched, 1);
        assert_eq!(summary.stats.skipped, 1);
        assert_eq!(summary.files_written.len(), 3);
        assert_eq!(rec.events, ["begin 2", "done 1", "failed 2", "finish"]);
    }

    #[test]
    fn collision_writes_nothing_and_reports() {
        let site = Site { pages: vec![("1", card("OP01-002", "A | B"))] };
        let store = MemStore::new();
        let err = run(&opts(), &site, &store, Some(&mut NullProgress)).unwrap_err();
        assert!(matches!(
            err,
            RunError::Export(ExportError::DelimiterCollision { field: "effect", .. })
        ));
        assert!(!store.has_dir(Path::new("results")));
    }

    #[test]
    fn no_series_no_files() {
        struct Empty;
        impl Transport for Empty {
            fn post(&self, _: &str, _: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
                Ok(HttpResponse { status: 200, body: s!("<select id='series'></select>") })
            }
        }
        let store = MemStore::new();
        let summary = run(&opts(), &Empty, &store, None).unwrap();
        assert_eq!(summary, RunSummary::default());
        assert_eq!(store.write_count(), 0);
    }
}
