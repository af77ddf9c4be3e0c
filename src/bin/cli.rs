// src/bin/cli.rs
use std::path::Path;

use color_eyre::eyre::Result;
use tracing::level_filters::LevelFilter;

use cardlist_scrape::config::consts::{LOG_FILE, STORE_DIR};
use cardlist_scrape::config::options::AppOptions;
use cardlist_scrape::core::net::HttpTransport;
use cardlist_scrape::data::Series;
use cardlist_scrape::progress::Progress;
use cardlist_scrape::runner::{self, RunSummary};
use cardlist_scrape::store::FsStore;

/// Prints one line per series to stdout.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    seen: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Processing {total} series...");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, series: &Series) {
        self.seen += 1;
        println!("[{}/{}] {} ({})", self.seen, self.total, series.name, series.id);
    }

    fn item_failed(&mut self, series: &Series, reason: &str) {
        self.seen += 1;
        println!("[{}/{}] {} ({}) skipped: {reason}", self.seen, self.total, series.name, series.id);
    }
}

fn print_summary(summary: &RunSummary) {
    let st = &summary.stats;
    println!(
        "{} cards ({} alternate art) from {} series: {} fetched, {} fresh, {} failed ({} from stale cache), {} skipped",
        summary.cards,
        summary.alternate_art,
        summary.series_discovered,
        st.fetched,
        st.fresh,
        st.failed,
        st.stale_reused,
        st.skipped,
    );
    for path in &summary.files_written {
        println!("  wrote {}", path.display());
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    cardlist_scrape::log::init(LevelFilter::INFO, &Path::new(STORE_DIR).join(LOG_FILE));

    let opts = AppOptions::default();
    let transport = HttpTransport::new(&opts.scrape.user_agent, opts.scrape.request_timeout)?;
    let mut progress = ConsoleProgress::default();

    let summary = runner::run(&opts, &transport, &FsStore, Some(&mut progress))?;
    print_summary(&summary);
    Ok(())
}
