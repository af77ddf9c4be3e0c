// src/scrape/mod.rs
mod cache;
mod collect;
mod series;

pub use cache::{FetchCache, FetchOutcome};
pub use collect::{aggregate, CollectStats, Collector, SeriesStatus};
pub use series::{discover, try_discover};
