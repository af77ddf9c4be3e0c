// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a series could not be fetched this run. Never fatal.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("POST failed with status {status} for series {series}")]
    Status { series: String, status: u16 },
    #[error("request failed for series {series}: {source}")]
    Transport {
        series: String,
        #[source]
        source: TransportError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Discovery problems are logged and turned into an empty series list.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("series request failed with status {0}")]
    Status(u16),
    #[error("series request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("no select tag found with id 'series'")]
    MissingSelect,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("delimiter {delimiter:?} found in field '{field}' of card '{card_id}'")]
    DelimiterCollision { card_id: String, field: &'static str, delimiter: char },
    #[error("column '{0}' missing from table header")]
    MissingColumn(&'static str),
}

/// The only errors that stop a run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
