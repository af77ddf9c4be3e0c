// src/log.rs
//
// Logging goes through `tracing`. The binary calls `init` once; library code
// only emits events via the macros below, so tests and embedders stay quiet
// unless they install a subscriber themselves.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Install a stderr layer at `level` plus a debug-level plain-text layer
/// appending to `log_file`.
/// If the log file can't be opened we keep the stderr layer only.
/// Calling this twice is harmless; the second call is a no-op.
pub fn init(level: LevelFilter, log_file: &Path) {
    let file_layer = open_log_file(log_file).map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
            .with_filter(LevelFilter::DEBUG)
    });

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(level);

    let _ = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

fn open_log_file(path: &Path) -> Option<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).ok()?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
