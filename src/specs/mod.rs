// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific parsing for the card list site. Each spec encodes *where the
//! ground truth lives in the HTML* and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure parsing** of markup bodies into typed values (`Series`, `Card`).
//! - **Selector choice & precedence**, e.g. the attribute icon wins over the
//!   text after the attribute heading.
//! - **Tolerant extraction**: a missing sub-element leaves the field at its
//!   default, it never fails the card or the page.
//!
//! ## What does **not** live here
//! - **Networking and caching**: `scrape::series` and `scrape::cache` decide
//!   when a page is requested and whether a cached copy is reused.
//! - **Export formatting**: see `export`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::discover        → specs::series::parse_series(body)
//!        → scrape::Collector::fetch → specs::cards::extract_cards(body, series)
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against inline fixtures.
//! - Keep selectors resilient to whitespace, attribute order and harmless
//!   markup noise.
pub mod cards;
pub mod series;
