//! storefront-sitemap - Sitemap entries for storefront catalogs
//!
//! Contributes product, content page, taxon, filter and account pages to
//! a sitemap builder. The crate owns no storage and writes no sitemap
//! files: it reads a catalog snapshot and hands `(path, options)` entries
//! to a sink.
//!
//! # Modules
//!
//! - `adapters`: Sink trait for external sitemap accumulators
//! - `catalog`: Materialized catalog snapshot and its query scopes
//! - `core`: Entry assembly and video metadata
//! - `domain`: Data structures (Store, Product, Page, Taxon, SitemapEntry)
//! - `routes`: Storefront path helpers
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Dump the entries of one store
//! storefront-sitemap generate --catalog catalog.yaml --store global
//!
//! # Validate a snapshot
//! storefront-sitemap check --catalog catalog.yaml
//! ```

pub mod adapters;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod routes;

// Re-export main types at crate root for convenience
pub use adapters::{EntryCollector, SitemapSink};
pub use catalog::{Catalog, CatalogError, TaxonTree};
pub use config::{Capabilities, ConfigError, ContentIntegration, Integration, SitemapConfig};
pub use crate::core::{EntryAssembler, MetaDataProvider, NotAvailable};
pub use domain::{EntryOptions, SitemapEntry, Store, VideoMetadata};
