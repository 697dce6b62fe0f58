//! Domain types for storefront sitemaps.
//!
//! This module contains the read-only catalog records and the entry
//! descriptors produced from them:
//! - Store: Sales channel / locale scope
//! - Product, Page, Taxon, ProductFilter: Content items
//! - SitemapEntry: Path, last-modified timestamp and optional video block

pub mod entry;
pub mod filter;
pub mod page;
pub mod product;
pub mod store;
pub mod taxon;

// Re-export commonly used types
pub use entry::{EntryOptions, SitemapEntry, VideoMetadata};
pub use filter::ProductFilter;
pub use page::Page;
pub use product::{Product, Video};
pub use store::{Store, StoreId};
pub use taxon::{Taxon, TaxonId};
