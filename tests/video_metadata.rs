//! Video Metadata Integration Tests
//!
//! Tests that each best-effort field is omitted independently.

mod common;

use std::cell::Cell;

use common::*;
use storefront_sitemap::config::Capabilities;
use storefront_sitemap::domain::Product;
use storefront_sitemap::{
    EntryAssembler, EntryCollector, EntryOptions, MetaDataProvider, NotAvailable, SitemapConfig,
    Store,
};

/// Provider whose description lookup always fails
struct FailingDescription;

impl MetaDataProvider for FailingDescription {
    fn description(&self, _product: &Product, _store: &Store) -> Result<String, NotAvailable> {
        Err(NotAvailable::new("description"))
    }
}

/// Provider that counts lookups
struct Counting<'a>(&'a Cell<usize>);

impl MetaDataProvider for Counting<'_> {
    fn description(&self, product: &Product, _store: &Store) -> Result<String, NotAvailable> {
        self.0.set(self.0.get() + 1);
        Ok(format!("About {}", product.name))
    }
}

fn config(site_name: Option<&str>) -> SitemapConfig {
    SitemapConfig {
        site_name: site_name.map(str::to_string),
        capabilities: Capabilities {
            videos: true,
            content: None,
        },
        ..Default::default()
    }
}

#[test]
fn test_description_failure_keeps_other_fields() {
    let catalog = catalog();
    let store = store(&catalog, "global");
    let config = config(Some("Example Shop"));
    let mug = product(1, "mug", 3, &[GLOBAL]);

    let assembler = EntryAssembler::new(&config, &catalog).with_metadata_provider(FailingDescription);
    let video = assembler.build_video_metadata("abc", &mug, &store);

    assert!(video.description.is_none());
    assert_eq!(video.title.as_deref(), Some("Example Shop - mug"));
    assert_eq!(video.thumbnail_loc, "http://img.youtube.com/vi/abc/0.jpg");
    assert_eq!(video.player_loc, "http://www.youtube.com/v/abc");
    assert_eq!(video.autoplay, "ap=1");
}

#[test]
fn test_missing_site_name_keeps_description() {
    let catalog = catalog();
    let store = store(&catalog, "global");
    let config = config(None);
    let mut mug = product(1, "mug", 3, &[GLOBAL]);
    mug.meta_description = Some("A sturdy mug".to_string());

    let assembler = EntryAssembler::new(&config, &catalog);
    let video = assembler.build_video_metadata("abc", &mug, &store);

    assert_eq!(video.description.as_deref(), Some("A sturdy mug"));
    assert!(video.title.is_none());
    assert_eq!(video.player_loc, "http://www.youtube.com/v/abc");
}

#[test]
fn test_all_optional_fields_missing_still_emits_entry() {
    let mut catalog = catalog();
    catalog.products = vec![with_videos(product(1, "mug", 3, &[GLOBAL]), &["xyz"])];
    let store = store(&catalog, "global");
    let config = config(None);

    let mut sink = EntryCollector::new();
    EntryAssembler::new(&config, &catalog)
        .at(now())
        .with_metadata_provider(FailingDescription)
        .emit_products(&mut sink, &store, &EntryOptions::default());

    let video = sink.find("/products/mug").unwrap().video().unwrap();
    assert!(video.description.is_none());
    assert!(video.title.is_none());
    assert_eq!(video.thumbnail_loc, "http://img.youtube.com/vi/xyz/0.jpg");
}

#[test]
fn test_provider_consulted_once_per_video_product() {
    let mut catalog = catalog();
    catalog.products = vec![
        with_videos(product(1, "mug", 3, &[GLOBAL]), &["a", "b"]),
        product(2, "plate", 3, &[GLOBAL]),
        with_videos(product(3, "bowl", 3, &[GLOBAL]), &["c"]),
    ];
    let store = store(&catalog, "global");
    let config = config(Some("Shop"));
    let calls = Cell::new(0);

    let mut sink = EntryCollector::new();
    EntryAssembler::new(&config, &catalog)
        .at(now())
        .with_metadata_provider(Counting(&calls))
        .emit_products(&mut sink, &store, &EntryOptions::default());

    assert_eq!(calls.get(), 2);
    assert_eq!(
        sink.find("/products/bowl").unwrap().video().unwrap().description.as_deref(),
        Some("About bowl")
    );
}

#[test]
fn test_store_description_fallback() {
    let mut catalog = catalog();
    catalog.stores[0].meta_description = Some("Everything for the kitchen".to_string());
    let store = store(&catalog, "global");
    let config = config(Some("Shop"));
    let mug = product(1, "mug", 3, &[GLOBAL]);

    let video = EntryAssembler::new(&config, &catalog).build_video_metadata("abc", &mug, &store);
    assert_eq!(video.description.as_deref(), Some("Everything for the kitchen"));
}
