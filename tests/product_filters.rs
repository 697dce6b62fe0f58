//! Product Filter Integration Tests
//!
//! Tests for store-localized filter slugs and taxon requirements.

mod common;

use common::*;
use storefront_sitemap::{Catalog, EntryAssembler, EntryCollector, EntryOptions, SitemapConfig};

fn filters_catalog() -> Catalog {
    let mut catalog = catalog();
    catalog.taxons = vec![
        taxon(10, None, "kitchen", &[GLOBAL, BRAZIL]),
        taxon(11, None, "garden", &[GLOBAL, BRAZIL]),
    ];
    catalog.products = vec![
        in_taxons(product(1, "mug", 4, &[GLOBAL]), &[10]),
        in_taxons(product(2, "plate", 8, &[GLOBAL]), &[10]),
    ];
    catalog.filters = vec![
        filter(1, Some(10), "/red-mugs", "/canecas-vermelhas"),
        filter(2, None, "/no-taxon", "/sem-taxon"),
        filter(3, Some(99), "/dangling", "/pendente"),
        filter(4, Some(11), "/garden-tools", "/ferramentas"),
    ];
    catalog
}

fn emit(config: &SitemapConfig, catalog: &Catalog, code: &str) -> EntryCollector {
    let store = store(catalog, code);
    let mut sink = EntryCollector::new();
    EntryAssembler::new(config, catalog).emit_product_filters(&mut sink, &store, &EntryOptions::default());
    sink
}

#[test]
fn test_global_store_uses_global_slug() {
    let catalog = filters_catalog();
    let sink = emit(&SitemapConfig::default(), &catalog, "global");

    assert_eq!(sink.paths(), vec!["/red-mugs", "/garden-tools"]);
    assert_eq!(sink.find("/red-mugs").unwrap().lastmod(), Some(ts(8)));
    assert!(sink.find("/garden-tools").unwrap().lastmod().is_none());
}

#[test]
fn test_other_store_uses_local_slug() {
    let catalog = filters_catalog();
    let sink = emit(&SitemapConfig::default(), &catalog, "br");

    assert_eq!(sink.paths(), vec!["/canecas-vermelhas", "/ferramentas"]);
}

#[test]
fn test_configured_global_store_code() {
    let catalog = filters_catalog();
    let config = SitemapConfig {
        global_store_code: "br".to_string(),
        ..Default::default()
    };

    let sink = emit(&config, &catalog, "br");
    assert_eq!(sink.paths(), vec!["/red-mugs", "/garden-tools"]);

    let sink = emit(&config, &catalog, "global");
    assert_eq!(sink.paths(), vec!["/canecas-vermelhas", "/ferramentas"]);
}

#[test]
fn test_filter_with_blank_slug_is_skipped() {
    let mut catalog = filters_catalog();
    catalog.filters = vec![filter(1, Some(10), "/red-mugs", "")];

    let sink = emit(&SitemapConfig::default(), &catalog, "br");
    assert!(sink.is_empty());
}
