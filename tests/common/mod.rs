//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use storefront_sitemap::domain::{Page, Product, ProductFilter, Taxon, Video};
use storefront_sitemap::{Catalog, Store};

pub const GLOBAL: u64 = 1;
pub const BRAZIL: u64 = 2;

/// Midnight UTC on the first day of `month` in 2024
pub fn ts(month: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, 1, 0, 0, 0).unwrap()
}

/// The instant every test evaluates product availability at
pub fn now() -> DateTime<Utc> {
    ts(12)
}

pub fn stores() -> Vec<Store> {
    vec![Store::new(GLOBAL, "global"), Store::new(BRAZIL, "br")]
}

pub fn product(id: u64, slug: &str, updated_month: u32, stores: &[u64]) -> Product {
    Product {
        id,
        name: slug.replace('-', " "),
        slug: slug.to_string(),
        description: None,
        meta_description: None,
        available_on: Some(ts(1)),
        discontinue_on: None,
        deleted_at: None,
        updated_at: ts(updated_month),
        store_ids: stores.to_vec(),
        taxon_ids: Vec::new(),
        videos: Vec::new(),
    }
}

pub fn with_videos(mut product: Product, refs: &[&str]) -> Product {
    product.videos = refs.iter().map(|r| Video::new(*r)).collect();
    product
}

pub fn in_taxons(mut product: Product, taxons: &[u64]) -> Product {
    product.taxon_ids = taxons.to_vec();
    product
}

pub fn taxon(id: u64, parent_id: Option<u64>, permalink: &str, stores: &[u64]) -> Taxon {
    Taxon {
        id,
        parent_id,
        position: 0,
        name: permalink.to_string(),
        permalink: permalink.to_string(),
        navigable: true,
        store_ids: stores.to_vec(),
    }
}

pub fn page(id: u64, path: &str, slug: &str, updated_month: u32, stores: &[u64]) -> Page {
    Page {
        id,
        title: slug.to_string(),
        path: path.to_string(),
        slug: slug.to_string(),
        accessible: true,
        visible: true,
        store_ids: stores.to_vec(),
        updated_at: ts(updated_month),
    }
}

pub fn filter(id: u64, taxon_id: Option<u64>, global_slug: &str, local_slug: &str) -> ProductFilter {
    ProductFilter {
        id,
        taxon_id,
        global_slug: global_slug.to_string(),
        local_slug: local_slug.to_string(),
    }
}

pub fn catalog() -> Catalog {
    Catalog {
        stores: stores(),
        ..Default::default()
    }
}

pub fn store(catalog: &Catalog, code: &str) -> Store {
    catalog.store_by_code(code).unwrap().clone()
}
