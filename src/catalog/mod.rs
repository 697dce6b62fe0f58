//! Materialized storefront catalog.
//!
//! The catalog is a read-only snapshot of the records the sitemap
//! contributors need. It replaces live queries with in-memory scopes:
//!
//! - `active_products`: store-scoped, purchasable, de-duplicated products
//! - `accessible_pages` / `visible_pages`: store-scoped CMS pages
//! - `taxon_tree`: category hierarchy with store scoping
//! - `products_last_updated`: last-modified aggregate for a taxon
//!
//! Snapshots are loaded from JSON or YAML:
//!
//! ```yaml
//! stores:
//!   - { id: 1, code: global }
//! products:
//!   - id: 10
//!     name: Mug
//!     slug: mug
//!     available_on: 2024-01-01T00:00:00Z
//!     updated_at: 2024-02-01T00:00:00Z
//!     store_ids: [1]
//! ```

pub mod tree;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Page, Product, ProductFilter, Store, Taxon, TaxonId};

pub use tree::{TaxonNode, TaxonTree};

/// Structural problems detected in a catalog snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate store code '{code}'")]
    DuplicateStoreCode { code: String },

    #[error("duplicate taxon id {id}")]
    DuplicateTaxon { id: TaxonId },

    #[error("taxon {id} references missing parent {parent_id}")]
    MissingParent { id: TaxonId, parent_id: TaxonId },

    #[error("taxon {id} is part of a parent cycle")]
    ParentCycle { id: TaxonId },

    #[error("unknown store '{code}'")]
    UnknownStore { code: String },
}

/// A complete catalog snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub stores: Vec<Store>,

    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub pages: Vec<Page>,

    #[serde(default)]
    pub taxons: Vec<Taxon>,

    #[serde(default)]
    pub filters: Vec<ProductFilter>,
}

impl Catalog {
    /// Load a catalog from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let catalog = if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        };

        catalog.with_context(|| format!("Failed to load catalog: {}", path.display()))
    }

    /// Parse a catalog from JSON content
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse catalog JSON")
    }

    /// Parse a catalog from YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse catalog YAML")
    }

    /// Check store codes and the taxon hierarchy
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut codes = HashSet::new();
        for store in &self.stores {
            if !codes.insert(store.code.as_str()) {
                return Err(CatalogError::DuplicateStoreCode {
                    code: store.code.clone(),
                });
            }
        }

        let mut ids = HashSet::new();
        for taxon in &self.taxons {
            if !ids.insert(taxon.id) {
                return Err(CatalogError::DuplicateTaxon { id: taxon.id });
            }
        }

        for taxon in &self.taxons {
            if let Some(parent_id) = taxon.parent_id {
                if !ids.contains(&parent_id) {
                    return Err(CatalogError::MissingParent {
                        id: taxon.id,
                        parent_id,
                    });
                }
            }
        }

        // Every chain of parents must reach a root within taxons.len() hops
        for taxon in &self.taxons {
            let mut current = taxon.parent_id;
            let mut hops = 0;
            while let Some(id) = current {
                hops += 1;
                if hops > self.taxons.len() {
                    return Err(CatalogError::ParentCycle { id: taxon.id });
                }
                current = self.taxon(id).and_then(|t| t.parent_id);
            }
        }

        Ok(())
    }

    /// Find a store by its code
    pub fn store_by_code(&self, code: &str) -> Result<&Store, CatalogError> {
        self.stores
            .iter()
            .find(|s| s.code == code)
            .ok_or_else(|| CatalogError::UnknownStore {
                code: code.to_string(),
            })
    }

    /// Active products sold in `store`, first occurrence of each id only
    pub fn active_products(&self, store: &Store, now: DateTime<Utc>) -> Vec<&Product> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| p.in_store(store) && p.is_active(now))
            .filter(|p| seen.insert(p.id))
            .collect()
    }

    /// Pages in the essential CMS "active" scope linked to `store`
    pub fn accessible_pages(&self, store: &Store) -> Vec<&Page> {
        self.pages
            .iter()
            .filter(|p| p.accessible && p.in_store(store))
            .collect()
    }

    /// Pages in the static content "visible" scope linked to `store`
    pub fn visible_pages(&self, store: &Store) -> Vec<&Page> {
        self.pages
            .iter()
            .filter(|p| p.visible && p.in_store(store))
            .collect()
    }

    pub fn filters(&self) -> &[ProductFilter] {
        &self.filters
    }

    pub fn taxon(&self, id: TaxonId) -> Option<&Taxon> {
        self.taxons.iter().find(|t| t.id == id)
    }

    /// Build the category hierarchy
    pub fn taxon_tree(&self) -> TaxonTree<'_> {
        TaxonTree::build(&self.taxons)
    }

    /// Most recent `updated_at` among non-deleted products classified under a taxon
    pub fn products_last_updated(&self, taxon_id: TaxonId) -> Option<DateTime<Utc>> {
        last_updated(
            self.products
                .iter()
                .filter(|p| p.deleted_at.is_none() && p.in_taxon(taxon_id))
                .map(|p| p.updated_at),
        )
    }
}

/// Maximum timestamp, `None` for an empty set
pub fn last_updated<I>(timestamps: I) -> Option<DateTime<Utc>>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    timestamps.into_iter().max()
}
