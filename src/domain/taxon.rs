//! Taxons (hierarchical categories).

use serde::{Deserialize, Serialize};

use super::store::{in_store, Store, StoreId};

/// Numeric taxon identifier
pub type TaxonId = u64;

/// A category node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxon {
    pub id: TaxonId,

    /// `None` for roots
    #[serde(default)]
    pub parent_id: Option<TaxonId>,

    /// Sort key among siblings
    #[serde(default)]
    pub position: i64,

    #[serde(default)]
    pub name: String,

    /// Public URL slug, may contain `/` for nested taxons
    #[serde(default)]
    pub permalink: String,

    /// Hidden taxons are walked but never emitted
    #[serde(default = "default_navigable")]
    pub navigable: bool,

    #[serde(default)]
    pub store_ids: Vec<StoreId>,
}

fn default_navigable() -> bool {
    true
}

impl Taxon {
    /// Whether the taxon deserves its own sitemap entry
    pub fn is_emittable(&self) -> bool {
        !self.permalink.trim().is_empty() && self.navigable
    }

    pub fn in_store(&self, store: &Store) -> bool {
        in_store(&self.store_ids, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigable_defaults_to_true() {
        let taxon: Taxon = serde_json::from_str(r#"{"id": 3, "permalink": "shoes"}"#).unwrap();
        assert!(taxon.navigable);
        assert!(taxon.is_emittable());
    }

    #[test]
    fn test_blank_permalink_is_not_emittable() {
        let taxon: Taxon = serde_json::from_str(r#"{"id": 3, "permalink": "  "}"#).unwrap();
        assert!(!taxon.is_emittable());
    }
}
