//! Product filter landing pages.

use serde::{Deserialize, Serialize};

use super::taxon::TaxonId;

/// A filter landing page, bound to a taxon and localized per store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFilter {
    pub id: u64,

    #[serde(default)]
    pub taxon_id: Option<TaxonId>,

    /// Slug used by the global store
    #[serde(default)]
    pub global_slug: String,

    /// Slug used by every other store
    #[serde(default)]
    pub local_slug: String,
}

impl ProductFilter {
    /// Pick the slug variant for a store
    pub fn slug_for(&self, is_global_store: bool) -> &str {
        if is_global_store {
            &self.global_slug
        } else {
            &self.local_slug
        }
    }
}
