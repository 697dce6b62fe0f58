//! Products and their attached videos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::store::{in_store, Store, StoreId};
use super::taxon::TaxonId;

/// A catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,

    pub name: String,

    /// URL slug, used in `/products/{slug}`
    pub slug: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub meta_description: Option<String>,

    /// Products without an availability date are never active
    #[serde(default)]
    pub available_on: Option<DateTime<Utc>>,

    #[serde(default)]
    pub discontinue_on: Option<DateTime<Utc>>,

    /// Soft-delete marker
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,

    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub store_ids: Vec<StoreId>,

    /// Taxons this product is classified under
    #[serde(default)]
    pub taxon_ids: Vec<TaxonId>,

    /// Attached videos, in display order
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl Product {
    /// Whether the product is purchasable at `now`
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        if self.deleted_at.is_some() {
            return false;
        }

        let available = matches!(self.available_on, Some(on) if on <= now);
        let discontinued = matches!(self.discontinue_on, Some(on) if on <= now);

        available && !discontinued
    }

    /// Whether the product is sold in `store`
    pub fn in_store(&self, store: &Store) -> bool {
        in_store(&self.store_ids, store)
    }

    /// Whether the product is classified under `taxon_id`
    pub fn in_taxon(&self, taxon_id: TaxonId) -> bool {
        self.taxon_ids.contains(&taxon_id)
    }

    /// First attached video, if any
    pub fn primary_video(&self) -> Option<&Video> {
        self.videos.first()
    }
}

/// A hosted video attached to a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// YouTube video id
    pub youtube_ref: String,
}

impl Video {
    pub fn new(youtube_ref: impl Into<String>) -> Self {
        Self {
            youtube_ref: youtube_ref.into(),
        }
    }
}
