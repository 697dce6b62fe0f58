//! CMS content pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::store::{in_store, Store, StoreId};

/// A content page managed by one of the CMS integrations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: u64,

    #[serde(default)]
    pub title: String,

    /// Full path, used by the essential CMS integration
    #[serde(default)]
    pub path: String,

    /// Bare slug, used by the static content integration
    #[serde(default)]
    pub slug: String,

    /// "active" scope of the essential CMS integration
    #[serde(default)]
    pub accessible: bool,

    /// "visible" scope of the static content integration
    #[serde(default)]
    pub visible: bool,

    #[serde(default)]
    pub store_ids: Vec<StoreId>,

    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Whether the page is linked to `store`
    pub fn in_store(&self, store: &Store) -> bool {
        in_store(&self.store_ids, store)
    }
}
