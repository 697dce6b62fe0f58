//! Stores (sales channels).

use serde::{Deserialize, Serialize};

/// Numeric store identifier
pub type StoreId = u64;

/// A sales channel / locale scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,

    /// Short code, e.g. "global" or "br"
    pub code: String,

    #[serde(default)]
    pub name: String,

    /// Fallback description used when a product has none of its own
    #[serde(default)]
    pub meta_description: Option<String>,
}

impl Store {
    /// Create a store with just an id and code
    pub fn new(id: StoreId, code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            id,
            name: code.clone(),
            code,
            meta_description: None,
        }
    }
}

/// Membership test shared by every store-scoped record
pub(crate) fn in_store(store_ids: &[StoreId], store: &Store) -> bool {
    store_ids.contains(&store.id)
}
