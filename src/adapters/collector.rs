//! In-memory sink that keeps entries in emission order.

use crate::domain::{EntryOptions, SitemapEntry};

use super::SitemapSink;

/// Collects entries into a `Vec`
#[derive(Debug, Clone, Default)]
pub struct EntryCollector {
    entries: Vec<SitemapEntry>,
}

impl EntryCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<SitemapEntry> {
        self.entries
    }

    /// Paths in emission order
    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.path.as_str()).collect()
    }

    /// First entry emitted for `path`
    pub fn find(&self, path: &str) -> Option<&SitemapEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SitemapSink for EntryCollector {
    fn add(&mut self, path: &str, options: EntryOptions) {
        self.entries.push(SitemapEntry::new(path, options));
    }
}
