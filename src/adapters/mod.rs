//! Sink interfaces for external sitemap accumulators.
//!
//! The assembler never writes sitemap files itself. It hands every entry
//! to a [`SitemapSink`], which mirrors the `add(path, options)` contract
//! of the sitemap builder that owns aggregation and serialization.

pub mod collector;

use crate::domain::EntryOptions;

pub use collector::EntryCollector;

/// Trait for external sitemap accumulators
pub trait SitemapSink {
    /// Accept one entry
    fn add(&mut self, path: &str, options: EntryOptions);
}

impl<S: SitemapSink + ?Sized> SitemapSink for &mut S {
    fn add(&mut self, path: &str, options: EntryOptions) {
        (**self).add(path, options)
    }
}
