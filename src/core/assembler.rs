//! Sitemap entry assembly.
//!
//! The assembler walks a catalog snapshot for one store and hands entries
//! to a [`SitemapSink`]. It never fails: disabled integrations turn their
//! branch into a no-op, malformed items are skipped, and optional video
//! fields are left out when they cannot be produced.

use chrono::{DateTime, Utc};
use glob::Pattern;
use tracing::{debug, info, warn};

use crate::adapters::SitemapSink;
use crate::catalog::{last_updated, Catalog};
use crate::config::{ContentIntegration, Integration, SitemapConfig};
use crate::domain::{EntryOptions, Product, Store, Taxon, VideoMetadata};
use crate::routes;

use super::video::{self, MetaDataProvider, StorefrontMetaData};

/// Builds sitemap entries for a catalog
pub struct EntryAssembler<'a> {
    config: &'a SitemapConfig,
    catalog: &'a Catalog,
    metadata: Box<dyn MetaDataProvider + 'a>,
    exclusions: Vec<Pattern>,
    now: DateTime<Utc>,
}

impl<'a> EntryAssembler<'a> {
    /// Create an assembler evaluated at the current instant
    pub fn new(config: &'a SitemapConfig, catalog: &'a Catalog) -> Self {
        let exclusions = config.exclusion_patterns().unwrap_or_else(|e| {
            warn!("Ignoring exclusions: {}", e);
            Vec::new()
        });

        Self {
            config,
            catalog,
            metadata: Box::new(StorefrontMetaData),
            exclusions,
            now: Utc::now(),
        }
    }

    /// Evaluate product availability at `now` instead of the current instant
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Replace the page meta data provider
    pub fn with_metadata_provider(mut self, provider: impl MetaDataProvider + 'a) -> Self {
        self.metadata = Box::new(provider);
        self
    }

    /// Whether an optional integration is enabled. Never errors.
    pub fn is_integration_available(&self, integration: Integration) -> bool {
        self.config.capabilities.is_available(integration)
    }

    /// Everything for one store, in the order a host sitemap lists it
    pub fn emit_all(&self, sink: &mut dyn SitemapSink, store: &Store, options: &EntryOptions) {
        self.emit_static_pages(sink, options);
        self.emit_products(sink, store, options);
        self.emit_content_pages(sink, store, options);
        self.emit_taxon_tree(sink, store, options);
        self.emit_product_filters(sink, store, options);
        info!(store = %store.code, "Sitemap entries emitted");
    }

    // ------------------------------------------------------------------
    // Account pages
    // ------------------------------------------------------------------

    /// Login, signup, account and password reset pages, without timestamps
    pub fn emit_static_pages(&self, sink: &mut dyn SitemapSink, options: &EntryOptions) {
        self.emit_login(sink, options);
        self.emit_signup(sink, options);
        self.emit_account(sink, options);
        self.emit_password_reset(sink, options);
    }

    pub fn emit_login(&self, sink: &mut dyn SitemapSink, options: &EntryOptions) {
        self.add(sink, routes::LOGIN_PATH, options.clone());
    }

    pub fn emit_signup(&self, sink: &mut dyn SitemapSink, options: &EntryOptions) {
        self.add(sink, routes::SIGNUP_PATH, options.clone());
    }

    pub fn emit_account(&self, sink: &mut dyn SitemapSink, options: &EntryOptions) {
        self.add(sink, routes::ACCOUNT_PATH, options.clone());
    }

    pub fn emit_password_reset(&self, sink: &mut dyn SitemapSink, options: &EntryOptions) {
        self.add(sink, routes::PASSWORD_RESET_PATH, options.clone());
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    /// Product listing plus one entry per active product of the store
    pub fn emit_products(&self, sink: &mut dyn SitemapSink, store: &Store, options: &EntryOptions) {
        let products = self.catalog.active_products(store, self.now);
        let lastmod = last_updated(products.iter().map(|p| p.updated_at));

        self.add(sink, routes::PRODUCTS_PATH, options.with_lastmod(lastmod));

        for product in &products {
            self.emit_product(sink, product, store, options);
        }

        debug!(store = %store.code, count = products.len(), "Products emitted");
    }

    /// One product page, with a video block for its first video
    pub fn emit_product(
        &self,
        sink: &mut dyn SitemapSink,
        product: &Product,
        store: &Store,
        options: &EntryOptions,
    ) {
        if product.slug.trim().is_empty() {
            debug!(product = product.id, "Skipping product without slug");
            return;
        }

        let mut opts = options.with_lastmod(Some(product.updated_at));

        if self.is_integration_available(Integration::Videos) {
            // One video per page keeps titles unique across the sitemap
            if let Some(primary) = product.primary_video() {
                opts = opts.with_video(self.build_video_metadata(&primary.youtube_ref, product, store));
            }
        }

        self.add(sink, &routes::product_path(product), opts);
    }

    /// Best-effort video block for a product
    pub fn build_video_metadata(
        &self,
        youtube_ref: &str,
        product: &Product,
        store: &Store,
    ) -> VideoMetadata {
        video::build_video_metadata(
            youtube_ref,
            product,
            store,
            self.config.site_name.as_deref(),
            self.metadata.as_ref(),
        )
    }

    // ------------------------------------------------------------------
    // CMS pages
    // ------------------------------------------------------------------

    /// Pages of the enabled content integration; no-op when none is enabled
    pub fn emit_content_pages(
        &self,
        sink: &mut dyn SitemapSink,
        store: &Store,
        options: &EntryOptions,
    ) {
        match self.config.capabilities.content {
            Some(ContentIntegration::EssentialCms) => {
                for page in self.catalog.accessible_pages(store) {
                    if page.path.trim().is_empty() {
                        debug!(page = page.id, "Skipping page without path");
                        continue;
                    }
                    let opts = options.with_lastmod(Some(page.updated_at));
                    self.add(sink, &routes::rooted(&page.path), opts);
                }
            }
            Some(ContentIntegration::StaticContent) => {
                for page in self.catalog.visible_pages(store) {
                    if page.slug.trim().is_empty() {
                        debug!(page = page.id, "Skipping page without slug");
                        continue;
                    }
                    let opts = options.with_lastmod(Some(page.updated_at));
                    self.add(sink, &routes::rooted(&page.slug), opts);
                }
            }
            None => debug!("No content integration enabled"),
        }
    }

    // ------------------------------------------------------------------
    // Taxons
    // ------------------------------------------------------------------

    /// Every navigable taxon of the store, depth-first pre-order
    pub fn emit_taxon_tree(&self, sink: &mut dyn SitemapSink, store: &Store, options: &EntryOptions) {
        let tree = self.catalog.taxon_tree();
        tree.walk(store, |taxon, _depth| self.emit_taxon(sink, taxon, options));
    }

    /// A single taxon page; blank permalinks and hidden taxons are skipped
    pub fn emit_taxon(&self, sink: &mut dyn SitemapSink, taxon: &Taxon, options: &EntryOptions) {
        if !taxon.is_emittable() {
            debug!(taxon = taxon.id, "Skipping non-navigable taxon");
            return;
        }

        let lastmod = self.catalog.products_last_updated(taxon.id);
        self.add(sink, &routes::nested_taxons_path(taxon), options.with_lastmod(lastmod));
    }

    // ------------------------------------------------------------------
    // Product filters
    // ------------------------------------------------------------------

    /// Filter landing pages, using the slug localized for the store
    pub fn emit_product_filters(
        &self,
        sink: &mut dyn SitemapSink,
        store: &Store,
        options: &EntryOptions,
    ) {
        let is_global = self.config.is_global_store(&store.code);

        for filter in self.catalog.filters() {
            let taxon = match filter.taxon_id.and_then(|id| self.catalog.taxon(id)) {
                Some(taxon) => taxon,
                None => {
                    debug!(filter = filter.id, "Skipping filter without taxon");
                    continue;
                }
            };

            let slug = filter.slug_for(is_global);
            if slug.trim().is_empty() {
                debug!(filter = filter.id, "Skipping filter without slug");
                continue;
            }

            let lastmod = self.catalog.products_last_updated(taxon.id);
            self.add(sink, &routes::rooted(slug), options.with_lastmod(lastmod));
        }
    }

    fn add(&self, sink: &mut dyn SitemapSink, path: &str, options: EntryOptions) {
        if self.exclusions.iter().any(|p| p.matches(path)) {
            debug!(path, "Excluded from sitemap");
            return;
        }
        sink.add(path, options);
    }
}
