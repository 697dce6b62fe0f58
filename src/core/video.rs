//! Video sitemap blocks for product pages.
//!
//! Every optional field is looked up through its own accessor returning
//! `Result<String, NotAvailable>`. A missing field is left out of the block
//! and never prevents the remaining fields (or the entry) from being built.

use thiserror::Error;
use tracing::debug;

use crate::domain::{Product, Store, VideoMetadata};

/// Autoplay flag appended to the player URL by sitemap consumers
pub const AUTOPLAY: &str = "ap=1";

/// Descriptions are cut to this many characters, ellipsis included
pub const DESCRIPTION_LIMIT: usize = 160;

/// A best-effort field could not be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} not available")]
pub struct NotAvailable {
    pub field: &'static str,
}

impl NotAvailable {
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }
}

/// Source of page meta data for a product
pub trait MetaDataProvider {
    /// Description shown for the product page
    fn description(&self, product: &Product, store: &Store) -> Result<String, NotAvailable>;
}

/// Meta data as the storefront renders it in product page heads
///
/// Lookup order: product meta description, product description (tags
/// stripped, truncated on a word boundary), store meta description.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorefrontMetaData;

impl MetaDataProvider for StorefrontMetaData {
    fn description(&self, product: &Product, store: &Store) -> Result<String, NotAvailable> {
        if let Some(meta) = non_blank(product.meta_description.as_deref()) {
            return Ok(meta.to_string());
        }

        if let Some(description) = non_blank(product.description.as_deref()) {
            let text = strip_tags(description);
            if !text.is_empty() {
                return Ok(truncate_words(&text, DESCRIPTION_LIMIT));
            }
        }

        non_blank(store.meta_description.as_deref())
            .map(str::to_string)
            .ok_or(NotAvailable::new("description"))
    }
}

/// `"{site_name} - {product name}"`, mirroring product page titles
///
/// Unlike the storefront's own title helper, which renders `" - Mug"` without
/// a site name, a missing site name or product name leaves the title out.
pub fn video_title(site_name: Option<&str>, product: &Product) -> Result<String, NotAvailable> {
    let site_name = non_blank(site_name).ok_or(NotAvailable::new("title"))?;
    let name = non_blank(Some(product.name.as_str())).ok_or(NotAvailable::new("title"))?;

    Ok(format!("{} - {}", site_name, name))
}

pub fn thumbnail_loc(youtube_ref: &str) -> String {
    format!("http://img.youtube.com/vi/{}/0.jpg", youtube_ref)
}

pub fn player_loc(youtube_ref: &str) -> String {
    format!("http://www.youtube.com/v/{}", youtube_ref)
}

/// Compose a video block, omitting fields that are not available
pub fn build_video_metadata(
    youtube_ref: &str,
    product: &Product,
    store: &Store,
    site_name: Option<&str>,
    provider: &dyn MetaDataProvider,
) -> VideoMetadata {
    let description = provider
        .description(product, store)
        .map_err(|e| debug!(product = product.id, "Omitting video {}", e))
        .ok();

    let title = video_title(site_name, product)
        .map_err(|e| debug!(product = product.id, "Omitting video {}", e))
        .ok();

    VideoMetadata {
        description,
        title,
        thumbnail_loc: thumbnail_loc(youtube_ref),
        player_loc: player_loc(youtube_ref),
        autoplay: AUTOPLAY.to_string(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Drop markup and collapse whitespace
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut to `limit` characters including a trailing "...", preferring a space
fn truncate_words(text: &str, limit: usize) -> String {
    const OMISSION: &str = "...";

    if text.chars().count() <= limit {
        return text.to_string();
    }

    let keep = limit.saturating_sub(OMISSION.len());
    let head: String = text.chars().take(keep).collect();
    let cut = match head.rfind(' ') {
        Some(idx) if idx > 0 => &head[..idx],
        _ => head.as_str(),
    };

    format!("{}{}", cut.trim_end(), OMISSION)
}
