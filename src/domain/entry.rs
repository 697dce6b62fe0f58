//! Sitemap entry descriptors.
//!
//! An entry is the unit handed to a [`SitemapSink`](crate::adapters::SitemapSink):
//! a path plus the options the accumulator understands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options attached to a single `add(path, options)` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,

    /// At most one element for product entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video: Vec<VideoMetadata>,
}

impl EntryOptions {
    /// Copy of these options with `lastmod` replaced
    pub fn with_lastmod(&self, lastmod: Option<DateTime<Utc>>) -> Self {
        Self {
            lastmod,
            ..self.clone()
        }
    }

    /// Copy of these options with a single video block
    pub fn with_video(mut self, video: VideoMetadata) -> Self {
        self.video = vec![video];
        self
    }
}

/// A path with its options, as accumulated by a collecting sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub path: String,

    #[serde(flatten)]
    pub options: EntryOptions,
}

impl SitemapEntry {
    pub fn new(path: impl Into<String>, options: EntryOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn lastmod(&self) -> Option<DateTime<Utc>> {
        self.options.lastmod
    }

    pub fn video(&self) -> Option<&VideoMetadata> {
        self.options.video.first()
    }
}

/// Video sitemap block for a product page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub thumbnail_loc: String,

    pub player_loc: String,

    pub autoplay: String,
}
