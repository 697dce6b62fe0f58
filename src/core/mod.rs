//! Core assembly logic.
//!
//! This module contains:
//! - Assembler: Emits sitemap entries for a store
//! - Video: Best-effort video blocks and page meta data

pub mod assembler;
pub mod video;

// Re-export commonly used types
pub use assembler::EntryAssembler;
pub use video::{build_video_metadata, MetaDataProvider, NotAvailable, StorefrontMetaData};
