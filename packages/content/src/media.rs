//! Bridge from a media-bank selection to a block-insertable payload.
//!
//! Resolution is synchronous and pure: asset upload happens before the
//! selection reaches this module, so no network I/O is performed here.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::embed::EmbedBlock;

/// Asset kind offered by the media bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    File,
}

/// A user's pick from the media bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSelection {
    pub id: String,
    pub url: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

/// Resolve a media-bank selection into the block to insert.
pub fn resolve_selection(sel: &MediaSelection) -> EmbedBlock {
    EmbedBlock::for_selection(sel)
}

/// Matches watch, share, embed and bare `/v/` YouTube URL shapes, capturing
/// the 11-character embed id.
fn embed_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
        )
        .expect("embed id pattern is valid")
    })
}

/// Extract the 11-character YouTube embed id from a URL, or `None` when the
/// URL does not match the host's grammar.
pub fn extract_embed_id(url: &str) -> Option<String> {
    embed_id_pattern()
        .captures(url)
        .map(|caps| caps[1].to_string())
}
