//! Typed media block kinds and their property schemas.
//!
//! These are the non-text block kinds the block-editing surface renders.
//! The kind is decided from a media-bank selection; alignment and width are
//! pure property updates driven by the surface's contextual menu.

use serde::{Deserialize, Serialize};

use crate::media::{self, MediaKind, MediaSelection};

/// Horizontal alignment of an embedded block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Rendered width of a width-bearing embed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbedWidth {
    #[serde(rename = "50%")]
    Half,
    #[serde(rename = "70%")]
    Wide,
    #[serde(rename = "85%")]
    ExtraWide,
    #[default]
    #[serde(rename = "100%")]
    Full,
}

impl EmbedWidth {
    pub fn as_percent(self) -> u8 {
        match self {
            Self::Half => 50,
            Self::Wide => 70,
            Self::ExtraWide => 85,
            Self::Full => 100,
        }
    }
}

/// A media block payload, discriminated on `kind`.
///
/// `id` references the source media asset in the bank; `youtube-embed`
/// carries the extracted 11-character video id instead of a raw URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EmbedBlock {
    MediaEmbed {
        id: String,
        url: String,
        name: String,
        alignment: Alignment,
        width: EmbedWidth,
    },
    AudioEmbed {
        id: String,
        url: String,
        name: String,
        alignment: Alignment,
    },
    FileEmbed {
        id: String,
        url: String,
        name: String,
        alignment: Alignment,
        extension: String,
    },
    YoutubeEmbed {
        id: String,
        name: String,
        video_id: String,
        alignment: Alignment,
        width: EmbedWidth,
    },
}

impl EmbedBlock {
    /// Decide the concrete block kind for a media-bank selection.
    ///
    /// A `video` selection is checked against the YouTube URL grammar first;
    /// when extraction fails the selection still produces a renderable
    /// generic media embed rather than being rejected.
    pub fn for_selection(sel: &MediaSelection) -> Self {
        match sel.kind {
            MediaKind::Image => Self::media(sel),
            MediaKind::Video => match media::extract_embed_id(&sel.url) {
                Some(video_id) => Self::YoutubeEmbed {
                    id: sel.id.clone(),
                    name: sel.name.clone(),
                    video_id,
                    alignment: Alignment::default(),
                    width: EmbedWidth::default(),
                },
                None => {
                    tracing::debug!(url = %sel.url, "no embed id in video url, using generic embed");
                    Self::media(sel)
                }
            },
            MediaKind::Audio => Self::AudioEmbed {
                id: sel.id.clone(),
                url: sel.url.clone(),
                name: sel.name.clone(),
                alignment: Alignment::default(),
            },
            MediaKind::File => Self::FileEmbed {
                id: sel.id.clone(),
                url: sel.url.clone(),
                name: sel.name.clone(),
                alignment: Alignment::default(),
                extension: extension_from_url(&sel.url),
            },
        }
    }

    fn media(sel: &MediaSelection) -> Self {
        Self::MediaEmbed {
            id: sel.id.clone(),
            url: sel.url.clone(),
            name: sel.name.clone(),
            alignment: Alignment::default(),
            width: EmbedWidth::default(),
        }
    }

    /// Update the alignment property. Applies to every kind.
    pub fn set_alignment(&mut self, value: Alignment) {
        match self {
            Self::MediaEmbed { alignment, .. }
            | Self::AudioEmbed { alignment, .. }
            | Self::FileEmbed { alignment, .. }
            | Self::YoutubeEmbed { alignment, .. } => *alignment = value,
        }
    }

    /// Update the width property. Returns false for kinds without a width.
    pub fn set_width(&mut self, value: EmbedWidth) -> bool {
        match self {
            Self::MediaEmbed { width, .. } | Self::YoutubeEmbed { width, .. } => {
                *width = value;
                true
            }
            Self::AudioEmbed { .. } | Self::FileEmbed { .. } => false,
        }
    }
}

/// Derive the display extension from a URL suffix, upper-cased.
/// A URL without a dot in its final segment yields an empty string.
pub fn extension_from_url(url: &str) -> String {
    let tail = url.rsplit('/').next().unwrap_or(url);
    let tail = tail.split(['?', '#']).next().unwrap_or(tail);
    match tail.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_uppercase(),
        _ => String::new(),
    }
}
