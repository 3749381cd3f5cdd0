//! Catalog record types and the bootstrap document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Identifier of a [`Video`] record.
pub struct VideoId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Identifier of a [`Creator`] record.
pub struct CreatorId(pub u32);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One playable video entry.
pub struct Video {
    /// Stable id used by modals, favorites, and profile lookups.
    pub id: VideoId,
    /// Display title.
    pub title: String,
    /// Creator display name as stored on the record.
    ///
    /// This is the authoritative field for creator resolution; see
    /// [`Catalog::resolve_creator`] for why `creator_id` is only a fallback.
    pub creator: String,
    /// Declared creator id; may be stale or mismatched in source data.
    #[serde(default)]
    pub creator_id: Option<CreatorId>,
    /// Thumbnail/poster image URL.
    pub thumbnail: String,
    /// Preformatted duration label (for example `"12:34"`).
    pub duration: String,
    /// Preformatted view count, possibly suffixed (`"1.2M"`).
    pub views: String,
    /// Whether the video appears in the trending row.
    #[serde(default)]
    pub trending: bool,
    /// Whether the video appears in the new-releases row.
    #[serde(default)]
    pub new: bool,
    /// Playable media source URL.
    pub video_url: String,
    /// Optional long description shown in the modal.
    #[serde(default)]
    pub desc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One creator profile entry.
pub struct Creator {
    /// Stable id referenced by videos and profile navigation.
    pub id: CreatorId,
    /// Display name.
    pub name: String,
    /// Handle shown as `@username`.
    pub username: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Optional cover image URL; the avatar doubles as cover when absent.
    #[serde(default)]
    pub cover: Option<String>,
    /// Preformatted subscriber count.
    pub subscribers: String,
    /// Preformatted total view count.
    pub views: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One browsable category tile.
pub struct Category {
    /// Display name.
    pub name: String,
    /// Tile image URL.
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One photo entry.
pub struct Photo {
    /// Image URL.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Creator display name.
    pub creator: String,
}

#[derive(Debug, Error)]
/// Failures while bootstrapping the catalog from its external document.
pub enum CatalogError {
    /// The supplied document was not valid catalog JSON.
    #[error("catalog document parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// Read-only content snapshot supplied by the external data collaborator.
pub struct Catalog {
    /// All video records.
    #[serde(default)]
    pub videos: Vec<Video>,
    /// All category tiles.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// All photo entries.
    #[serde(default)]
    pub photos: Vec<Photo>,
    /// All creator profiles.
    #[serde(default)]
    pub creators: Vec<Creator>,
}

impl Catalog {
    /// Parses a catalog from the external JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when the document is malformed.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }
}
