//! Per-session draft state, one struct per open document.
//!
//! A draft owns everything the editing surface mutates (title, cover,
//! categories, content) and is passed by reference to each operation; saving
//! through a repository is the explicit side-effecting boundary in
//! [`crate::session`].

use content::block::{BlockStore, ContentBlock};
use content::curriculum::Curriculum;
use content::media::{self, MediaSelection};

use crate::config::LimitsConfig;
use crate::error::EditorError;
use crate::repository::{CourseDocument, CoursePayload, LessonDocument, LessonPayload};

/// In-memory draft of a lesson document.
#[derive(Debug, Clone, Default)]
pub struct LessonDraft {
    /// Persisted id, once the draft has been saved.
    pub id: Option<String>,
    pub title: String,
    pub cover_url: Option<String>,
    pub category_ids: Vec<String>,
    pub blocks: BlockStore,
}

impl LessonDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an existing persisted lesson for editing.
    pub fn from_document(doc: &LessonDocument) -> Result<Self, EditorError> {
        let mut blocks = BlockStore::new();
        blocks.load_content_json(&doc.content)?;
        Ok(Self {
            id: Some(doc.id.clone()),
            title: doc.title.clone(),
            cover_url: doc.cover_url.clone(),
            category_ids: doc.category_ids.clone(),
            blocks,
        })
    }

    /// Resolve a media-bank selection and append the resulting embed as a
    /// new block. Resolution never fails: an unextractable video URL
    /// degrades to a generic embed.
    pub fn insert_media(&mut self, selection: &MediaSelection) -> Result<&ContentBlock, EditorError> {
        let embed = media::resolve_selection(selection);
        let payload = serde_json::to_string(&embed)?;
        Ok(self.blocks.add_block_with_payload(payload))
    }

    /// Readiness predicate gating save.
    pub fn validate(&self, limits: &LimitsConfig) -> Result<(), EditorError> {
        validate_title(&self.title, limits)?;
        if self.blocks.len() > limits.max_blocks {
            return Err(EditorError::Validation(format!(
                "Lesson exceeds the maximum of {} blocks",
                limits.max_blocks
            )));
        }
        Ok(())
    }

    /// Snapshot the draft as a persistence payload. Block order is
    /// recomputed from array position inside the serialized content.
    pub fn payload(&self) -> Result<LessonPayload, EditorError> {
        Ok(LessonPayload {
            title: self.title.trim().to_string(),
            cover_url: self.cover_url.clone(),
            category_ids: self.category_ids.clone(),
            content: self.blocks.to_content_json()?,
        })
    }
}

/// In-memory draft of a course document.
#[derive(Debug, Clone, Default)]
pub struct CourseDraft {
    pub id: Option<String>,
    pub title: String,
    pub cover_url: Option<String>,
    pub category_ids: Vec<String>,
    pub curriculum: Curriculum,
}

impl CourseDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an existing persisted course for editing.
    pub fn from_document(doc: &CourseDocument) -> Self {
        Self {
            id: Some(doc.id.clone()),
            title: doc.title.clone(),
            cover_url: doc.cover_url.clone(),
            category_ids: doc.category_ids.clone(),
            curriculum: doc.content.clone(),
        }
    }

    /// Readiness predicate gating save: non-empty title within limits, and
    /// every curriculum group titled.
    pub fn validate(&self, limits: &LimitsConfig) -> Result<(), EditorError> {
        validate_title(&self.title, limits)?;
        self.curriculum.validate()?;
        Ok(())
    }

    pub fn payload(&self) -> CoursePayload {
        CoursePayload {
            title: self.title.trim().to_string(),
            cover_url: self.cover_url.clone(),
            category_ids: self.category_ids.clone(),
            content: self.curriculum.clone(),
        }
    }
}

fn validate_title(title: &str, limits: &LimitsConfig) -> Result<(), EditorError> {
    let trimmed = title.trim();
    if trimmed.is_empty() || trimmed.chars().count() > limits.max_title_chars {
        return Err(EditorError::Validation(format!(
            "Title must be 1-{} characters",
            limits.max_title_chars
        )));
    }
    Ok(())
}
