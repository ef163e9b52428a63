//! Persisted document shapes and the async collaborator seams.
//!
//! Everything here is a contract consumed by the editor session: transport,
//! storage engine and authentication all live on the other side of these
//! traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use content::catalog::LessonSummary;
use content::curriculum::Curriculum;
use content::media::MediaKind;
use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// Persisted lesson document. `content` is the JSON-serialized array of
/// stored blocks; block order inside it is recomputed from array position on
/// every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonDocument {
    pub id: String,
    pub title: String,
    pub cover_url: Option<String>,
    pub category_ids: Vec<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persisted course document, carrying the curriculum structure verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDocument {
    pub id: String,
    pub title: String,
    pub cover_url: Option<String>,
    pub category_ids: Vec<String>,
    pub content: Curriculum,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or fully replacing a lesson document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPayload {
    pub title: String,
    pub cover_url: Option<String>,
    pub category_ids: Vec<String>,
    pub content: String,
}

/// Payload for creating or fully replacing a course document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePayload {
    pub title: String,
    pub cover_url: Option<String>,
    pub category_ids: Vec<String>,
    pub content: Curriculum,
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.per_page.max(1))
    }
}

#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn get(&self, id: &str) -> Result<LessonDocument, EditorError>;
    async fn create(&self, payload: LessonPayload) -> Result<LessonDocument, EditorError>;
    async fn update(&self, id: &str, payload: LessonPayload) -> Result<LessonDocument, EditorError>;
    async fn delete(&self, id: &str) -> Result<(), EditorError>;
    async fn list(&self, page: u64, per_page: u64) -> Result<Page<LessonDocument>, EditorError>;

    /// Delete several documents; returns how many were removed. Ids that no
    /// longer exist are skipped, not errors.
    async fn bulk_delete(&self, ids: &[String]) -> Result<u64, EditorError> {
        let mut removed = 0;
        for id in ids {
            match self.delete(id).await {
                Ok(()) => removed += 1,
                Err(EditorError::NotFound(_)) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(removed)
    }
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn get(&self, id: &str) -> Result<CourseDocument, EditorError>;
    async fn create(&self, payload: CoursePayload) -> Result<CourseDocument, EditorError>;
    async fn update(&self, id: &str, payload: CoursePayload) -> Result<CourseDocument, EditorError>;
    async fn delete(&self, id: &str) -> Result<(), EditorError>;
    async fn list(&self, page: u64, per_page: u64) -> Result<Page<CourseDocument>, EditorError>;

    async fn bulk_delete(&self, ids: &[String]) -> Result<u64, EditorError> {
        let mut removed = 0;
        for id in ids {
            match self.delete(id).await {
                Ok(()) => removed += 1,
                Err(EditorError::NotFound(_)) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(removed)
    }
}

/// A media asset registered with the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAsset {
    pub id: String,
    pub file_url: String,
}

/// Upload seam for locally provided (non-bank) media. Invoked before block
/// insertion; a failed upload must leave the draft untouched.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn create(
        &self,
        kind: MediaKind,
        name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredAsset, EditorError>;
}

/// One page of the external lesson catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    pub lessons: Vec<LessonSummary>,
    pub total: u64,
}

/// Paged lesson catalog fetch, used to build a resolution snapshot.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_page(&self, page: u64, per_page: u64) -> Result<CatalogPage, EditorError>;
}
