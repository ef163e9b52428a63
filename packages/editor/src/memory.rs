//! In-memory collaborator implementations.
//!
//! Lightweight defaults for embedding hosts and the backing for the
//! integration tests; the production collaborators live behind the same
//! traits on the other side of the excluded transport layer.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use content::catalog::LessonSummary;
use content::media::MediaKind;
use tokio::sync::RwLock;

use crate::error::EditorError;
use crate::repository::{
    AssetStore, CatalogPage, CatalogProvider, CourseDocument, CoursePayload, CourseRepository,
    LessonDocument, LessonPayload, LessonRepository, Page, StoredAsset,
};

fn new_doc_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn page_bounds(len: usize, page: u64, per_page: u64) -> (usize, usize) {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let start = ((page - 1) * per_page) as usize;
    let end = (start + per_page as usize).min(len);
    (start.min(len), end)
}

/// Lesson repository over a `Vec`, in insertion order.
#[derive(Default)]
pub struct MemoryLessonStore {
    docs: RwLock<Vec<LessonDocument>>,
}

impl MemoryLessonStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LessonRepository for MemoryLessonStore {
    async fn get(&self, id: &str) -> Result<LessonDocument, EditorError> {
        self.docs
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| EditorError::NotFound(format!("Lesson '{id}' not found")))
    }

    async fn create(&self, payload: LessonPayload) -> Result<LessonDocument, EditorError> {
        let now = Utc::now();
        let doc = LessonDocument {
            id: new_doc_id(),
            title: payload.title,
            cover_url: payload.cover_url,
            category_ids: payload.category_ids,
            content: payload.content,
            created_at: now,
            updated_at: now,
        };
        self.docs.write().await.push(doc.clone());
        Ok(doc)
    }

    async fn update(&self, id: &str, payload: LessonPayload) -> Result<LessonDocument, EditorError> {
        let mut docs = self.docs.write().await;
        let doc = docs
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| EditorError::NotFound(format!("Lesson '{id}' not found")))?;
        doc.title = payload.title;
        doc.cover_url = payload.cover_url;
        doc.category_ids = payload.category_ids;
        doc.content = payload.content;
        doc.updated_at = Utc::now();
        Ok(doc.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), EditorError> {
        let mut docs = self.docs.write().await;
        match docs.iter().position(|d| d.id == id) {
            Some(pos) => {
                docs.remove(pos);
                Ok(())
            }
            None => Err(EditorError::NotFound(format!("Lesson '{id}' not found"))),
        }
    }

    async fn list(&self, page: u64, per_page: u64) -> Result<Page<LessonDocument>, EditorError> {
        let docs = self.docs.read().await;
        let (start, end) = page_bounds(docs.len(), page, per_page);
        Ok(Page {
            data: docs[start..end].to_vec(),
            page: page.max(1),
            per_page: per_page.max(1),
            total: docs.len() as u64,
        })
    }
}

/// Course repository over a `Vec`, in insertion order.
#[derive(Default)]
pub struct MemoryCourseStore {
    docs: RwLock<Vec<CourseDocument>>,
}

impl MemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for MemoryCourseStore {
    async fn get(&self, id: &str) -> Result<CourseDocument, EditorError> {
        self.docs
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| EditorError::NotFound(format!("Course '{id}' not found")))
    }

    async fn create(&self, payload: CoursePayload) -> Result<CourseDocument, EditorError> {
        let now = Utc::now();
        let doc = CourseDocument {
            id: new_doc_id(),
            title: payload.title,
            cover_url: payload.cover_url,
            category_ids: payload.category_ids,
            content: payload.content,
            created_at: now,
            updated_at: now,
        };
        self.docs.write().await.push(doc.clone());
        Ok(doc)
    }

    async fn update(&self, id: &str, payload: CoursePayload) -> Result<CourseDocument, EditorError> {
        let mut docs = self.docs.write().await;
        let doc = docs
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| EditorError::NotFound(format!("Course '{id}' not found")))?;
        doc.title = payload.title;
        doc.cover_url = payload.cover_url;
        doc.category_ids = payload.category_ids;
        doc.content = payload.content;
        doc.updated_at = Utc::now();
        Ok(doc.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), EditorError> {
        let mut docs = self.docs.write().await;
        match docs.iter().position(|d| d.id == id) {
            Some(pos) => {
                docs.remove(pos);
                Ok(())
            }
            None => Err(EditorError::NotFound(format!("Course '{id}' not found"))),
        }
    }

    async fn list(&self, page: u64, per_page: u64) -> Result<Page<CourseDocument>, EditorError> {
        let docs = self.docs.read().await;
        let (start, end) = page_bounds(docs.len(), page, per_page);
        Ok(Page {
            data: docs[start..end].to_vec(),
            page: page.max(1),
            per_page: per_page.max(1),
            total: docs.len() as u64,
        })
    }
}

/// Asset store that records uploads and can be toggled to fail, for
/// exercising the no-partial-insertion guarantee.
#[derive(Default)]
pub struct MemoryAssetStore {
    fail_next: AtomicBool,
    uploads: RwLock<Vec<StoredAsset>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `create` call fail with an upload error.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub async fn uploads(&self) -> Vec<StoredAsset> {
        self.uploads.read().await.clone()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn create(
        &self,
        kind: MediaKind,
        name: &str,
        _bytes: Vec<u8>,
    ) -> Result<StoredAsset, EditorError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(EditorError::Upload(format!("upload of '{name}' failed")));
        }
        let id = new_doc_id();
        let asset = StoredAsset {
            id: id.clone(),
            file_url: format!("memory://{kind:?}/{id}/{name}").to_lowercase(),
        };
        self.uploads.write().await.push(asset.clone());
        Ok(asset)
    }
}

/// Catalog provider over a fixed lesson list.
#[derive(Default)]
pub struct MemoryCatalog {
    lessons: Vec<LessonSummary>,
}

impl MemoryCatalog {
    pub fn new(lessons: Vec<LessonSummary>) -> Self {
        Self { lessons }
    }
}

#[async_trait]
impl CatalogProvider for MemoryCatalog {
    async fn fetch_page(&self, page: u64, per_page: u64) -> Result<CatalogPage, EditorError> {
        let (start, end) = page_bounds(self.lessons.len(), page, per_page);
        Ok(CatalogPage {
            lessons: self.lessons[start..end].to_vec(),
            total: self.lessons.len() as u64,
        })
    }
}
