//! Session flows tying drafts to their collaborators.
//!
//! Every structural mutation waits for its collaborator call to
//! complete-or-fail first: a failed upload or save leaves the draft exactly
//! as it was.

use content::catalog::StaticCatalog;
use content::media::{MediaKind, MediaSelection};
use tracing::debug;

use crate::config::LimitsConfig;
use crate::draft::{CourseDraft, LessonDraft};
use crate::error::EditorError;
use crate::repository::{
    AssetStore, CatalogProvider, CourseDocument, CourseRepository, LessonDocument,
    LessonRepository,
};

/// Upload a locally provided file to the asset store, then insert the
/// resolved embed into the draft. On upload failure the error propagates and
/// the block list is unchanged.
pub async fn upload_and_insert(
    draft: &mut LessonDraft,
    store: &dyn AssetStore,
    kind: MediaKind,
    name: &str,
    bytes: Vec<u8>,
) -> Result<(), EditorError> {
    let asset = store.create(kind, name, bytes).await?;
    debug!(asset_id = %asset.id, "asset stored, inserting block");
    let selection = MediaSelection {
        id: asset.id,
        url: asset.file_url,
        name: name.to_string(),
        kind,
    };
    draft.insert_media(&selection)?;
    Ok(())
}

/// Validate and persist a lesson draft, creating or updating depending on
/// whether it has been saved before. The assigned id is recorded back onto
/// the draft.
pub async fn save_lesson(
    repo: &dyn LessonRepository,
    draft: &mut LessonDraft,
    limits: &LimitsConfig,
) -> Result<LessonDocument, EditorError> {
    draft.validate(limits)?;
    let payload = draft.payload()?;
    let doc = match &draft.id {
        Some(id) => repo.update(id, payload).await?,
        None => repo.create(payload).await?,
    };
    draft.id = Some(doc.id.clone());
    Ok(doc)
}

/// Validate and persist a course draft. See [`save_lesson`].
pub async fn save_course(
    repo: &dyn CourseRepository,
    draft: &mut CourseDraft,
    limits: &LimitsConfig,
) -> Result<CourseDocument, EditorError> {
    draft.validate(limits)?;
    let payload = draft.payload();
    let doc = match &draft.id {
        Some(id) => repo.update(id, payload).await?,
        None => repo.create(payload).await?,
    };
    draft.id = Some(doc.id.clone());
    Ok(doc)
}

/// Drain the paged catalog into a resolution snapshot.
pub async fn load_catalog(
    provider: &dyn CatalogProvider,
    page_size: u64,
) -> Result<StaticCatalog, EditorError> {
    let per_page = page_size.max(1);
    let mut catalog = StaticCatalog::new();
    let mut page = 1;
    loop {
        let fetched = provider.fetch_page(page, per_page).await?;
        let count = fetched.lessons.len() as u64;
        for lesson in fetched.lessons {
            catalog.insert(lesson);
        }
        if catalog.len() as u64 >= fetched.total || count == 0 {
            break;
        }
        page += 1;
    }
    debug!(lessons = catalog.len(), "catalog snapshot loaded");
    Ok(catalog)
}
