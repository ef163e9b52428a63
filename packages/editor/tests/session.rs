use content::catalog::{LessonCatalog, LessonSummary};
use content::curriculum::CourseContentItem;
use content::media::MediaKind;
use content::stats;
use editor::config::LimitsConfig;
use editor::draft::{CourseDraft, LessonDraft};
use editor::error::EditorError;
use editor::memory::{MemoryAssetStore, MemoryCatalog, MemoryCourseStore, MemoryLessonStore};
use editor::repository::{CourseRepository, LessonRepository};
use editor::session;

fn limits() -> LimitsConfig {
    LimitsConfig::default()
}

fn summary(id: &str, duration: Option<u32>) -> LessonSummary {
    LessonSummary {
        id: id.into(),
        name: format!("Lesson {id}"),
        duration,
    }
}

mod media_upload {
    use super::*;

    #[tokio::test]
    async fn upload_then_insert_appends_an_embed_block() {
        let store = MemoryAssetStore::new();
        let mut draft = LessonDraft::new();

        session::upload_and_insert(&mut draft, &store, MediaKind::Image, "cover.png", vec![1, 2])
            .await
            .unwrap();

        assert_eq!(draft.blocks.len(), 2);
        assert_eq!(store.uploads().await.len(), 1);
        let payload = &draft.blocks.blocks()[1].payload;
        let value: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(value["kind"], "media-embed");
        assert_eq!(value["name"], "cover.png");
    }

    #[tokio::test]
    async fn failed_upload_leaves_the_draft_unchanged() {
        let store = MemoryAssetStore::new();
        store.fail_next();
        let mut draft = LessonDraft::new();
        let before = draft.blocks.serialize();

        let result =
            session::upload_and_insert(&mut draft, &store, MediaKind::File, "a.pdf", vec![0]).await;

        assert!(matches!(result, Err(EditorError::Upload(_))));
        assert_eq!(draft.blocks.serialize(), before);
        assert!(store.uploads().await.is_empty());
    }
}

mod lesson_save {
    use super::*;

    #[tokio::test]
    async fn save_creates_then_updates_the_same_document() {
        let repo = MemoryLessonStore::new();
        let mut draft = LessonDraft::new();
        draft.title = "Phonics 1".into();

        let created = session::save_lesson(&repo, &mut draft, &limits())
            .await
            .unwrap();
        assert_eq!(draft.id.as_deref(), Some(created.id.as_str()));

        draft.title = "Phonics 1 (revised)".into();
        draft.blocks.add_block();
        let updated = session::save_lesson(&repo, &mut draft, &limits())
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(repo.list(1, 20).await.unwrap().total, 1);
        assert_eq!(updated.title, "Phonics 1 (revised)");
    }

    #[tokio::test]
    async fn save_round_trips_block_order_through_the_repository() {
        let repo = MemoryLessonStore::new();
        let mut draft = LessonDraft::new();
        draft.title = "Ordering".into();
        let first = draft.blocks.blocks()[0].id.clone();
        draft.blocks.update_payload(&first, "first");
        draft.blocks.add_block();
        let second = draft.blocks.blocks()[1].id.clone();
        draft.blocks.update_payload(&second, "second");
        draft.blocks.move_block(0, 1);

        let saved = session::save_lesson(&repo, &mut draft, &limits())
            .await
            .unwrap();
        let reopened = LessonDraft::from_document(&repo.get(&saved.id).await.unwrap()).unwrap();

        let payloads: Vec<&str> = reopened
            .blocks
            .blocks()
            .iter()
            .map(|b| b.payload.as_str())
            .collect();
        assert_eq!(payloads, vec!["second", "first"]);
        let orders: Vec<i32> = reopened.blocks.serialize().iter().map(|b| b.order).collect();
        assert_eq!(orders, vec![0, 1]);
    }

    #[tokio::test]
    async fn unready_draft_is_not_persisted() {
        let repo = MemoryLessonStore::new();
        let mut draft = LessonDraft::new();

        let result = session::save_lesson(&repo, &mut draft, &limits()).await;

        assert!(matches!(result, Err(EditorError::Validation(_))));
        assert!(draft.id.is_none());
        assert_eq!(repo.list(1, 20).await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn bulk_delete_skips_missing_documents() {
        let repo = MemoryLessonStore::new();
        let mut draft = LessonDraft::new();
        draft.title = "Keep me honest".into();
        let doc = session::save_lesson(&repo, &mut draft, &limits())
            .await
            .unwrap();

        let removed = repo
            .bulk_delete(&[doc.id.clone(), "missing".into()])
            .await
            .unwrap();

        assert_eq!(removed, 1);
        assert_eq!(repo.list(1, 20).await.unwrap().total, 0);
    }
}

mod course_save {
    use super::*;

    #[tokio::test]
    async fn curriculum_structure_survives_the_round_trip() {
        let repo = MemoryCourseStore::new();
        let mut draft = CourseDraft::new();
        draft.title = "Starter Course".into();
        draft.curriculum.add_lesson_item("L1");
        draft.curriculum.add_group();
        draft.curriculum.set_group_title(1, "Unit 1");
        draft.curriculum.add_lesson_to_group(1, "L2");
        draft.curriculum.add_lesson_to_group(1, "L3");
        draft.curriculum.move_lesson_in_group(1, 0, 1);

        let saved = session::save_course(&repo, &mut draft, &limits())
            .await
            .unwrap();
        let reopened = CourseDraft::from_document(&repo.get(&saved.id).await.unwrap());

        assert_eq!(reopened.curriculum, draft.curriculum);
        match &reopened.curriculum.items()[1] {
            CourseContentItem::Group { lesson_ids, .. } => {
                assert_eq!(lesson_ids, &vec!["L3".to_string(), "L2".to_string()]);
            }
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn untitled_group_blocks_the_save() {
        let repo = MemoryCourseStore::new();
        let mut draft = CourseDraft::new();
        draft.title = "Course".into();
        draft.curriculum.add_group();

        let result = session::save_course(&repo, &mut draft, &limits()).await;

        assert!(matches!(result, Err(EditorError::Validation(_))));
        assert_eq!(repo.list(1, 20).await.unwrap().total, 0);
    }
}

mod catalog {
    use super::*;

    #[tokio::test]
    async fn load_catalog_drains_every_page() {
        let lessons: Vec<LessonSummary> =
            (0..45).map(|i| summary(&format!("L{i}"), Some(i))).collect();
        let provider = MemoryCatalog::new(lessons);

        let catalog = session::load_catalog(&provider, 20).await.unwrap();

        assert_eq!(catalog.len(), 45);
        assert!(catalog.contains("L44"));
    }

    #[tokio::test]
    async fn stats_resolve_against_the_loaded_snapshot() {
        let provider = MemoryCatalog::new(vec![summary("L1", Some(10)), summary("L3", Some(20))]);
        let catalog = session::load_catalog(&provider, 20).await.unwrap();

        let mut draft = CourseDraft::new();
        draft.title = "Course".into();
        draft.curriculum.add_lesson_item("L1");
        draft.curriculum.add_group();
        draft.curriculum.set_group_title(1, "G");
        draft.curriculum.add_lesson_to_group(1, "L2");
        draft.curriculum.add_lesson_to_group(1, "L3");

        assert_eq!(stats::lesson_count(&draft.curriculum, &catalog), 2);
        assert_eq!(stats::total_duration(&draft.curriculum, &catalog), 30);
    }
}
