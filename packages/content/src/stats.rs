//! Read-only curriculum statistics, resolved against the lesson catalog.
//!
//! Pure derived functions, recomputed on read: the catalog is externally
//! owned and may change independently, so nothing here is cached. Dangling
//! lesson references are filtered from the view, never deleted from the
//! stored curriculum.

use crate::catalog::LessonCatalog;
use crate::curriculum::{CourseContentItem, Curriculum};

/// A curriculum view restricted to catalog-resolvable lesson references.
///
/// Top-level lesson items with a dangling reference are dropped; group
/// member lists are filtered the same way, and a group whose filtered list
/// becomes empty is dropped entirely.
pub fn filter_valid<C: LessonCatalog>(curriculum: &Curriculum, catalog: &C) -> Curriculum {
    let items = curriculum
        .items()
        .iter()
        .filter_map(|item| match item {
            CourseContentItem::Lesson { lesson_id, .. } => {
                if catalog.contains(lesson_id) {
                    Some(item.clone())
                } else {
                    tracing::debug!(lesson_id, "dropping dangling lesson reference from view");
                    None
                }
            }
            CourseContentItem::Group {
                id,
                title,
                lesson_ids,
            } => {
                let kept: Vec<String> = lesson_ids
                    .iter()
                    .filter(|lid| catalog.contains(lid))
                    .cloned()
                    .collect();
                if kept.is_empty() {
                    None
                } else {
                    Some(CourseContentItem::Group {
                        id: id.clone(),
                        title: title.clone(),
                        lesson_ids: kept,
                    })
                }
            }
        })
        .collect();
    Curriculum::from_items(items)
}

/// Total duration in minutes across the filtered view. A resolved lesson
/// without a known duration counts as 0.
pub fn total_duration<C: LessonCatalog>(curriculum: &Curriculum, catalog: &C) -> u32 {
    let view = filter_valid(curriculum, catalog);
    lesson_refs(&view)
        .filter_map(|lesson_id| catalog.resolve(lesson_id))
        .map(|lesson| lesson.duration.unwrap_or(0))
        .sum()
}

/// Number of lesson references in the filtered view: one per top-level
/// lesson item, one per group member.
pub fn lesson_count<C: LessonCatalog>(curriculum: &Curriculum, catalog: &C) -> usize {
    let view = filter_valid(curriculum, catalog);
    lesson_refs(&view).count()
}

fn lesson_refs(curriculum: &Curriculum) -> impl Iterator<Item = &str> {
    curriculum.items().iter().flat_map(|item| match item {
        CourseContentItem::Lesson { lesson_id, .. } => std::slice::from_ref(lesson_id),
        CourseContentItem::Group { lesson_ids, .. } => lesson_ids.as_slice(),
    })
    .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LessonSummary, StaticCatalog};

    fn lesson(id: &str, duration: Option<u32>) -> LessonSummary {
        LessonSummary {
            id: id.into(),
            name: format!("Lesson {id}"),
            duration,
        }
    }

    /// Curriculum: [lesson L1, group "G" [L2, L3]]; catalog has L1 and L3.
    fn fixture() -> (Curriculum, StaticCatalog) {
        let mut c = Curriculum::new();
        c.add_lesson_item("L1");
        c.add_group();
        c.set_group_title(1, "G");
        c.add_lesson_to_group(1, "L2");
        c.add_lesson_to_group(1, "L3");

        let catalog = [lesson("L1", Some(10)), lesson("L3", Some(20))]
            .into_iter()
            .collect();
        (c, catalog)
    }

    #[test]
    fn filter_valid_drops_dangling_references_only() {
        let (c, catalog) = fixture();
        let view = filter_valid(&c, &catalog);

        assert_eq!(view.len(), 2);
        match &view.items()[0] {
            CourseContentItem::Lesson { lesson_id, .. } => assert_eq!(lesson_id, "L1"),
            other => panic!("expected lesson, got {other:?}"),
        }
        match &view.items()[1] {
            CourseContentItem::Group {
                title, lesson_ids, ..
            } => {
                assert_eq!(title, "G");
                assert_eq!(lesson_ids, &vec!["L3".to_string()]);
            }
            other => panic!("expected group, got {other:?}"),
        }
        // The stored curriculum keeps the dangling reference.
        assert!(c.used_lesson_ids().contains("L2"));
    }

    #[test]
    fn filter_valid_drops_groups_left_empty() {
        let mut c = Curriculum::new();
        c.add_group();
        c.set_group_title(0, "G");
        c.add_lesson_to_group(0, "gone");
        let catalog = StaticCatalog::new();
        assert!(filter_valid(&c, &catalog).is_empty());
    }

    #[test]
    fn total_duration_sums_the_filtered_view() {
        let (c, catalog) = fixture();
        assert_eq!(total_duration(&c, &catalog), 30);
    }

    #[test]
    fn missing_duration_counts_as_zero() {
        let mut c = Curriculum::new();
        c.add_lesson_item("L1");
        c.add_lesson_item("L4");
        let catalog = [lesson("L1", Some(10)), lesson("L4", None)]
            .into_iter()
            .collect::<StaticCatalog>();
        assert_eq!(total_duration(&c, &catalog), 10);
    }

    #[test]
    fn lesson_count_tallies_items_and_group_members() {
        let (c, catalog) = fixture();
        assert_eq!(lesson_count(&c, &catalog), 2);

        let full_catalog = [
            lesson("L1", None),
            lesson("L2", None),
            lesson("L3", None),
        ]
        .into_iter()
        .collect::<StaticCatalog>();
        assert_eq!(lesson_count(&c, &full_catalog), 3);
    }
}
