use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A lesson as known to the external catalog. Referenced, never owned: the
/// catalog may be stale or incomplete, and resolve-misses are expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSummary {
    pub id: String,
    pub name: String,
    /// Duration in minutes, when known.
    pub duration: Option<u32>,
}

/// Resolution seam against the externally owned lesson catalog.
pub trait LessonCatalog {
    fn resolve(&self, lesson_id: &str) -> Option<&LessonSummary>;

    fn contains(&self, lesson_id: &str) -> bool {
        self.resolve(lesson_id).is_some()
    }
}

/// A catalog snapshot held in memory, keyed by lesson id.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    lessons: HashMap<String, LessonSummary>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, lesson: LessonSummary) {
        self.lessons.insert(lesson.id.clone(), lesson);
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

impl FromIterator<LessonSummary> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = LessonSummary>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for lesson in iter {
            catalog.insert(lesson);
        }
        catalog
    }
}

impl LessonCatalog for StaticCatalog {
    fn resolve(&self, lesson_id: &str) -> Option<&LessonSummary> {
        self.lessons.get(lesson_id)
    }
}
