//! Course curriculum model: an ordered list of lesson references and named
//! lesson groups, with move semantics matching the editor surface.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::new_id;
use crate::reorder;

/// One entry in a course's content list.
///
/// `id` is the item's own identity (stable reorder key, unique across the
/// curriculum), distinct from the referenced lesson's id. Lesson references
/// are not required to currently exist in the catalog; dangling references
/// are filtered at read time and never pruned from the stored structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CourseContentItem {
    Lesson { id: String, lesson_id: String },
    Group {
        id: String,
        title: String,
        lesson_ids: Vec<String>,
    },
}

impl CourseContentItem {
    pub fn item_id(&self) -> &str {
        match self {
            Self::Lesson { id, .. } | Self::Group { id, .. } => id,
        }
    }
}

/// The ordered course content list and its mutation operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curriculum {
    items: Vec<CourseContentItem>,
}

impl Curriculum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CourseContentItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CourseContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a single lesson reference.
    ///
    /// Duplicate placement is not rejected here: excluding already-used
    /// lessons from the selection source is the picker's job, via
    /// [`Curriculum::used_lesson_ids`].
    pub fn add_lesson_item(&mut self, lesson_id: impl Into<String>) -> &CourseContentItem {
        self.items.push(CourseContentItem::Lesson {
            id: new_id(),
            lesson_id: lesson_id.into(),
        });
        self.items.last().expect("just pushed")
    }

    /// Append an empty, untitled group.
    pub fn add_group(&mut self) -> &CourseContentItem {
        self.items.push(CourseContentItem::Group {
            id: new_id(),
            title: String::new(),
            lesson_ids: Vec::new(),
        });
        self.items.last().expect("just pushed")
    }

    /// Delete the top-level item at `index`.
    pub fn remove_item(&mut self, index: usize) -> Option<CourseContentItem> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Splice-move a top-level item. Bounds-checked no-op on invalid input.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        reorder::splice_move(&mut self.items, from, to)
    }

    /// Rename the group at `group_index`.
    pub fn set_group_title(&mut self, group_index: usize, new_title: impl Into<String>) -> bool {
        match self.items.get_mut(group_index) {
            Some(CourseContentItem::Group { title, .. }) => {
                *title = new_title.into();
                true
            }
            _ => false,
        }
    }

    /// Append `lesson_id` to a group, unless it is already present in that
    /// group's list. Per-group de-duplication happens here, unlike the
    /// top-level add.
    pub fn add_lesson_to_group(&mut self, group_index: usize, lesson_id: &str) -> bool {
        match self.items.get_mut(group_index) {
            Some(CourseContentItem::Group { lesson_ids, .. }) => {
                if lesson_ids.iter().any(|id| id == lesson_id) {
                    return false;
                }
                lesson_ids.push(lesson_id.to_string());
                true
            }
            _ => false,
        }
    }

    /// Remove a group member by position.
    pub fn remove_lesson_from_group(&mut self, group_index: usize, lesson_index: usize) -> bool {
        match self.items.get_mut(group_index) {
            Some(CourseContentItem::Group { lesson_ids, .. }) => {
                if lesson_index >= lesson_ids.len() {
                    return false;
                }
                lesson_ids.remove(lesson_index);
                true
            }
            _ => false,
        }
    }

    /// Exchange two positions inside a group.
    ///
    /// Swap, not splice: this intentionally differs from [`Self::move_item`]
    /// and is kept for compatibility with the persisted reordering behavior.
    pub fn move_lesson_in_group(&mut self, group_index: usize, from: usize, to: usize) -> bool {
        match self.items.get_mut(group_index) {
            Some(CourseContentItem::Group { lesson_ids, .. }) => {
                reorder::swap_positions(lesson_ids, from, to)
            }
            _ => false,
        }
    }

    /// The flattened set of every lesson id placed anywhere in the
    /// curriculum. Recomputed on call; used to filter selection pickers,
    /// never persisted.
    pub fn used_lesson_ids(&self) -> HashSet<&str> {
        let mut used = HashSet::new();
        for item in &self.items {
            match item {
                CourseContentItem::Lesson { lesson_id, .. } => {
                    used.insert(lesson_id.as_str());
                }
                CourseContentItem::Group { lesson_ids, .. } => {
                    used.extend(lesson_ids.iter().map(String::as_str));
                }
            }
        }
        used
    }

    /// Readiness predicate for form submission: every group needs a
    /// non-empty title. Lesson references are validated by the upstream
    /// selection UI and not re-checked here.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (i, item) in self.items.iter().enumerate() {
            if let CourseContentItem::Group { title, .. } = item
                && title.trim().is_empty()
            {
                return Err(ContentError::Validation(format!(
                    "Group at position {i} requires a title"
                )));
            }
        }
        Ok(())
    }
}
