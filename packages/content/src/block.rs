use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::new_id;
use crate::reorder;

/// One unit of lesson content in the ordered block list.
///
/// The payload is an opaque serialized fragment produced and consumed by the
/// external block-editing surface; this crate stores, moves and removes it by
/// id but never parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub id: String,
    pub payload: String,
}

impl ContentBlock {
    fn empty() -> Self {
        Self {
            id: new_id(),
            payload: String::new(),
        }
    }
}

/// Persisted form of a block. `order` is recomputed from array position on
/// every save and is not independently mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBlock {
    pub id: String,
    pub content: String,
    pub order: i32,
}

/// Ordered block list for a single lesson draft.
///
/// Invariant: the list never becomes empty while editing. Removing the last
/// remaining block is a no-op, and loading an empty persisted list
/// synthesizes one empty block.
#[derive(Debug, Clone)]
pub struct BlockStore {
    blocks: Vec<ContentBlock>,
}

impl BlockStore {
    pub fn new() -> Self {
        Self {
            blocks: vec![ContentBlock::empty()],
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn get(&self, id: &str) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Append a new empty block with a freshly generated id.
    pub fn add_block(&mut self) -> &ContentBlock {
        self.blocks.push(ContentBlock::empty());
        self.blocks.last().expect("just pushed")
    }

    /// Append a block with the given payload (used for media insertion).
    pub fn add_block_with_payload(&mut self, payload: impl Into<String>) -> &ContentBlock {
        self.blocks.push(ContentBlock {
            id: new_id(),
            payload: payload.into(),
        });
        self.blocks.last().expect("just pushed")
    }

    /// Remove the block with the given id.
    ///
    /// Returns false without modifying the list when the id is unknown or the
    /// block is the last one remaining.
    pub fn remove_block(&mut self, id: &str) -> bool {
        if self.blocks.len() <= 1 {
            tracing::debug!(id, "refusing to remove the last remaining block");
            return false;
        }
        match self.blocks.iter().position(|b| b.id == id) {
            Some(pos) => {
                self.blocks.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replace the payload of the block with the given id in place.
    /// No-op if the id is unknown.
    pub fn update_payload(&mut self, id: &str, payload: impl Into<String>) -> bool {
        match self.blocks.iter_mut().find(|b| b.id == id) {
            Some(block) => {
                block.payload = payload.into();
                true
            }
            None => false,
        }
    }

    /// Splice-move the block at `from` to position `to`.
    pub fn move_block(&mut self, from: usize, to: usize) -> bool {
        reorder::splice_move(&mut self.blocks, from, to)
    }

    /// Replace the whole list from a persisted document, ordered by the
    /// persisted `order` field. An empty input synthesizes one empty block.
    pub fn load(&mut self, mut stored: Vec<StoredBlock>) {
        if stored.is_empty() {
            self.blocks = vec![ContentBlock::empty()];
            return;
        }
        stored.sort_by_key(|b| b.order);
        self.blocks = stored
            .into_iter()
            .map(|b| ContentBlock {
                id: b.id,
                payload: b.content,
            })
            .collect();
    }

    /// Snapshot the list in persisted form, with `order` recomputed from the
    /// current array position.
    pub fn serialize(&self) -> Vec<StoredBlock> {
        self.blocks
            .iter()
            .enumerate()
            .map(|(i, b)| StoredBlock {
                id: b.id.clone(),
                content: b.payload.clone(),
                order: i as i32,
            })
            .collect()
    }

    /// Render the persisted `content` string (JSON array of stored blocks).
    pub fn to_content_json(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string(&self.serialize())?)
    }

    /// Load from the persisted `content` string.
    pub fn load_content_json(&mut self, json: &str) -> Result<(), ContentError> {
        let stored: Vec<StoredBlock> = serde_json::from_str(json)?;
        self.load(stored);
        Ok(())
    }
}

impl Default for BlockStore {
    fn default() -> Self {
        Self::new()
    }
}
