pub mod block;
pub mod catalog;
pub mod curriculum;
pub mod embed;
pub mod error;
pub mod media;
pub mod reorder;
pub mod stats;

pub use error::ContentError;

/// Generate a fresh opaque identifier for blocks and curriculum items.
///
/// Ids are generated once at creation time and never reused; persisted
/// documents carry them verbatim.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
