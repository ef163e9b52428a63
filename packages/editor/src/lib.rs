//! Editor session layer: per-session draft state, persisted document shapes
//! and the async collaborator seams (persistence, asset upload, catalog
//! fetch) the content core is wired to.

pub mod config;
pub mod draft;
pub mod error;
pub mod memory;
pub mod repository;
pub mod session;

pub use config::EditorConfig;
pub use draft::{CourseDraft, LessonDraft};
pub use error::EditorError;
