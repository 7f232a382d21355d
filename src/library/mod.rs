pub mod catalog;
pub mod video;

pub use catalog::{CatalogError, VideoLibrary};
pub use video::{Video, TAG_MARKER};

use std::sync::Arc;

/// Read-only source of video metadata.
///
/// `all()` makes no ordering promise; callers sort for display.
pub trait VideoCatalog {
    fn lookup(&self, id: &str) -> Option<Arc<Video>>;
    fn all(&self) -> Vec<Arc<Video>>;

    fn len(&self) -> usize {
        self.all().len()
    }
}
