use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use super::{Video, VideoCatalog, TAG_MARKER};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected `title | id | tags`")]
    Malformed { line: usize },

    #[error("line {line}: video id is empty")]
    EmptyId { line: usize },

    #[error("line {line}: duplicate video id `{id}`")]
    DuplicateId { line: usize, id: String },
}

/// In-memory catalog indexed by video id
#[derive(Debug, Clone, Default)]
pub struct VideoLibrary {
    videos: HashMap<String, Arc<Video>>,
}

impl VideoLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from already constructed videos. Later duplicates replace earlier ones.
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Self {
        let videos = videos
            .into_iter()
            .map(|v| (v.id.clone(), Arc::new(v)))
            .collect();
        Self { videos }
    }

    /// Load the catalog file (`title | id | #tag1 , #tag2` per line)
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let library = Self::parse(&content)?;
        info!("Loaded {} videos from {}", library.len(), path.display());
        Ok(library)
    }

    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let mut videos = HashMap::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let mut fields = raw.split('|').map(str::trim);
            let (title, id) = match (fields.next(), fields.next()) {
                (Some(title), Some(id)) => (title, id),
                _ => return Err(CatalogError::Malformed { line }),
            };
            if id.is_empty() {
                return Err(CatalogError::EmptyId { line });
            }

            let tags = fields.next().map(parse_tags).unwrap_or_default();
            if videos.contains_key(id) {
                return Err(CatalogError::DuplicateId {
                    line,
                    id: id.to_string(),
                });
            }
            videos.insert(id.to_string(), Arc::new(Video::new(id, title, tags)));
        }

        Ok(Self { videos })
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

fn parse_tags(column: &str) -> Vec<String> {
    column
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .filter_map(|t| {
            if t.starts_with(TAG_MARKER) {
                Some(t.to_string())
            } else {
                warn!("Ignoring tag without '{}' marker: {}", TAG_MARKER, t);
                None
            }
        })
        .collect()
}

impl VideoCatalog for VideoLibrary {
    fn lookup(&self, id: &str) -> Option<Arc<Video>> {
        self.videos.get(id).cloned()
    }

    fn all(&self) -> Vec<Arc<Video>> {
        self.videos.values().cloned().collect()
    }
}
