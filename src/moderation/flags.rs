use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::library::{Video, VideoCatalog};

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    #[error("Video does not exist")]
    NoSuchVideo,
    #[error("Video is already flagged")]
    AlreadyFlagged,
    #[error("Video is not flagged")]
    NotFlagged,
}

/// Video id -> flag reason. Absent means not flagged.
#[derive(Debug, Default)]
pub struct FlagRegistry {
    reasons: HashMap<String, String>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag a video. A missing or blank reason falls back to [`DEFAULT_FLAG_REASON`].
    pub fn flag(
        &mut self,
        catalog: &dyn VideoCatalog,
        id: &str,
        reason: Option<&str>,
    ) -> Result<Arc<Video>, FlagError> {
        let video = catalog.lookup(id).ok_or(FlagError::NoSuchVideo)?;
        if self.reasons.contains_key(id) {
            return Err(FlagError::AlreadyFlagged);
        }

        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_FLAG_REASON);
        self.reasons.insert(id.to_string(), reason.to_string());
        info!("Flagged video '{}' (reason: {})", id, reason);
        Ok(video)
    }

    pub fn unflag(&mut self, catalog: &dyn VideoCatalog, id: &str) -> Result<Arc<Video>, FlagError> {
        let video = catalog.lookup(id).ok_or(FlagError::NoSuchVideo)?;
        if self.reasons.remove(id).is_none() {
            return Err(FlagError::NotFlagged);
        }
        info!("Removed flag from video '{}'", id);
        Ok(video)
    }

    pub fn reason_for(&self, id: &str) -> Option<&str> {
        self.reasons.get(id).map(String::as_str)
    }

    pub fn is_flagged(&self, id: &str) -> bool {
        self.reasons.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}
