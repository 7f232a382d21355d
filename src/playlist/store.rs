use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::library::{Video, VideoCatalog};
use crate::moderation::FlagRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("Playlist name cannot contain whitespace")]
    InvalidName,
    #[error("A playlist with the same name already exists")]
    Duplicate,
    #[error("Playlist does not exist")]
    NoSuchPlaylist,
    #[error("Video does not exist")]
    NoSuchVideo,
    #[error("Video is currently flagged (reason: {0})")]
    VideoFlagged(String),
    #[error("Video already added")]
    AlreadyInPlaylist,
    #[error("Video is not in playlist")]
    NotInPlaylist,
    #[error("No videos here yet")]
    Empty,
}

/// A named, ordered, duplicate-free list of video ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    name: String,
    video_ids: Vec<String>,
}

impl Playlist {
    fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// Name with the casing it was created with
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.video_ids.iter().any(|v| v == id)
    }

    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    fn remove(&mut self, id: &str) -> bool {
        if let Some(pos) = self.video_ids.iter().position(|v| v == id) {
            self.video_ids.remove(pos);
            true
        } else {
            false
        }
    }
}

/// All playlists, keyed by lowercased name so lookups ignore case
#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: HashMap<String, Playlist>,
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str) -> Result<&Playlist, PlaylistError> {
        if name.chars().any(char::is_whitespace) {
            return Err(PlaylistError::InvalidName);
        }
        let key = key(name);
        if self.playlists.contains_key(&key) {
            return Err(PlaylistError::Duplicate);
        }

        info!("Created new playlist: '{}'", name);
        Ok(self
            .playlists
            .entry(key)
            .or_insert_with(|| Playlist::new(name.to_string())))
    }

    /// Stored name for a case-insensitive match
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.get(name).map(Playlist::name)
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&key(name))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Playlist, PlaylistError> {
        self.playlists
            .get_mut(&key(name))
            .ok_or(PlaylistError::NoSuchPlaylist)
    }

    /// Checks run playlist -> video -> flag -> duplicate; the first failure wins
    pub fn add_video(
        &mut self,
        catalog: &dyn VideoCatalog,
        flags: &FlagRegistry,
        name: &str,
        id: &str,
    ) -> Result<Arc<Video>, PlaylistError> {
        let playlist = self.get_mut(name)?;
        let video = catalog.lookup(id).ok_or(PlaylistError::NoSuchVideo)?;
        if let Some(reason) = flags.reason_for(id) {
            return Err(PlaylistError::VideoFlagged(reason.to_string()));
        }
        if playlist.contains(id) {
            return Err(PlaylistError::AlreadyInPlaylist);
        }

        playlist.video_ids.push(id.to_string());
        info!("Added video '{}' to playlist '{}'", id, playlist.name);
        Ok(video)
    }

    pub fn remove_video(
        &mut self,
        catalog: &dyn VideoCatalog,
        name: &str,
        id: &str,
    ) -> Result<Arc<Video>, PlaylistError> {
        let playlist = self.get_mut(name)?;
        let video = catalog.lookup(id).ok_or(PlaylistError::NoSuchVideo)?;
        if !playlist.remove(id) {
            return Err(PlaylistError::NotInPlaylist);
        }

        info!("Removed video '{}' from playlist '{}'", id, playlist.name);
        Ok(video)
    }

    pub fn clear(&mut self, name: &str) -> Result<(), PlaylistError> {
        let playlist = self.get_mut(name)?;
        playlist.video_ids.clear();
        info!("Cleared playlist '{}'", playlist.name);
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<Playlist, PlaylistError> {
        let playlist = self
            .playlists
            .remove(&key(name))
            .ok_or(PlaylistError::NoSuchPlaylist)?;
        info!("Deleted playlist: '{}'", playlist.name);
        Ok(playlist)
    }

    /// All playlists sorted by stored name
    pub fn list(&self) -> Vec<&Playlist> {
        let mut playlists: Vec<&Playlist> = self.playlists.values().collect();
        playlists.sort_by(|a, b| a.name.cmp(&b.name));
        playlists
    }

    /// Ids of a non-empty playlist. An empty playlist is `Empty`, not `NoSuchPlaylist`.
    pub fn show(&self, name: &str) -> Result<&[String], PlaylistError> {
        let playlist = self.get(name).ok_or(PlaylistError::NoSuchPlaylist)?;
        if playlist.is_empty() {
            return Err(PlaylistError::Empty);
        }
        Ok(playlist.video_ids())
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
