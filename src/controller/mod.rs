// Command controller - owns all mutable state and turns every command into output lines
// One instance per session; nothing global, so tests can spin up as many as they like

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::library::{Video, VideoCatalog};
use crate::moderation::FlagRegistry;
use crate::playback::{PlayOutcome, PlaybackError, PlaybackSession};
use crate::playlist::{PlaylistError, PlaylistStore};
use crate::search::{self, SearchResults};

/// Lines of output produced by one command
pub type Reply = Vec<String>;

pub struct CommandController<C: VideoCatalog> {
    catalog: C,
    session: PlaybackSession,
    playlists: PlaylistStore,
    flags: FlagRegistry,
    rng: StdRng,
}

impl<C: VideoCatalog> CommandController<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Deterministic random play for tests
    pub fn with_seed(catalog: C, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: C, rng: StdRng) -> Self {
        Self {
            catalog,
            session: PlaybackSession::new(),
            playlists: PlaylistStore::new(),
            flags: FlagRegistry::new(),
            rng,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    pub fn flags(&self) -> &FlagRegistry {
        &self.flags
    }

    // --- catalog ---

    pub fn number_of_videos(&self) -> Reply {
        vec![format!("{} videos in the library", self.catalog.len())]
    }

    pub fn show_all_videos(&self) -> Reply {
        let mut videos = self.catalog.all();
        videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));

        let mut reply = vec!["Here's a list of all available videos:".to_string()];
        reply.extend(videos.iter().map(|v| self.render_with_flag(v)));
        reply
    }

    // --- playback ---

    pub fn play(&mut self, id: &str) -> Reply {
        let outcome = self.session.play(&self.catalog, &self.flags, id);
        play_reply(outcome)
    }

    pub fn play_random(&mut self) -> Reply {
        let outcome = self
            .session
            .play_random(&self.catalog, &self.flags, &mut self.rng);
        play_reply(outcome)
    }

    pub fn stop(&mut self) -> Reply {
        match self.session.stop() {
            Ok(video) => vec![stopping(&video)],
            Err(e) => rejected("Cannot stop video", e),
        }
    }

    pub fn pause(&mut self) -> Reply {
        match self.session.pause() {
            Ok(video) => vec![format!("Pausing video: {}", video.title)],
            Err(e @ PlaybackError::AlreadyPaused(_)) => {
                debug!("Rejected pause: {}", e);
                vec![e.to_string()]
            }
            Err(e) => rejected("Cannot pause video", e),
        }
    }

    pub fn continue_video(&mut self) -> Reply {
        match self.session.resume(&self.flags) {
            Ok(video) => vec![format!("Continuing video: {}", video.title)],
            Err(e) => rejected("Cannot continue video", e),
        }
    }

    pub fn show_playing(&mut self) -> Reply {
        match self.session.current(&self.flags) {
            Some((video, paused)) => {
                let suffix = if paused { " - PAUSED" } else { "" };
                vec![format!("Currently playing: {}{}", video.render(), suffix)]
            }
            None => vec![PlaybackError::NothingPlaying.to_string()],
        }
    }

    // --- playlists ---

    pub fn create_playlist(&mut self, name: &str) -> Reply {
        match self.playlists.create(name) {
            Ok(_) => vec![format!("Successfully created new playlist: {}", name)],
            Err(e) => rejected("Cannot create playlist", e),
        }
    }

    pub fn add_to_playlist(&mut self, name: &str, id: &str) -> Reply {
        match self.playlists.add_video(&self.catalog, &self.flags, name, id) {
            Ok(video) => vec![format!("Added video to {}: {}", name, video.title)],
            Err(e) => rejected(&format!("Cannot add video to {}", name), e),
        }
    }

    pub fn show_all_playlists(&self) -> Reply {
        let playlists = self.playlists.list();
        if playlists.is_empty() {
            return vec!["No playlists exist yet".to_string()];
        }

        let mut reply = vec!["Showing all playlists:".to_string()];
        reply.extend(playlists.iter().map(|p| p.name().to_string()));
        reply
    }

    pub fn show_playlist(&self, name: &str) -> Reply {
        match self.playlists.show(name) {
            Ok(ids) => {
                let mut reply = vec![format!("Showing playlist: {}", name)];
                reply.extend(
                    ids.iter()
                        .filter_map(|id| self.catalog.lookup(id))
                        .map(|v| self.render_with_flag(&v)),
                );
                reply
            }
            Err(e @ PlaylistError::Empty) => {
                vec![format!("Showing playlist: {}", name), e.to_string()]
            }
            Err(e) => rejected(&format!("Cannot show playlist {}", name), e),
        }
    }

    pub fn remove_from_playlist(&mut self, name: &str, id: &str) -> Reply {
        match self.playlists.remove_video(&self.catalog, name, id) {
            Ok(video) => vec![format!("Removed video from {}: {}", name, video.title)],
            Err(e) => rejected(&format!("Cannot remove video from {}", name), e),
        }
    }

    pub fn clear_playlist(&mut self, name: &str) -> Reply {
        match self.playlists.clear(name) {
            Ok(()) => vec![format!("Successfully removed all videos from {}", name)],
            Err(e) => rejected(&format!("Cannot clear playlist {}", name), e),
        }
    }

    pub fn delete_playlist(&mut self, name: &str) -> Reply {
        match self.playlists.delete(name) {
            Ok(_) => vec![format!("Deleted playlist: {}", name)],
            Err(e) => rejected(&format!("Cannot delete playlist {}", name), e),
        }
    }

    // --- search ---

    pub fn search_videos(&self, term: &str) -> SearchResults {
        search::by_title(&self.catalog, &self.flags, term)
    }

    pub fn search_videos_with_tag(&self, tag: &str) -> SearchResults {
        search::by_tag(&self.catalog, &self.flags, tag)
    }

    /// Play the video picked from `results`. Declines produce no output.
    pub fn choose(&mut self, results: &SearchResults, answer: &str) -> Reply {
        match results.choose(answer) {
            Some(video) => {
                let id = video.id.clone();
                self.play(&id)
            }
            None => {
                debug!("Search selection '{}' declined", answer.trim());
                Vec::new()
            }
        }
    }

    // --- moderation ---

    /// Flagging the active video stops it before the flag is reported
    pub fn flag_video(&mut self, id: &str, reason: Option<&str>) -> Reply {
        match self.flags.flag(&self.catalog, id, reason) {
            Ok(video) => {
                let mut reply = Vec::new();
                if let Some(stopped) = self.session.stop_if_active(id) {
                    reply.push(stopping(&stopped));
                }
                let reason = self.flags.reason_for(id).unwrap_or_default();
                reply.push(format!(
                    "Successfully flagged video: {} (reason: {})",
                    video.title, reason
                ));
                reply
            }
            Err(e) => rejected("Cannot flag video", e),
        }
    }

    pub fn allow_video(&mut self, id: &str) -> Reply {
        match self.flags.unflag(&self.catalog, id) {
            Ok(video) => vec![format!(
                "Successfully removed flag from video: {}",
                video.title
            )],
            Err(e) => rejected("Cannot remove flag from video", e),
        }
    }

    fn render_with_flag(&self, video: &Video) -> String {
        match self.flags.reason_for(&video.id) {
            Some(reason) => format!("{} - FLAGGED (reason: {})", video.render(), reason),
            None => video.render(),
        }
    }
}

fn play_reply(outcome: Result<PlayOutcome, PlaybackError>) -> Reply {
    match outcome {
        Ok(PlayOutcome { stopped, playing }) => {
            let mut reply = Vec::new();
            if let Some(stopped) = stopped {
                reply.push(stopping(&stopped));
            }
            reply.push(format!("Playing video: {}", playing.title));
            reply
        }
        Err(e @ PlaybackError::NoVideosAvailable) => vec![e.to_string()],
        Err(e) => rejected("Cannot play video", e),
    }
}

fn stopping(video: &Arc<Video>) -> String {
    format!("Stopping video: {}", video.title)
}

fn rejected<E: std::fmt::Display>(context: &str, err: E) -> Reply {
    debug!("{}: {}", context, err);
    vec![format!("{}: {}", context, err)]
}

#[cfg(test)]
mod tests;
