use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::library::{Video, VideoCatalog};
use crate::moderation::FlagRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Video does not exist")]
    NotFound,
    #[error("Video is currently flagged (reason: {0})")]
    Flagged(String),
    #[error("No videos available")]
    NoVideosAvailable,
    #[error("No video is currently playing")]
    NothingPlaying,
    #[error("Video already paused: {0}")]
    AlreadyPaused(String),
    #[error("Video is not paused")]
    NotPaused,
}

/// Idle, or an active video that is either playing or paused.
/// Pausing without a video is unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing(Arc<Video>),
    Paused(Arc<Video>),
}

impl PlaybackState {
    pub fn video(&self) -> Option<&Arc<Video>> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Playing(video) | PlaybackState::Paused(video) => Some(video),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }
}

/// Result of a successful play: what got stopped (if anything) and what is now playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub stopped: Option<Arc<Video>>,
    pub playing: Arc<Video>,
}

#[derive(Debug, Default)]
pub struct PlaybackSession {
    state: PlaybackState,
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn play(
        &mut self,
        catalog: &dyn VideoCatalog,
        flags: &FlagRegistry,
        id: &str,
    ) -> Result<PlayOutcome, PlaybackError> {
        let video = catalog.lookup(id).ok_or(PlaybackError::NotFound)?;
        if let Some(reason) = flags.reason_for(id) {
            debug!("Refusing to play flagged video '{}'", id);
            return Err(PlaybackError::Flagged(reason.to_string()));
        }

        let stopped = self.take_active();
        info!("Playing video '{}'", video.id);
        self.state = PlaybackState::Playing(Arc::clone(&video));
        Ok(PlayOutcome {
            stopped,
            playing: video,
        })
    }

    /// Pick uniformly among every non-flagged video. Candidates are ordered by id
    /// first so a seeded rng gives the same pick regardless of catalog order.
    pub fn play_random<R: Rng + ?Sized>(
        &mut self,
        catalog: &dyn VideoCatalog,
        flags: &FlagRegistry,
        rng: &mut R,
    ) -> Result<PlayOutcome, PlaybackError> {
        let mut candidates: Vec<Arc<Video>> = catalog
            .all()
            .into_iter()
            .filter(|v| !flags.is_flagged(&v.id))
            .collect();
        candidates.sort_by(|a, b| a.id.cmp(&b.id));

        let pick = candidates
            .choose(rng)
            .ok_or(PlaybackError::NoVideosAvailable)?;
        self.play(catalog, flags, &pick.id)
    }

    pub fn stop(&mut self) -> Result<Arc<Video>, PlaybackError> {
        self.take_active().ok_or(PlaybackError::NothingPlaying)
    }

    pub fn pause(&mut self) -> Result<Arc<Video>, PlaybackError> {
        match &self.state {
            PlaybackState::Idle => Err(PlaybackError::NothingPlaying),
            PlaybackState::Paused(video) => Err(PlaybackError::AlreadyPaused(video.title.clone())),
            PlaybackState::Playing(video) => {
                let video = Arc::clone(video);
                info!("Paused video '{}'", video.id);
                self.state = PlaybackState::Paused(Arc::clone(&video));
                Ok(video)
            }
        }
    }

    pub fn resume(&mut self, flags: &FlagRegistry) -> Result<Arc<Video>, PlaybackError> {
        self.invalidate_flagged(flags);
        match &self.state {
            PlaybackState::Idle => Err(PlaybackError::NothingPlaying),
            PlaybackState::Playing(_) => Err(PlaybackError::NotPaused),
            PlaybackState::Paused(video) => {
                let video = Arc::clone(video);
                info!("Resumed video '{}'", video.id);
                self.state = PlaybackState::Playing(Arc::clone(&video));
                Ok(video)
            }
        }
    }

    /// Active video and whether it is paused
    pub fn current(&mut self, flags: &FlagRegistry) -> Option<(Arc<Video>, bool)> {
        self.invalidate_flagged(flags);
        let paused = self.state.is_paused();
        self.state.video().map(|video| (Arc::clone(video), paused))
    }

    /// Stop playback if `id` is the active video. Returns the stopped video.
    pub fn stop_if_active(&mut self, id: &str) -> Option<Arc<Video>> {
        let active = self.state.video().is_some_and(|video| video.id == id);
        if active {
            self.take_active()
        } else {
            None
        }
    }

    fn take_active(&mut self) -> Option<Arc<Video>> {
        let video = std::mem::take(&mut self.state).video().cloned();
        if let Some(video) = &video {
            info!("Stopped video '{}'", video.id);
        }
        video
    }

    // Paused on a video that got flagged in the meantime -> drop back to idle
    fn invalidate_flagged(&mut self, flags: &FlagRegistry) {
        if let PlaybackState::Paused(video) = &self.state {
            if flags.is_flagged(&video.id) {
                debug!("Dropping paused video '{}' - flagged since", video.id);
                self.state = PlaybackState::Idle;
            }
        }
    }
}
