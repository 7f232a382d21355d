// vidshelf Library - Core modules for the command-driven video library
// Each concern lives in its own module; the controller ties them together

pub mod config;     // settings and preferences
pub mod controller; // command dispatch and output lines
pub mod library;    // video catalog
pub mod moderation; // flagged videos
pub mod playback;   // play/pause/stop state
pub mod playlist;   // named playlists
pub mod search;     // title and tag search
pub mod shell;      // command parsing + input loop

// Export the stuff other modules actually use
pub use config::Config;
pub use controller::{CommandController, Reply};
pub use library::{Video, VideoCatalog, VideoLibrary};
pub use moderation::FlagRegistry;
pub use playback::{PlaybackSession, PlaybackState};
pub use playlist::PlaylistStore;
pub use shell::Shell;
