// Playlists - named, ordered collections of video ids
// Names keep their casing for display but are matched case-insensitively

pub mod store;

pub use store::{Playlist, PlaylistError, PlaylistStore};
