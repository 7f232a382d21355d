// Moderation - administrative flags that take videos out of circulation
// A flagged video can't be played, found by search or added to a playlist

pub mod flags;

pub use flags::{FlagError, FlagRegistry, DEFAULT_FLAG_REASON};
