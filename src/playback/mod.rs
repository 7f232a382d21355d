pub mod session;

pub use session::{PlayOutcome, PlaybackError, PlaybackSession, PlaybackState};
