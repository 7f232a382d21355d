use thiserror::Error;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video: String },
    RemoveFromPlaylist { playlist: String, video: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),
    #[error("{keyword} requires {expected}")]
    MissingArgument {
        keyword: &'static str,
        expected: &'static str,
    },
}

pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

impl Command {
    /// Parse a non-blank line. Keywords ignore case; arguments are split on whitespace.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default().to_uppercase();
        let mut arg = |keyword: &'static str, expected: &'static str| {
            words
                .next()
                .map(str::to_string)
                .ok_or(CommandError::MissingArgument { keyword, expected })
        };

        let command = match keyword.as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play(arg("PLAY", "a video id")?),
            "STOP" => Command::Stop,
            "PLAY_RANDOM" => Command::PlayRandom,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => {
                Command::CreatePlaylist(arg("CREATE_PLAYLIST", "a playlist name")?)
            }
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                playlist: arg("ADD_TO_PLAYLIST", "a playlist name and a video id")?,
                video: arg("ADD_TO_PLAYLIST", "a playlist name and a video id")?,
            },
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                playlist: arg("REMOVE_FROM_PLAYLIST", "a playlist name and a video id")?,
                video: arg("REMOVE_FROM_PLAYLIST", "a playlist name and a video id")?,
            },
            "CLEAR_PLAYLIST" => Command::ClearPlaylist(arg("CLEAR_PLAYLIST", "a playlist name")?),
            "DELETE_PLAYLIST" => {
                Command::DeletePlaylist(arg("DELETE_PLAYLIST", "a playlist name")?)
            }
            "SHOW_PLAYLIST" => Command::ShowPlaylist(arg("SHOW_PLAYLIST", "a playlist name")?),
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SEARCH_VIDEOS" => Command::SearchVideos(arg("SEARCH_VIDEOS", "a search term")?),
            "SEARCH_VIDEOS_WITH_TAG" => {
                Command::SearchVideosWithTag(arg("SEARCH_VIDEOS_WITH_TAG", "a tag")?)
            }
            "FLAG_VIDEO" => {
                let video = arg("FLAG_VIDEO", "a video id")?;
                let rest: Vec<&str> = words.collect();
                let reason = (!rest.is_empty()).then(|| rest.join(" "));
                Command::FlagVideo { video, reason }
            }
            "ALLOW_VIDEO" => Command::AllowVideo(arg("ALLOW_VIDEO", "a video id")?),
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };
        Ok(command)
    }
}
