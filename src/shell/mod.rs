// Line-oriented shell - reads commands, hands them to the controller, prints the replies
// Generic over reader/writer so the whole loop runs against in-memory buffers in tests

pub mod command;

pub use command::{Command, CommandError, HELP_TEXT};

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::controller::{CommandController, Reply};
use crate::library::VideoCatalog;
use crate::search::SearchResults;

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell<C: VideoCatalog, R: BufRead, W: Write> {
    controller: CommandController<C>,
    input: R,
    output: W,
    prompt: String,
}

impl<C: VideoCatalog, R: BufRead, W: Write> Shell<C, R, W> {
    pub fn new(controller: CommandController<C>, input: R, output: W) -> Self {
        Self {
            controller,
            input,
            output,
            prompt: String::new(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn controller(&self) -> &CommandController<C> {
        &self.controller
    }

    pub fn into_parts(self) -> (CommandController<C>, W) {
        (self.controller, self.output)
    }

    /// Run until EXIT or end of input
    pub fn run(&mut self) -> Result<()> {
        info!("Shell started");
        loop {
            self.show_prompt()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            if self.execute(&line)? == Flow::Exit {
                break;
            }
        }
        info!("Shell finished");
        Ok(())
    }

    /// Parse and run one line, including any search follow-up read from the input
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                debug!("Could not parse '{}': {}", line.trim(), e);
                self.write_lines(&[e.to_string()])?;
                return Ok(Flow::Continue);
            }
        };
        debug!("Executing {:?}", command);

        let ctl = &mut self.controller;
        let reply = match command {
            Command::NumberOfVideos => ctl.number_of_videos(),
            Command::ShowAllVideos => ctl.show_all_videos(),
            Command::Play(id) => ctl.play(&id),
            Command::Stop => ctl.stop(),
            Command::PlayRandom => ctl.play_random(),
            Command::Pause => ctl.pause(),
            Command::Continue => ctl.continue_video(),
            Command::ShowPlaying => ctl.show_playing(),
            Command::CreatePlaylist(name) => ctl.create_playlist(&name),
            Command::AddToPlaylist { playlist, video } => ctl.add_to_playlist(&playlist, &video),
            Command::RemoveFromPlaylist { playlist, video } => {
                ctl.remove_from_playlist(&playlist, &video)
            }
            Command::ClearPlaylist(name) => ctl.clear_playlist(&name),
            Command::DeletePlaylist(name) => ctl.delete_playlist(&name),
            Command::ShowPlaylist(name) => ctl.show_playlist(&name),
            Command::ShowAllPlaylists => ctl.show_all_playlists(),
            Command::SearchVideos(term) => {
                let results = ctl.search_videos(&term);
                self.run_search(results)?
            }
            Command::SearchVideosWithTag(tag) => {
                let results = ctl.search_videos_with_tag(&tag);
                self.run_search(results)?
            }
            Command::FlagVideo { video, reason } => ctl.flag_video(&video, reason.as_deref()),
            Command::AllowVideo(id) => ctl.allow_video(&id),
            Command::Help => HELP_TEXT.lines().map(str::to_string).collect(),
            Command::Exit => return Ok(Flow::Exit),
        };

        self.write_lines(&reply)?;
        Ok(Flow::Continue)
    }

    // Print the results, then read one answer line. EOF counts as declining.
    fn run_search(&mut self, results: SearchResults) -> Result<Reply> {
        self.write_lines(&results.lines())?;
        if results.is_empty() {
            return Ok(Vec::new());
        }

        let answer = self.read_line()?.unwrap_or_default();
        Ok(self.controller.choose(&results, &answer))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show_prompt(&mut self) -> Result<()> {
        if !self.prompt.is_empty() {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()?;
        Ok(())
    }
}
