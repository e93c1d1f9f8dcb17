//! The line-oriented text protocol.
//!
//! Before every command the session writes a prompt line: a turn indicator
//! (`C` for Black, `B` for White) followed by the legal target squares of the
//! side to move, each preceded by a space, e.g. `C c4 d3 e6 f5`. It then reads
//! one command line:
//!
//! - `=` ends the session; nothing after it is read,
//! - `-` passes the turn,
//! - `<file><rank>` such as `d3` places a piece.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::{info, warn};
use thiserror::Error;

use crate::game::Game;
use crate::player::Player;
use crate::position::{ParsePositionError, Position};
use crate::r#move::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Pass,
    Place(Position),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised command {line:?}: {source}")]
pub struct ParseCommandError {
    line: String,
    source: ParsePositionError,
}

/// Parses one protocol line. A trailing `\n` or `\r\n` is ignored.
impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\n', '\r']);
        match line {
            "=" => Ok(Command::Quit),
            "-" => Ok(Command::Pass),
            _ => line
                .parse()
                .map(Command::Place)
                .map_err(|source| ParseCommandError {
                    line: line.to_string(),
                    source,
                }),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// `C` for Black, `B` for White.
pub fn turn_indicator(player: Player) -> char {
    match player {
        Player::Black => 'C',
        Player::White => 'B',
    }
}

/// Prompt text without the line terminator.
pub fn format_prompt(player: Player, targets: &[Position]) -> String {
    let mut prompt = String::with_capacity(1 + 3 * targets.len());
    prompt.push(turn_indicator(player));
    for target in targets {
        prompt.push(' ');
        prompt.push_str(&target.to_string());
    }
    prompt
}

/// Drives a [`Game`] from a command stream, writing prompts to `output`.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_game(Game::new(), input, output)
    }

    pub fn with_game(game: Game, input: R, output: W) -> Self {
        Session {
            game,
            input,
            output,
        }
    }

    /// Run until `=` or end of input and hand back the final game.
    ///
    /// Lines that do not parse, and placements that are not legal for the
    /// side to move, are skipped and the same side is prompted again.
    pub fn run(mut self) -> Result<Game, ProtocolError> {
        info!("session started");

        loop {
            self.write_prompt()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("end of input after {} moves", self.game.move_count());
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => {
                    info!("quit after {} moves", self.game.move_count());
                    break;
                }
                Ok(Command::Pass) => self.game.pass(),
                Ok(Command::Place(pos)) => {
                    // Illegal placements are logged by the game and leave the turn as is.
                    self.game.make_move(&Move::from(pos));
                }
                Err(e) => warn!("{}", e),
            }
        }

        self.output.flush()?;
        Ok(self.game)
    }

    fn write_prompt(&mut self) -> io::Result<()> {
        let prompt = format_prompt(self.game.turn(), &self.game.legal_targets());
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()
    }
}
