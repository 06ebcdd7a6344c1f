//! Parsing of the commands typed at the prompt.

use derive_more::{Display, Error};
use std::str::FromStr;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current mark at a row and column (0-based).
    Place {
        /// Row (0-2).
        row: usize,
        /// Column (0-2).
        col: usize,
    },
    /// Enter history review at the latest move.
    Review,
    /// Step one move back in history.
    Back,
    /// Step one move forward in history.
    Forward,
    /// Show the board after move `n` (0-based).
    Jump(usize),
    /// Clear the board and start again.
    Reset,
    /// Print the current state.
    Show,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that isn't a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input {input:?} (type 'help' for commands)")]
pub struct ParseCommandError {
    /// The rejected line.
    pub input: String,
}

impl ParseCommandError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  1-9            place your mark on the numbered cell
  <row> <col>    place your mark by row and column (0-2)
  review         view the latest move in history
  back, <        step back through history
  forward, >     step forward through history
  jump <n>       view the board after move n
  reset          clear the board and start over
  show           print the current state
  help           print this list
  quit           leave the game";

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let number = |w: &str| w.parse::<usize>().map_err(|_| ParseCommandError::new(s));

        let command = match words.as_slice() {
            [cell] if cell.len() == 1 && cell.chars().all(|c| c.is_ascii_digit()) => {
                let n = number(*cell)?;
                if !(1..=9).contains(&n) {
                    return Err(ParseCommandError::new(s));
                }
                Command::Place {
                    row: (n - 1) / 3,
                    col: (n - 1) % 3,
                }
            }
            ["review"] => Command::Review,
            ["back"] | ["b"] | ["<"] => Command::Back,
            ["forward"] | ["f"] | [">"] => Command::Forward,
            ["jump", n] => match number(*n)? {
                0 => return Err(ParseCommandError::new(s)),
                n => Command::Jump(n - 1),
            },
            ["reset"] => Command::Reset,
            ["show"] | ["state"] => Command::Show,
            ["help"] | ["?"] => Command::Help,
            ["quit"] | ["exit"] | ["q"] => Command::Quit,
            [row, col] | ["move", row, col] => Command::Place {
                row: number(*row)?,
                col: number(*col)?,
            },
            _ => return Err(ParseCommandError::new(s)),
        };
        Ok(command)
    }
}
