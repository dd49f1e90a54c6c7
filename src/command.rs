//! Textual robot commands.
//!
//! Parses the conventional line syntax (`PLACE 1,2,NORTH`, `MOVE`, `LEFT`, `RIGHT`,
//! `REPORT`, `RESET`) and renders accepted commands the way they appear in the
//! command log.

use crate::error::ParseCommandError;
use crate::grid::{Direction, Rotation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PLACE: &str = "PLACE";
pub const MOVE: &str = "MOVE";
pub const REPORT: &str = "REPORT";
pub const RESET: &str = "RESET";

/// One operation on the simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Put the robot on the table. A `None` direction is accepted here and
    /// rejected by the simulator as an invalid placement.
    Place {
        x: i32,
        y: i32,
        direction: Option<Direction>,
    },
    /// Turn a quarter in place.
    Rotate(Rotation),
    /// Advance one cell in the facing direction.
    Move,
    /// Produce the `"x, y, DIRECTION"` line.
    Report,
    /// Return to the initial empty state.
    Reset,
}

impl Command {
    /// Parses a script line. Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse_line(line: &str) -> Result<Option<Self>, ParseCommandError> {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (keyword, rest) = match s.split_once(char::is_whitespace) {
            Some((k, r)) => (k, r.trim()),
            None => (s, ""),
        };
        if keyword.is_empty() {
            return Err(ParseCommandError::Empty);
        }

        let bare = |command: &'static str, value: Command| {
            if rest.is_empty() {
                Ok(value)
            } else {
                Err(ParseCommandError::UnexpectedArgument {
                    command,
                    found: rest.to_string(),
                })
            }
        };

        match keyword.to_ascii_uppercase().as_str() {
            PLACE => parse_place(rest),
            MOVE => bare(MOVE, Command::Move),
            REPORT => bare(REPORT, Command::Report),
            RESET => bare(RESET, Command::Reset),
            "LEFT" => bare("LEFT", Command::Rotate(Rotation::Left)),
            "RIGHT" => bare("RIGHT", Command::Rotate(Rotation::Right)),
            other => Err(ParseCommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_place(args: &str) -> Result<Command, ParseCommandError> {
    let mut parts = args.split(',').map(str::trim);

    let mut coordinate = |argument: &'static str| -> Result<i32, ParseCommandError> {
        match parts.next() {
            Some(raw) if !raw.is_empty() => raw
                .parse()
                .map_err(|_| ParseCommandError::InvalidCoordinate(raw.to_string())),
            _ => Err(ParseCommandError::MissingArgument {
                command: PLACE,
                argument,
            }),
        }
    };
    let x = coordinate("x")?;
    let y = coordinate("y")?;

    // Direction may be omitted; the simulator reports that as an invalid placement.
    let direction = match parts.next() {
        Some(raw) if !raw.is_empty() => Some(raw.parse()?),
        _ => None,
    };

    if let Some(extra) = parts.next() {
        return Err(ParseCommandError::UnexpectedArgument {
            command: PLACE,
            found: extra.to_string(),
        });
    }

    Ok(Command::Place { x, y, direction })
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place {
                x,
                y,
                direction: Some(d),
            } => write!(f, "{PLACE} {x}, {y}, {d}"),
            Command::Place {
                x,
                y,
                direction: None,
            } => write!(f, "{PLACE} {x}, {y}"),
            Command::Rotate(r) => write!(f, "{r}"),
            Command::Move => f.write_str(MOVE),
            Command::Report => f.write_str(REPORT),
            Command::Reset => f.write_str(RESET),
        }
    }
}
