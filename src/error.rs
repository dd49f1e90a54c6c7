//! Error types for the simulator and the command parser.

use crate::grid::{Direction, Position};
use thiserror::Error;

/// A rejected robot operation.
///
/// All variants are expected outcomes of user input. The simulator state is left
/// untouched whenever one is returned, and the caller decides how to surface it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RobotError {
    #[error("invalid placement: ({x}, {y}) facing {} is not on the 5x5 table", display_direction(.direction))]
    InvalidPlacement {
        x: i32,
        y: i32,
        direction: Option<Direction>,
    },

    #[error("robot has not been placed on the table yet")]
    NotPlaced,

    #[error("move rejected: robot at {} facing {direction} would fall off the table", display_position(.position))]
    FallOffRejected {
        position: Position,
        direction: Direction,
    },
}

impl RobotError {
    /// Every rejection can be recovered from, at worst by a reset.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RobotError::InvalidPlacement { .. }
                | RobotError::NotPlaced
                | RobotError::FallOffRejected { .. }
        )
    }
}

fn display_position(position: &Position) -> String {
    format!("({}, {})", position.x, position.y)
}

fn display_direction(direction: &Option<Direction>) -> &'static str {
    direction.map(Direction::as_str).unwrap_or("<unset>")
}

/// A command line that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} is missing its {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    #[error("{command} takes no arguments, got: {found}")]
    UnexpectedArgument { command: &'static str, found: String },
}

pub type RobotResult<T> = Result<T, RobotError>;
