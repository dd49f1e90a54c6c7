//! Table geometry: the fixed 5x5 board, positions on it, and facing directions.

use crate::error::ParseCommandError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cells along each side of the table.
pub const GRID_SIZE: i32 = 5;

/// A cell on the table. `x` grows to the EAST, `y` grows to the NORTH.
pub type Position = IVec2;

/// The bounded table the robot moves on. Coordinates `0..GRID_SIZE` on both axes.
pub struct Grid;

impl Grid {
    /// Returns true when `pos` lies on the table.
    pub fn contains(pos: Position) -> bool {
        (0..GRID_SIZE).contains(&pos.x) && (0..GRID_SIZE).contains(&pos.y)
    }
}

/// Facing direction, in clockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in cyclic (clockwise) order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Direction at `index` in the cycle, wrapping modulo 4 in both directions.
    pub fn from_index(index: isize) -> Self {
        Self::ALL[index.rem_euclid(Self::ALL.len() as isize) as usize]
    }

    /// Steps one position through the cycle: backward for LEFT, forward for RIGHT.
    pub fn rotated(self, rotation: Rotation) -> Self {
        let delta = match rotation {
            Rotation::Left => -1,
            Rotation::Right => 1,
        };
        Self::from_index(self.index() as isize + delta)
    }

    /// Unit offset of a single move in this direction.
    ///
    /// Moves are always exactly one cell, so the bounds check after a step only
    /// ever has to catch a coordinate that is off by one.
    pub fn step(self) -> Position {
        match self {
            Direction::North => IVec2::Y,
            Direction::East => IVec2::X,
            Direction::South => IVec2::NEG_Y,
            Direction::West => IVec2::NEG_X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCommandError::InvalidDirection(s.trim().to_string()))
    }
}

/// A quarter turn in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rotation {
    Left,
    Right,
}

impl Rotation {
    pub fn as_str(self) -> &'static str {
        match self {
            Rotation::Left => "LEFT",
            Rotation::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rotation {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEFT" => Ok(Rotation::Left),
            "RIGHT" => Ok(Rotation::Right),
            other => Err(ParseCommandError::UnknownCommand(other.to_string())),
        }
    }
}
