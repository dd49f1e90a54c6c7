//! Robot state.

use crate::grid::{Direction, Grid, Position};
use serde::{Deserialize, Serialize};

/// Everything the simulator knows about the robot.
///
/// `Default` is the unplaced state: no position, no direction, an empty command
/// log and no report. When `placed` is true both `position` and `direction` are
/// set and the position lies on the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotState {
    /// Current cell, unset until the first successful placement.
    pub position: Option<Position>,

    /// Current facing direction, unset until the first successful placement.
    pub direction: Option<Direction>,

    /// Gate for every position- or direction-dependent operation.
    pub placed: bool,

    /// Accepted place, rotate and move commands in the order they ran.
    pub command_log: Vec<String>,

    /// Output of the most recent report, empty when there is none.
    pub last_report: String,
}

impl RobotState {
    /// Position and direction, if the robot has been placed.
    pub fn pose(&self) -> Option<(Position, Direction)> {
        if !self.placed {
            return None;
        }
        Some((self.position?, self.direction?))
    }

    /// Checks the placement invariant.
    pub fn is_consistent(&self) -> bool {
        match (self.placed, self.position, self.direction) {
            (true, Some(pos), Some(_)) => Grid::contains(pos),
            (true, _, _) => false,
            (false, _, _) => true,
        }
    }

    /// Renders the `"x, y, DIRECTION"` report line for a pose.
    pub fn format_report(position: Position, direction: Direction) -> String {
        format!("{}, {}, {}", position.x, position.y, direction)
    }
}
