//! The robot simulator: placement, rotation, movement and reporting on the table.
//!
//! The entry point is [`RobotSimulator`]. Every state-dependent operation is gated on
//! a prior successful [`place`](RobotSimulator::place). Rejected operations return a
//! [`RobotError`] and leave the state exactly as it was.

use crate::command::{Command, MOVE};
use crate::error::{RobotError, RobotResult};
use crate::grid::{Direction, Grid, Position, Rotation};
use crate::robot::RobotState;
use tracing::debug;

/// Owns a single robot and applies commands to it one at a time.
#[derive(Clone, Debug, Default)]
pub struct RobotSimulator {
    state: RobotState,
}

impl RobotSimulator {
    /// Creates a simulator with an unplaced robot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the robot at `(x, y)` facing `direction`.
    ///
    /// Succeeds only when both coordinates are in `0..5` and a direction is given.
    /// A successful placement replaces any earlier pose and is appended to the log
    /// as `"PLACE x, y, DIRECTION"`.
    pub fn place(&mut self, x: i32, y: i32, direction: Option<Direction>) -> RobotResult<()> {
        let position = Position::new(x, y);
        let Some(direction) = direction.filter(|_| Grid::contains(position)) else {
            return Err(RobotError::InvalidPlacement { x, y, direction });
        };

        self.state.placed = true;
        self.state.position = Some(position);
        self.state.direction = Some(direction);
        self.state.command_log.push(
            Command::Place {
                x,
                y,
                direction: Some(direction),
            }
            .to_string(),
        );
        debug!(x, y, %direction, "robot placed");
        Ok(())
    }

    /// Turns the robot a quarter to the left or right.
    pub fn rotate(&mut self, rotation: Rotation) -> RobotResult<Direction> {
        let (_, current) = self.pose()?;
        let next = current.rotated(rotation);

        self.state.command_log.push(rotation.to_string());
        self.state.direction = Some(next);
        debug!(from = %current, to = %next, %rotation, "robot rotated");
        Ok(next)
    }

    /// Advances the robot one cell in its facing direction.
    ///
    /// A move that would leave the table is rejected with
    /// [`RobotError::FallOffRejected`] and the robot stays where it is.
    pub fn move_forward(&mut self) -> RobotResult<Position> {
        let (position, direction) = self.pose()?;
        let candidate = position + direction.step();

        if !Grid::contains(candidate) {
            return Err(RobotError::FallOffRejected {
                position,
                direction,
            });
        }

        self.state.position = Some(candidate);
        self.state.command_log.push(MOVE.to_string());
        debug!(x = candidate.x, y = candidate.y, %direction, "robot moved");
        Ok(candidate)
    }

    /// Records and returns the `"x, y, DIRECTION"` line for the current pose.
    pub fn report(&mut self) -> RobotResult<&str> {
        let (position, direction) = self.pose()?;
        self.state.last_report = RobotState::format_report(position, direction);
        Ok(&self.state.last_report)
    }

    /// Returns the robot to the initial, unplaced state. Always succeeds.
    pub fn reset(&mut self) {
        self.state = RobotState::default();
        debug!("robot reset");
    }

    /// Applies a parsed command. Returns the report line for [`Command::Report`].
    pub fn execute(&mut self, command: &Command) -> RobotResult<Option<String>> {
        match *command {
            Command::Place { x, y, direction } => self.place(x, y, direction).map(|_| None),
            Command::Rotate(rotation) => self.rotate(rotation).map(|_| None),
            Command::Move => self.move_forward().map(|_| None),
            Command::Report => self.report().map(|r| Some(r.to_string())),
            Command::Reset => {
                self.reset();
                Ok(None)
            }
        }
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    pub fn is_placed(&self) -> bool {
        self.state.placed
    }

    pub fn position(&self) -> Option<Position> {
        self.state.position
    }

    pub fn direction(&self) -> Option<Direction> {
        self.state.direction
    }

    pub fn command_log(&self) -> &[String] {
        &self.state.command_log
    }

    pub fn last_report(&self) -> &str {
        &self.state.last_report
    }

    fn pose(&self) -> RobotResult<(Position, Direction)> {
        self.state.pose().ok_or(RobotError::NotPlaced)
    }
}
