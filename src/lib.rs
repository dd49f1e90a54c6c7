//! # toy-robot
//!
//! A toy robot simulator on a fixed 5x5 table.
//!
//! The robot is placed with `PLACE x, y, DIRECTION`, turned with `LEFT`/`RIGHT`,
//! advanced one cell with `MOVE`, and queried with `REPORT`. Moves that would take
//! it off the table are rejected and the robot stays put. Rejections come back as
//! [`RobotError`] values so the caller decides how to show them to a user.

pub mod command;
pub mod error;
pub mod grid;
pub mod interpreter;
pub mod robot;
pub mod simulator;

pub use command::*;
pub use error::*;
pub use grid::*;
pub use interpreter::*;
pub use robot::*;
pub use simulator::*;
