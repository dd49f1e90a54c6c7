//! Interpreter that runs a text script of robot commands against a [`RobotSimulator`].
//!
//! The entry point is [`ScriptInterpreter`]. Configure it with an [`InterpreterConfig`],
//! then call [`ScriptInterpreter::run`] with the script text. Each non-blank line is
//! parsed into a [`Command`] and applied in order.

use crate::command::Command;
use crate::error::{ParseCommandError, RobotError};
use crate::simulator::RobotSimulator;
use thiserror::Error;
use tracing::{info, warn};

/// Configuration for script interpretation.
#[derive(Clone, Debug)]
pub struct InterpreterConfig {
    /// Stop at the first rejected or unparsable line instead of carrying on.
    pub halt_on_error: bool,
    /// Maximum number of commands executed per run. Later lines are ignored.
    pub max_commands: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            halt_on_error: false,
            max_commands: 10_000,
        }
    }
}

/// Why a script line did not take effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error(transparent)]
    Parse(#[from] ParseCommandError),
    #[error(transparent)]
    Rejected(#[from] RobotError),
}

/// A line that was skipped, with its 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub line: usize,
    pub text: String,
    pub error: LineError,
}

/// Result of running a script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptOutcome {
    /// Report lines in the order they were produced.
    pub reports: Vec<String>,
    /// Lines that failed to parse or were rejected by the simulator.
    pub rejections: Vec<Rejection>,
    /// Number of commands that were applied successfully.
    pub executed: usize,
    /// True when the run stopped early (halt on error or command cap).
    pub halted: bool,
}

impl ScriptOutcome {
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }
}

/// Runs command scripts.
pub struct ScriptInterpreter {
    config: InterpreterConfig,
}

impl ScriptInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Runs every line of `script` against `simulator`.
    ///
    /// Blank lines and `#` comments are skipped. Parse failures and simulator
    /// rejections are logged and collected in [`ScriptOutcome::rejections`]; the
    /// simulator is unchanged by them, so the script carries on unless
    /// `halt_on_error` is set.
    pub fn run(&self, simulator: &mut RobotSimulator, script: &str) -> ScriptOutcome {
        let mut outcome = ScriptOutcome::default();
        let mut attempted = 0usize;

        for (idx, raw) in script.lines().enumerate() {
            let line = idx + 1;

            let result = match Command::parse_line(raw) {
                Ok(None) => continue,
                Ok(Some(command)) => {
                    if attempted >= self.config.max_commands {
                        warn!(
                            line,
                            max = self.config.max_commands,
                            "command limit reached, ignoring rest of script"
                        );
                        outcome.halted = true;
                        break;
                    }
                    attempted += 1;
                    simulator.execute(&command).map_err(LineError::from)
                }
                Err(e) => Err(LineError::from(e)),
            };

            match result {
                Ok(report) => {
                    outcome.executed += 1;
                    if let Some(report) = report {
                        outcome.reports.push(report);
                    }
                }
                Err(error) => {
                    warn!(line, command = raw.trim(), %error, "command ignored");
                    outcome.rejections.push(Rejection {
                        line,
                        text: raw.trim().to_string(),
                        error,
                    });
                    if self.config.halt_on_error {
                        outcome.halted = true;
                        break;
                    }
                }
            }
        }

        info!(
            executed = outcome.executed,
            rejected = outcome.rejections.len(),
            reports = outcome.reports.len(),
            halted = outcome.halted,
            "script finished"
        );
        outcome
    }
}

impl Default for ScriptInterpreter {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}
