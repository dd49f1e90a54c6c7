use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use toy_robot::{InterpreterConfig, RobotSimulator, ScriptInterpreter};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "toy-robot", version, about = "Toy robot simulator on a 5x5 table")]
struct Cli {
    #[arg(help = "Command script to run (reads stdin when omitted)")]
    script: Option<PathBuf>,
    #[arg(long, help = "Stop at the first rejected or invalid command")]
    halt_on_error: bool,
    #[arg(long, default_value_t = InterpreterConfig::default().max_commands, help = "Maximum number of commands to execute")]
    max_commands: usize,
    #[arg(long, help = "Print the final robot state as JSON after the reports")]
    json: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let script = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read script from stdin")?;
            buf
        }
    };

    let interpreter = ScriptInterpreter::new(InterpreterConfig {
        halt_on_error: cli.halt_on_error,
        max_commands: cli.max_commands,
    });
    let mut simulator = RobotSimulator::new();
    let outcome = interpreter.run(&mut simulator, &script);

    for report in &outcome.reports {
        println!("{report}");
    }
    for rejection in &outcome.rejections {
        eprintln!("line {}: {}: {}", rejection.line, rejection.text, rejection.error);
    }
    if cli.json {
        println!("{}", serde_json::to_string_pretty(simulator.state())?);
    }

    if cli.halt_on_error && !outcome.is_clean() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
