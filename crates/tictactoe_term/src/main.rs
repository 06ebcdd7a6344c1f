//! Tictactoe - terminal front end
//!
//! Reads commands from stdin and redraws after every engine update.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use command::{Command, HELP};
use std::io::{self, BufRead, Write};
use tictactoe_engine::{EngineConfig, EngineError, GameEngine, PublicState};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(?config, "Starting terminal game");

    let json = cli.json;
    let mut engine = GameEngine::new(config);
    engine.add_observer(Box::new(move |state: &PublicState| print_state(state, json)));
    engine.initialize(*config.starting_mark())?;

    run(&mut engine, io::stdin().lock(), json)
}

/// Builds the engine config from the config file and flag overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(mark) = cli.start {
        config = config.with_starting_mark(mark);
    }
    if cli.no_history {
        config = config.with_history_review(false);
    }
    debug!(?config, "Config resolved");
    Ok(config)
}

/// Reads commands until `quit` or end of input.
fn run(engine: &mut GameEngine, input: impl BufRead, json: bool) -> Result<()> {
    prompt()?;
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if !line.trim().is_empty() {
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    if let Err(e) = dispatch(engine, command, json) {
                        println!("{}", e);
                    }
                }
                Err(e) => println!("{}", e),
            }
        }
        prompt()?;
    }
    Ok(())
}

/// Runs one command against the engine. Redraws happen in the observer.
fn dispatch(engine: &mut GameEngine, command: Command, json: bool) -> Result<(), EngineError> {
    debug!(?command, "Dispatching command");
    match command {
        Command::Place { row, col } => {
            let mark = engine
                .public_state()
                .to_move()
                .unwrap_or(*engine.config().starting_mark());
            engine.apply_move(row, col, mark)?;
        }
        Command::Review => {
            engine.enter_history_review()?;
        }
        Command::Back => {
            engine.step_history(-1)?;
        }
        Command::Forward => {
            engine.step_history(1)?;
        }
        Command::Jump(index) => {
            engine.jump_history(index)?;
        }
        Command::Reset => {
            engine.reset()?;
            engine.restart()?;
        }
        Command::Show => print_state(&engine.public_state(), json),
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
    Ok(())
}

fn print_state(state: &PublicState, json: bool) {
    if json {
        match state.to_json() {
            Ok(line) => println!("{}", line),
            Err(e) => warn!(error = %e, "Failed to serialize state"),
        }
    } else {
        println!("\n{}\n", render::render(state));
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().context("Failed to flush stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Mark, Phase};

    fn engine() -> GameEngine {
        let mut engine = GameEngine::default();
        engine.initialize(Mark::X).expect("initialize");
        engine
    }

    #[test]
    fn test_run_plays_to_a_win() {
        let mut engine = engine();
        let input = io::Cursor::new("1\n4\n2\n5\n3\nquit\n9\n");
        run(&mut engine, input, false).expect("run");

        assert_eq!(*engine.public_state().phase(), Phase::Won(Mark::X));
        assert_eq!(engine.history().len(), 5);
    }

    #[test]
    fn test_bad_input_does_not_stop_the_game() {
        let mut engine = engine();
        let input = io::Cursor::new("dance\n5\n5\n9 9\n1\n");
        run(&mut engine, input, false).expect("run");

        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn test_review_then_place() {
        let mut engine = engine();
        let input = io::Cursor::new("5\n1\n<\n9\n");
        run(&mut engine, input, false).expect("run");
        assert_eq!(engine.history().len(), 2);
        assert!(!engine.public_state().is_reviewing());

        run(&mut engine, io::Cursor::new("9\n"), false).expect("run");
        assert_eq!(engine.history().len(), 3);
    }

    #[test]
    fn test_reset_restarts() {
        let mut engine = engine();
        run(&mut engine, io::Cursor::new("5\nreset\n"), false).expect("run");

        let state = engine.public_state();
        assert_eq!(*state.phase(), Phase::InProgress);
        assert_eq!(*state.history_len(), 0);
    }

    #[test]
    fn test_load_config_overrides() {
        let cli = Cli::parse_from(["tictactoe", "--start", "O", "--no-history"]);
        let config = load_config(&cli).expect("config");
        assert_eq!(*config.starting_mark(), Mark::O);
        assert!(!*config.history_review());
    }
}
