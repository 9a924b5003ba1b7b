use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::process::ExitCode;

use pawn_race::engines::engine_config::EngineConfig;
use pawn_race::protocol::command_loop::{run_loop, run_stdio_loop};

const DEBUG_INPUT: &str = "input.txt";
const DEBUG_OUTPUT: &str = "output.txt";

fn main() -> ExitCode {
    let debug_mode = std::env::args().nth(1).is_some_and(|arg| arg == "debug");
    let default_filter = if debug_mode { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            return ExitCode::from(2);
        }
    };
    log::info!(
        "starting with depth {} movetime {} ms scorer {:?}",
        config.max_depth,
        config.movetime_ms,
        config.scorer
    );

    let outcome = if debug_mode {
        // Replays a recorded session from a file instead of stdin.
        File::open(DEBUG_INPUT).and_then(|input| {
            let mut output = BufWriter::new(File::create(DEBUG_OUTPUT)?);
            run_loop(BufReader::new(input), &mut output, config)
        })
    } else {
        run_stdio_loop(config)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("i/o failure: {err}");
            ExitCode::FAILURE
        }
    }
}
