//! Line-oriented challenge protocol front-end.
//!
//! One token per line: `Name` prints the engine identifier, `Quit` ends the
//! loop, `Start` resets the board, anything else is the opponent's move in
//! four-character notation, answered with the engine's reply move. Stdout
//! carries protocol replies only; diagnostics go through `log`.

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

use crate::engines::engine_alpha_beta::AlphaBetaEngine;
use crate::engines::engine_config::EngineConfig;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::pawn_types::PawnMove;
use crate::game_state::position::Position;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Name,
    Quit,
    Start,
    OpponentMove(PawnMove),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    InvalidMove(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::InvalidMove(msg) => write!(f, "invalid move: {msg}"),
        }
    }
}

impl Error for CommandError {}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        match line.trim() {
            "" => Err(CommandError::Empty),
            "Name" => Ok(Command::Name),
            "Quit" => Ok(Command::Quit),
            "Start" => Ok(Command::Start),
            token => long_algebraic_to_move(token)
                .map(Command::OpponentMove)
                .map_err(CommandError::InvalidMove),
        }
    }
}

/// Reads commands from stdin and answers on stdout until `Quit` or EOF.
pub fn run_stdio_loop(config: EngineConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(stdin.lock(), &mut stdout, config)
}

pub fn run_loop<R: BufRead, W: Write>(input: R, out: &mut W, config: EngineConfig) -> io::Result<()> {
    let mut session = Session::new(Box::new(AlphaBetaEngine::new(config)));

    for line in input.lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, out)?;
        out.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct Session {
    position: Position,
    engine: Box<dyn Engine>,
}

impl Session {
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self {
            position: Position::new_game(),
            engine,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Handles one input line. Returns `Ok(true)` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(CommandError::Empty) => return Ok(false),
            Err(err) => {
                log::warn!("ignoring '{}': {}", line.trim(), err);
                return Ok(false);
            }
        };

        match command {
            Command::Name => writeln!(out, "{}", self.engine.name())?,
            Command::Quit => return Ok(true),
            Command::Start => {
                self.position = Position::new_game();
                self.engine.new_game();
                log::info!("new game");
            }
            Command::OpponentMove(mv) => self.reply_to(mv, out)?,
        }

        Ok(false)
    }

    fn reply_to(&mut self, opponent_move: PawnMove, out: &mut impl Write) -> io::Result<()> {
        self.position.apply_move(opponent_move);
        log::debug!(
            "opponent played {}\n{}",
            move_to_long_algebraic(opponent_move),
            render_game_state(&self.position)
        );

        let result = match self.engine.choose_move(&self.position, &GoParams::default()) {
            Ok(result) => result,
            Err(err) => {
                log::error!("engine failed to choose a move: {err}");
                return Ok(());
            }
        };
        for info in &result.info_lines {
            log::debug!("{info}");
        }

        let Some(reply) = result.best_move else {
            match self.position.winner() {
                Some(winner) => log::info!("game over, {winner:?} side won"),
                None => log::warn!("no legal reply in {}", self.position.get_fen()),
            }
            return Ok(());
        };

        self.position.apply_move(reply);
        writeln!(out, "{}", move_to_long_algebraic(reply))?;
        if let Some(winner) = self.position.winner() {
            log::info!("game over, {winner:?} side won");
        }
        Ok(())
    }
}
