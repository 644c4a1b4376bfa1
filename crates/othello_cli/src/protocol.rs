//! Text protocol spoken over stdin/stdout.
//!
//! One command per line, replies on the writer handed to [`Session::handle`].
//! Problems with a command are logged and never end the session.

use std::io::{self, Write};

use alphabeta_engine::AlphaBetaEngine;
use othello_core::{position_from_args, Engine, GameState, SearchLimits};
use tracing::{debug, warn};

/// Largest depth accepted through `setoption` or `go depth`.
pub const MAX_PROTOCOL_DEPTH: u32 = 20;

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One protocol session: the current position and the options set so far.
pub struct Session {
    state: GameState,
    limits: SearchLimits,
    engine: AlphaBetaEngine,
}

impl Session {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            state: GameState::startpos(),
            limits,
            engine: AlphaBetaEngine::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };

        match command {
            "othello" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 0 max {}",
                    self.limits.max_depth, MAX_PROTOCOL_DEPTH
                )?;
                writeln!(
                    out,
                    "option name Pruning type check default {}",
                    self.limits.pruning
                )?;
                writeln!(out, "othellook")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(args),
            "newgame" => self.new_game(args),
            "position" => match position_from_args(args) {
                Ok(state) => self.state = state,
                Err(e) => warn!("ignoring position command: {e}"),
            },
            "go" => self.go(args, out)?,
            "board" => {
                write!(out, "{}", self.state.to_diagram())?;
                if self.state.is_finished() {
                    let (black, white) = self.state.count_tokens();
                    writeln!(out, "finished {black}-{white}")?;
                } else {
                    writeln!(out, "to move {}", self.state.current_mover())?;
                }
            }
            "quit" => return Ok(Flow::Quit),
            _ => debug!(command, "unknown command"),
        }

        out.flush()?;
        Ok(Flow::Continue)
    }

    /// `setoption name <Name> value <Value>`
    fn set_option(&mut self, args: &[&str]) {
        let name = args
            .iter()
            .position(|&a| a == "name")
            .and_then(|i| args.get(i + 1));
        let value = args
            .iter()
            .position(|&a| a == "value")
            .and_then(|i| args.get(i + 1));
        let (Some(&name), Some(&value)) = (name, value) else {
            warn!("malformed setoption: {}", args.join(" "));
            return;
        };

        match name.to_ascii_lowercase().as_str() {
            "depth" => match value.parse::<u32>() {
                Ok(depth) => self.limits.max_depth = clamp_depth(depth, &self.limits),
                Err(_) => warn!("invalid Depth value {value:?}"),
            },
            "pruning" => match value.parse::<bool>() {
                Ok(pruning) => self.limits.pruning = pruning,
                Err(_) => warn!("invalid Pruning value {value:?}"),
            },
            _ => {
                if !self.engine.set_option(name, value) {
                    warn!("unknown option {name}");
                }
            }
        }
    }

    /// `newgame [size]`
    fn new_game(&mut self, args: &[&str]) {
        let size = match args.first().map(|s| s.parse::<usize>()) {
            None => 8,
            Some(Ok(size)) => size,
            Some(Err(_)) => {
                warn!("invalid board size {:?}", args[0]);
                return;
            }
        };
        match GameState::new(size) {
            Ok(state) => {
                self.state = state;
                self.engine.new_game();
            }
            Err(e) => warn!("ignoring newgame: {e}"),
        }
    }

    /// `go [depth N]`
    fn go(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let mut limits = self.limits;
        if let Some(i) = args.iter().position(|&a| a == "depth") {
            match args.get(i + 1).map(|d| d.parse::<u32>()) {
                Some(Ok(depth)) => limits.max_depth = clamp_depth(depth, &limits),
                _ => warn!("invalid go depth, using {}", limits.max_depth),
            }
        }

        match self.engine.search(&self.state, limits) {
            Ok(result) => {
                writeln!(
                    out,
                    "info depth {} score {} nodes {}",
                    result.depth, result.score, result.nodes
                )?;
                writeln!(out, "bestmove {}", result.best_move)?;
            }
            Err(e) => {
                warn!("search failed: {e}");
                writeln!(out, "info error {e}")?;
                writeln!(out, "bestmove none")?;
            }
        }
        Ok(())
    }
}

/// Keeps a requested horizon between the root depth and the protocol maximum.
fn clamp_depth(requested: u32, limits: &SearchLimits) -> u32 {
    let depth = requested.min(MAX_PROTOCOL_DEPTH).max(limits.root_depth);
    if depth != requested {
        warn!(requested, depth, "depth out of range, clamped");
    }
    depth
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
