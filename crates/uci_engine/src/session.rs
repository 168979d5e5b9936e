//! One UCI conversation: the current position and the engine answering for it.

use std::io::{self, Write};

use chess_core::{
    move_to_uci, set_position_from_uci, Engine, GoParams, Position, PositionOracle,
};
use classical_engine::{ClassicalEngine, Thought, MATE_SCORE};
use tracing::{debug, warn};

pub struct Session {
    engine: ClassicalEngine,
    pos: Position,
}

impl Session {
    pub fn new(engine: ClassicalEngine) -> Self {
        Self {
            engine,
            pos: Position::startpos(),
        }
    }

    /// Handles one input line. Returns `Ok(false)` once the GUI sends `quit`.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Ok(true);
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(out, "option name Depth type spin default 0 min 0 max 20")?;
                writeln!(out, "option name MoveOrdering type check default true")?;
                writeln!(out, "option name PieceSquareTables type check default true")?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "ucinewgame" => {
                self.pos = Position::startpos();
                self.engine.new_game();
            }
            "position" => {
                if let Err(e) = set_position_from_uci(&mut self.pos, &parts[1..]) {
                    warn!(error = %e, line, "ignoring position command");
                }
            }
            "setoption" => self.set_option(&parts[1..]),
            "go" => self.go(&parts[1..], out)?,
            "quit" => return Ok(false),
            _ => debug!(line, "ignoring unknown command"),
        }
        Ok(true)
    }

    /// `setoption name <name...> [value <value...>]`
    fn set_option(&mut self, args: &[&str]) {
        let value_at = args.iter().position(|&t| t == "value");
        let name_end = value_at.unwrap_or(args.len());
        let name = match args.first() {
            Some(&"name") => args[1..name_end].join(" "),
            _ => String::new(),
        };
        let value = value_at.map(|i| args[i + 1..].join(" ")).unwrap_or_default();

        if !self.engine.set_option(&name, &value) {
            warn!(option = %name, value = %value, "unsupported option");
        }
    }

    fn go(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let go = GoParams::parse(args);
        let clock = go.clock_for(self.pos.side_to_move());

        // `go depth N` applies to this search only
        let saved = self.engine.config().search.fixed_ply;
        if let Some(depth) = go.depth {
            self.engine.config_mut().search.fixed_ply = Some(depth);
        }
        let thought = self.engine.think_with(&mut self.pos, &clock);
        self.engine.config_mut().search.fixed_ply = saved;

        writeln!(out, "{}", info_line(&thought))?;
        match thought.result.best_move {
            Some(mv) => writeln!(out, "bestmove {}", move_to_uci(mv)),
            None => writeln!(out, "bestmove 0000"),
        }
    }
}

fn info_line(thought: &Thought) -> String {
    let result = &thought.result;
    let score = if result.score.abs() >= MATE_SCORE {
        // Mate distance is not tracked; report the furthest mate the search
        // could have seen, or 0 when the side to move is already mated
        let moves = match result.best_move {
            Some(_) => ((i32::from(thought.budget.max_ply) + 1) / 2).max(1),
            None => 0,
        };
        format!("mate {}", moves * result.score.signum())
    } else {
        format!("cp {}", result.score)
    };

    let mut line = format!(
        "info depth {} score {} nodes {} time {}",
        thought.budget.max_ply,
        score,
        thought.stats.total_nodes(),
        thought.elapsed.as_millis()
    );
    let pv: Vec<String> = [result.best_move, result.expected_reply]
        .into_iter()
        .map_while(|mv| mv.map(move_to_uci))
        .collect();
    if !pv.is_empty() {
        line.push_str(" pv ");
        line.push_str(&pv.join(" "));
    }
    line
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
