//! Interactive play session over stdin.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use chatranj_bot::{best_move, random_move};
use chatranj_core::{Board, Color, Move, Square, is_legal, possible_moves};

use crate::command::{Command, parse_command};
use crate::error::CliError;

/// Who answers the human player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    /// Two-player session, no automated replies.
    None,
    /// Replies with the highest-scoring capture or center push.
    Greedy,
    /// Replies with a uniformly random legal move.
    Random,
}

/// An interactive session, holding the board and the side to play.
///
/// Reads commands line by line from stdin until `quit` or input closes.
/// The human always plays White; after each accepted White move the
/// configured opponent answers for Black.
pub struct Session {
    board: Board,
    turn: Color,
    opponent: Opponent,
}

impl Session {
    /// Create a session at the starting position with White to play.
    pub fn new(opponent: Opponent) -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
            opponent,
        }
    }

    /// Run the session loop, reading from stdin until `quit` or input closes.
    pub fn run(mut self) -> Result<(), CliError> {
        let stdin = io::stdin();
        let mut out = io::stdout().lock();

        writeln!(out, "{}", self.board.pretty())?;
        self.prompt(&mut out)?;

        for line in stdin.lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                self.prompt(&mut out)?;
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut out)?,
                Err(e) => {
                    warn!(error = %e, "parse error");
                    writeln!(out, "error: {e}")?;
                }
            }
            self.prompt(&mut out)?;
        }

        info!("chatranj shutting down");
        Ok(())
    }

    fn prompt(&self, out: &mut impl Write) -> Result<(), CliError> {
        write!(out, "{}> ", self.turn)?;
        out.flush()?;
        Ok(())
    }

    fn handle(&mut self, cmd: Command, out: &mut impl Write) -> Result<(), CliError> {
        match cmd {
            Command::Show => writeln!(out, "{}", self.board.pretty())?,
            Command::New => {
                self.reset();
                writeln!(out, "{}", self.board.pretty())?;
            }
            Command::Moves(square) => self.handle_moves(square, out)?,
            Command::Move(mv) => self.handle_move(mv, out)?,
            Command::Help => self.handle_help(out)?,
            Command::Quit => {}
            Command::Unknown(word) => {
                warn!(cmd = %word, "unknown command");
                writeln!(out, "unknown command: {word} (try `help`)")?;
            }
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.board = Board::starting_position();
        self.turn = Color::White;
    }

    fn handle_moves(&self, square: Square, out: &mut impl Write) -> Result<(), CliError> {
        let moves = possible_moves(&self.board, square);
        if moves.is_empty() {
            writeln!(out, "no moves from {square}")?;
        } else {
            let listed: Vec<String> = moves.as_slice().iter().map(Square::to_string).collect();
            writeln!(out, "{square}: {}", listed.join(" "))?;
        }
        Ok(())
    }

    fn handle_move(&mut self, mv: Move, out: &mut impl Write) -> Result<(), CliError> {
        if !is_legal(&self.board, mv.source(), mv.dest(), self.turn) {
            warn!(%mv, side = %self.turn, "rejected move");
            writeln!(out, "illegal move: {mv}")?;
            return Ok(());
        }
        self.apply(mv, out)?;

        if self.turn == Color::Black {
            if let Some(reply) = self.pick_reply() {
                writeln!(out, "{}: {reply}", self.turn)?;
                self.apply(reply, out)?;
            } else if self.opponent != Opponent::None {
                writeln!(out, "{} has no moves; `new` to restart", self.turn)?;
            }
        }
        writeln!(out, "{}", self.board.pretty())?;
        Ok(())
    }

    fn apply(&mut self, mv: Move, out: &mut impl Write) -> Result<(), CliError> {
        if let Some(captured) = self.board.make_move(mv) {
            writeln!(out, "captured {captured}")?;
        }
        self.turn = !self.turn;
        Ok(())
    }

    fn pick_reply(&self) -> Option<Move> {
        match self.opponent {
            Opponent::None => None,
            Opponent::Greedy => best_move(&self.board, self.turn),
            Opponent::Random => random_move(&self.board, self.turn, &mut rand::rng()),
        }
    }

    fn handle_help(&self, out: &mut impl Write) -> Result<(), CliError> {
        writeln!(out, "show         print the board")?;
        writeln!(out, "new          restart from the starting position")?;
        writeln!(out, "moves <rc>   list destinations from a square")?;
        writeln!(out, "move <rrcc>  play a move (e.g. move 6444)")?;
        writeln!(out, "quit         end the session")?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Opponent::Greedy)
    }
}
