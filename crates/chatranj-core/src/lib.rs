//! Core rule engine: board representation, move generation, and move validation.

mod board;
mod col;
mod color;
mod error;
mod grid;
mod movegen;
mod moves;
mod piece;
mod piece_kind;
mod row;
mod square;

pub use board::{Board, PrettyBoard};
pub use col::Col;
pub use color::Color;
pub use error::GridError;
pub use grid::STARTING_GRID;
pub use movegen::{Destinations, is_legal, possible_moves};
pub use moves::Move;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use row::Row;
pub use square::Square;
