//! A small chess-variant engine for 6x6, 5x5 and 4x5 boards: mailbox board
//! with sentinel padding, pseudo-legal move generation, material evaluation
//! and a fixed-depth negamax search.
//!
//! Rules are a subset of chess: no check detection, castling, en passant,
//! double pawn steps or promotion. The game ends when a king is taken or a
//! side cannot move.
#[macro_use]
extern crate impl_ops;

pub mod agents;
pub mod algorithms;
pub mod boards;
pub mod chess_errors;
pub mod evaluation;
pub mod game;
pub mod layout;
pub mod movegen;
pub mod moves;
pub mod pieces;
pub mod positions;
pub mod utils;
pub mod variants;

pub use algorithms::{negamax, search_best_move, SearchResult, Searcher};
pub use boards::BoardState;
pub use chess_errors::{ChessError, ChessResult};
pub use evaluation::{evaluate, Score};
pub use layout::load_position;
pub use movegen::legal_moves;
pub use moves::{Move, MoveArena};
pub use pieces::{Color, Piece, PieceKind};
pub use variants::Variant;

/// Plays `mv` and returns the captured piece, which `undo_move` needs.
pub fn apply_move(board: &mut BoardState, mv: Move) -> Option<Piece> {
    board.apply(mv)
}

/// Takes back the last move applied to `board`.
pub fn undo_move(board: &mut BoardState, mv: Move, captured: Option<Piece>) {
    board.undo(mv, captured)
}
