/// Describing the moves that can be done on a board, and the buffer the
/// search collects them in.
use crate::chess_errors::*;
use crate::positions::*;
use std::fmt;

/// A move from one square to another. The captured piece is not part of the
/// move; `BoardState::apply` hands it back to the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Four character notation, e.g. `d2d3`.
    pub fn to_algebraic(self, dims: Dimensions) -> String {
        format!("{}{}", self.from.algebraic(dims), self.to.algebraic(dims))
    }

    /// Parses four character notation. Only checks that both squares lie on
    /// the board, not that the move can be played.
    pub fn from_algebraic(s: &str, dims: Dimensions) -> ChessResult<Move> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(ChessError::InvalidMove(s.to_string()));
        }
        let from = Square::from_algebraic(&s[..2], dims)?;
        let to = Square::from_algebraic(&s[2..], dims)?;
        Ok(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}->{:?}", self.from, self.to)
    }
}

// ---------------------------------------------
// Move Arena
// ---------------------------------------------

/// Moves are buffered here during the search. Every search frame appends its
/// moves after the ones of its parent and cuts the buffer back to its own
/// start mark before returning.
#[derive(Debug, Clone, Default)]
pub struct MoveArena {
    moves: Vec<Move>,
    high_water: usize,
}

impl MoveArena {
    pub fn with_capacity(capacity: usize) -> MoveArena {
        MoveArena {
            moves: Vec::with_capacity(capacity),
            high_water: 0,
        }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
        self.high_water = self.high_water.max(self.moves.len());
    }

    /// Current length, used as a frame mark.
    pub fn mark(&self) -> usize {
        self.moves.len()
    }

    /// Drops every move pushed after `mark`.
    pub fn release(&mut self, mark: usize) {
        debug_assert!(mark <= self.moves.len());
        self.moves.truncate(mark);
    }

    pub fn get(&self, i: usize) -> Move {
        self.moves[i]
    }

    /// Moves pushed after `mark`.
    pub fn since(&self, mark: usize) -> &[Move] {
        &self.moves[mark..]
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Largest number of moves held at once since creation.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
