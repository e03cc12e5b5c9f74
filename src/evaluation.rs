use crate::boards::BoardState;
use std::fmt;
use std::ops;

/// Score of a position from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(pub i32);

impl Score {
    pub const ZERO: Score = Score(0);
    /// Value of a node whose side to move has no move at all.
    pub const NO_MOVES: Score = Score(-999);

    pub fn abs(self) -> i32 {
        self.0.abs()
    }
}

impl_op_ex!(+ |a: &Score, b: &Score| -> Score { Score(a.0 + b.0) });
impl_op!(- |a: Score| -> Score { Score(-a.0) });
impl_op!(+= |a: &mut Score, b: Score| { a.0 += b.0; });

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Material balance: pawn 1, knight and bishop 3, rook 5, queen 9, king 999.
/// Pieces of the side to move count positive, the others negative.
pub fn evaluate(board: &BoardState) -> Score {
    let side = board.side_to_move();
    let mut score = Score::ZERO;
    for (_, piece) in board.pieces() {
        let value = Score(piece.kind.value());
        score += if piece.color == side { value } else { -value };
    }
    score
}
