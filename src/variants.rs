use crate::boards::BoardState;
use crate::chess_errors::*;
use crate::positions::Dimensions;
use std::fmt;

/// The built-in boards, selected by their mode number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// 6x6 board without bishops.
    Six,
    /// 5x5 board with one of every piece.
    Five,
    /// 4x5 board, pieces in the corners.
    Four,
}

impl Variant {
    pub fn from_mode(mode: u8) -> ChessResult<Variant> {
        match mode {
            6 => Ok(Variant::Six),
            5 => Ok(Variant::Five),
            4 => Ok(Variant::Four),
            _ => Err(ChessError::UnknownVariant(mode)),
        }
    }

    pub fn all() -> [Variant; 3] {
        [Variant::Six, Variant::Five, Variant::Four]
    }

    pub fn dims(self) -> Dimensions {
        match self {
            Variant::Six => Dimensions::const_new(6, 6),
            Variant::Five => Dimensions::const_new(5, 5),
            Variant::Four => Dimensions::const_new(4, 5),
        }
    }

    pub fn layout(self) -> &'static str {
        match self {
            Variant::Six => "rnqknr/pppppp/6/6/PPPPPP/RNQKNR",
            Variant::Five => "rnbqk/ppppp/5/PPPPP/RNBQK",
            Variant::Four => "kbnr/p3/4/3P/RNBK",
        }
    }

    pub fn setup(self) -> BoardState {
        BoardState::load(self.layout(), self.dims())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.dims();
        write!(f, "{}x{}", dims.width(), dims.height())
    }
}
