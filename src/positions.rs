use crate::chess_errors::*;
use std::fmt;
use std::ops;

// Squares inside the padded storage. Rows are always 8 cells wide, whatever
// the width of the board; the cells to the right of the board are sentinels.
// The 6x6 board is laid out like this:
//
//     a  b  c  d  e  f
//   +-------------------+-------+
// 6 | 00 01 02 03 04 05 | 06 07 |
// 5 | 08 09 10 11 12 13 | 14 15 |
// 4 | 16 17 18 19 20 21 | 22 23 |
// 3 | 24 25 26 27 28 29 | 30 31 |
// 2 | 32 33 34 35 36 37 | 38 39 |
// 1 | 40 41 42 43 44 45 | 46 47 |
//   +-------------------+-------+
//
// E (here 46) is the first index past the playing area.
//
// ---------------------------------------------
// Positions
// ---------------------------------------------

/// Width of a storage row.
pub const STRIDE: u8 = 8;
/// Maximum number of rows and of playable columns.
pub const MAX_SIDE: u8 = 6;
/// Number of cells in the padded storage.
pub const CAPACITY: usize = (MAX_SIDE * STRIDE) as usize;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

/// Playable size of a board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dimensions {
    width: u8,
    height: u8,
}

impl Dimensions {
    pub fn new(width: u8, height: u8) -> ChessResult<Dimensions> {
        if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(ChessError::InvalidDimensions { width, height });
        }
        Ok(Dimensions { width, height })
    }

    pub(crate) const fn const_new(width: u8, height: u8) -> Dimensions {
        Dimensions { width, height }
    }

    pub const fn width(self) -> u8 {
        self.width
    }

    pub const fn height(self) -> u8 {
        self.height
    }

    /// First storage index past the playing area. Bottom-right square + 1.
    pub const fn end(self) -> usize {
        ((self.height - 1) * STRIDE + self.width) as usize
    }

    /// Checks if a raw storage index is a playable square.
    pub fn is_playable(self, index: i16) -> bool {
        index >= 0
            && (index as usize) < self.end()
            && ((index as u8) % STRIDE) < self.width
    }

    /// Playable squares in storage order.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (0..self.end() as i16)
            .filter(move |&i| self.is_playable(i))
            .map(|i| Square(i as u8))
    }
}

impl Square {
    pub const fn const_new(index: u8) -> Square {
        Square(index)
    }

    /// Transforms a row and a col to a Square. Row 0 is the top rank.
    pub fn from_row_col(row: u8, col: u8) -> Square {
        debug_assert!(row < MAX_SIDE && col < STRIDE);
        Square(row * STRIDE + col)
    }

    pub const fn to_row_col(self) -> (u8, u8) {
        (self.0 / STRIDE, self.0 % STRIDE)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The square at the same spot after rotating the board by 180 degrees.
    pub fn rotated(self, dims: Dimensions) -> Square {
        Square((dims.end() - 1 - self.index()) as u8)
    }

    /// Algebraic name, e.g. `d2`. Rank 1 is the bottom row of the board.
    pub fn algebraic(self, dims: Dimensions) -> String {
        let (row, col) = self.to_row_col();
        format!("{}{}", (b'a' + col) as char, dims.height - row)
    }

    /// Parses an algebraic square name such as `d2` on a board of the given size.
    pub fn from_algebraic(s: &str, dims: Dimensions) -> ChessResult<Square> {
        let err_closure = || -> ChessError { ChessError::InvalidSquare(s.to_string()) };
        let mut chars = s.chars();

        let file = chars.next().ok_or_else(err_closure)?;
        let rank = chars
            .next()
            .and_then(|r| r.to_digit(10))
            .ok_or_else(err_closure)?;

        if chars.next().is_some() || !file.is_ascii_lowercase() {
            return Err(err_closure());
        }
        let col = file as u8 - b'a';
        // rank 0 would underflow below
        if col >= dims.width || rank == 0 || rank > dims.height as u32 {
            return Err(err_closure());
        }
        Ok(Square::from_row_col(dims.height - rank as u8, col))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Square {
    fn from(u: u8) -> Self {
        debug_assert!((u as usize) < CAPACITY, "Invalid square: {}", u);
        Square(u)
    }
}

impl<T> ops::Index<Square> for [T; CAPACITY] {
    type Output = T;

    fn index(&self, index: Square) -> &T {
        &self[index.0 as usize]
    }
}

impl<T> ops::IndexMut<Square> for [T; CAPACITY] {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self[index.0 as usize]
    }
}
