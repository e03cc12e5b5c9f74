use crate::moves::Move;
use crate::pieces::*;
use crate::positions::*;
use array_init::array_init;
use std::fmt::{self, Display};

// ---------------------------------------------
// Board State
// ---------------------------------------------

/// Mailbox board with sentinel padding. Created once per game and mutated in
/// place through `apply` and `undo`.
#[derive(Clone, PartialEq, Eq)]
pub struct BoardState {
    cells: [Cell; CAPACITY],
    dims: Dimensions,
    side_to_move: Color,
}

impl BoardState {
    /// A board without pieces. Cells outside the playing area hold `OffBoard`.
    pub fn empty(dims: Dimensions) -> BoardState {
        BoardState {
            cells: array_init(|i| {
                if dims.is_playable(i as i16) {
                    Cell::Empty
                } else {
                    Cell::OffBoard
                }
            }),
            dims,
            side_to_move: Color::White,
        }
    }

    /// Parses a layout like `kbnr/p3/4/3P/RNBK`. Uppercase pieces are White,
    /// White moves first. Assumes the layout is well formed; unknown
    /// characters are skipped and pieces outside the board are dropped.
    /// Parsing stops at the first whitespace.
    pub fn load(layout: &str, dims: Dimensions) -> BoardState {
        let mut board = BoardState::empty(dims);
        let stride = STRIDE as usize;
        let mut i = 0usize;

        for c in layout.chars().take_while(|c| !c.is_whitespace()) {
            if c == '/' {
                i = (i / stride + 1) * stride;
            } else if let Some(run) = c.to_digit(10) {
                i += run as usize;
            } else if let Some(piece) = Piece::from_symbol(c) {
                if i < CAPACITY && dims.is_playable(i as i16) {
                    board.cells[i] = Cell::Occupied(piece);
                }
                i += 1;
            }
        }
        board
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, side: Color) {
        self.side_to_move = side;
    }

    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq]
    }

    /// All pieces on the board with their squares, in storage order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.dims
            .squares()
            .filter_map(move |sq| self.cells[sq].piece().map(|p| (sq, p)))
    }

    /// Moves a piece and passes the turn. Returns the piece that stood on the
    /// target square, which `undo` needs to restore the board. Does NOT check
    /// whether the move is legal.
    pub fn apply(&mut self, mv: Move) -> Option<Piece> {
        debug_assert!(self.cells[mv.from].piece().is_some(), "{:?} from empty square", mv);
        let captured = self.cells[mv.to].piece();
        self.cells[mv.to] = self.cells[mv.from];
        self.cells[mv.from] = Cell::Empty;
        self.side_to_move = self.side_to_move.opposite();
        captured
    }

    /// Reverse operation to `apply`. Undos must come in the reverse order of
    /// the applies they revert.
    pub fn undo(&mut self, mv: Move, captured: Option<Piece>) {
        self.side_to_move = self.side_to_move.opposite();
        self.cells[mv.from] = self.cells[mv.to];
        self.cells[mv.to] = captured.into();
    }

    /// Rotates the playing area by 180 degrees and swaps the colors of all
    /// pieces. The side to move is kept, so the other army is now to move and
    /// sees the board from its own side. Applying it twice is the identity.
    pub fn flip_sides(&mut self) {
        let end = self.dims.end();
        let recolor = |c: Cell| match c {
            Cell::Occupied(p) => Cell::Occupied(p.recolored()),
            other => other,
        };
        for i in 0..(end + 1) / 2 {
            let j = end - 1 - i;
            let (a, b) = (self.cells[i], self.cells[j]);
            self.cells[i] = recolor(b);
            self.cells[j] = recolor(a);
        }
    }

    /// Reads a cell through the eyes of `side`. White sees the storage as
    /// is, Black sees it rotated by 180 degrees, so both advance their pawns
    /// towards index 0. Anything outside `0..E` reads as `OffBoard`.
    pub(crate) fn view(&self, side: Color, index: i16) -> Cell {
        if index < 0 || index as usize >= self.dims.end() {
            return Cell::OffBoard;
        }
        self.cells[self.view_to_square(side, index)]
    }

    /// Storage square behind a view index in `0..E`.
    pub(crate) fn view_to_square(&self, side: Color, index: i16) -> Square {
        let sq = Square::from(index as u8);
        match side {
            Color::White => sq,
            Color::Black => sq.rotated(self.dims),
        }
    }
}

impl Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files = || (0..self.dims.width()).map(|c| (b'a' + c) as char);

        write!(f, " ")?;
        for c in files() {
            write!(f, " {}", c)?;
        }
        for row in 0..self.dims.height() {
            write!(f, "\n{} ", self.dims.height() - row)?;
            for col in 0..self.dims.width() {
                write!(f, "{} ", self.cells[Square::from_row_col(row, col)])?;
            }
            write!(f, "{}", self.dims.height() - row)?;
        }
        write!(f, "\n ")?;
        for c in files() {
            write!(f, " {}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "To move: {}", self.side_to_move)?;
        write!(f, "{}", self)
    }
}
