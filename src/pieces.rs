use std::fmt::{self, Display};

// ---------------------------------------------
// Pieces
// ---------------------------------------------

/// Maximum number of steps a sliding piece can take in one direction.
pub const MAX_SLIDE: usize = 6;

// Step offsets on the 8-column storage: +1/-1 horizontal, +8/-8 vertical,
// -7/-9/+7/+9 diagonal. Order matters, it fixes the move generation order.
const KNIGHT_DIRECTIONS: [i16; 8] = [-17, -15, -6, -10, 6, 10, 15, 17];
const KING_DIRECTIONS: [i16; 8] = [-7, -8, -9, -1, 1, 7, 8, 9];
const BISHOP_DIRECTIONS: [i16; 4] = [-7, -9, 7, 9];
const ROOK_DIRECTIONS: [i16; 4] = [-8, -1, 1, 8];
const QUEEN_DIRECTIONS: [i16; 8] = [-7, -8, -9, -1, 1, 7, 8, 9];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    King,
    Bishop,
    Rook,
    Queen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl PieceKind {
    /// Material value used by the evaluator.
    pub fn value(self) -> i32 {
        use PieceKind::*;
        match self {
            Pawn => 1,
            Knight | Bishop => 3,
            Rook => 5,
            Queen => 9,
            King => 999,
        }
    }

    /// Sliding pieces keep going along a direction until blocked.
    pub fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Number of steps the piece may take along one of its directions.
    pub fn range(self) -> usize {
        if self.is_sliding() {
            MAX_SLIDE
        } else {
            1
        }
    }

    /// Direction table of the piece. Pawns have their own rules and
    /// no entry here.
    pub fn directions(self) -> &'static [i16] {
        use PieceKind::*;
        match self {
            Pawn => &[],
            Knight => &KNIGHT_DIRECTIONS,
            King => &KING_DIRECTIONS,
            Bishop => &BISHOP_DIRECTIONS,
            Rook => &ROOK_DIRECTIONS,
            Queen => &QUEEN_DIRECTIONS,
        }
    }

    fn symbol(self) -> char {
        use PieceKind::*;
        match self {
            Pawn => 'P',
            Knight => 'N',
            King => 'K',
            Bishop => 'B',
            Rook => 'R',
            Queen => 'Q',
        }
    }
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Layout symbol: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        let c = self.kind.symbol();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Inverse of `symbol`. Returns None for characters outside `PNKBRQ`
    /// (in either case).
    pub fn from_symbol(c: char) -> Option<Piece> {
        use PieceKind::*;
        let kind = match c.to_ascii_uppercase() {
            'P' => Pawn,
            'N' => Knight,
            'K' => King,
            'B' => Bishop,
            'R' => Rook,
            'Q' => Queen,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Same piece, other army.
    pub fn recolored(self) -> Piece {
        Piece::new(self.kind, self.color.opposite())
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of one storage cell. `OffBoard` marks the padding columns and
/// rows, so stepping pieces stop at the edge without coordinate checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    OffBoard,
    Occupied(Piece),
}

impl Cell {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Piece>> for Cell {
    fn from(p: Option<Piece>) -> Self {
        match p {
            Some(p) => Cell::Occupied(p),
            None => Cell::Empty,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Occupied(p) => write!(f, "{}", p),
            Cell::Empty => write!(f, "."),
            Cell::OffBoard => write!(f, " "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        for c in "PNKBRQpnkbrq".chars() {
            assert_eq!(Piece::from_symbol(c).unwrap().symbol(), c);
        }
        assert_eq!(
            Piece::from_symbol('q'),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(Piece::from_symbol('x'), None);
        assert_eq!(Piece::from_symbol('3'), None);
    }

    #[test]
    fn test_sliding() {
        assert!(!PieceKind::Pawn.is_sliding());
        assert!(!PieceKind::Knight.is_sliding());
        assert!(!PieceKind::King.is_sliding());
        assert_eq!(PieceKind::King.range(), 1);
        assert_eq!(PieceKind::Rook.range(), MAX_SLIDE);
        assert!(PieceKind::Pawn.directions().is_empty());
        assert_eq!(PieceKind::Queen.directions(), PieceKind::King.directions());
    }

    #[test]
    fn test_recolor() {
        let p = Piece::new(PieceKind::Rook, Color::White);
        assert_eq!(p.recolored().color, Color::Black);
        assert_eq!(p.recolored().recolored(), p);
    }
}
