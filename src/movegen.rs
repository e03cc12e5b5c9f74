use crate::boards::BoardState;
use crate::moves::{Move, MoveArena};
use crate::pieces::*;

// Pawn offsets in view coordinates, where every side advances towards index 0.
const PAWN_CAPTURES: [i16; 2] = [-9, -7];
const PAWN_ADVANCE: i16 = -8;

// ---------------------------------------------
// Move generation
// ---------------------------------------------

/// Appends all moves of the side to move to the arena. Moves are only
/// possible due to piece movement rules, not necessarily legal (might leave
/// the king en prise).
///
/// The board is scanned through the mover's view (see `BoardState::view`),
/// so the same code serves both sides and produces the moves in the same
/// order as a scan of the physically flipped board would.
pub fn generate(board: &BoardState, arena: &mut MoveArena) {
    let side = board.side_to_move();
    let end = board.dims().end() as i16;

    for from in 0..end {
        let piece = match board.view(side, from) {
            Cell::Occupied(p) if p.color == side => p,
            _ => continue,
        };

        if piece.kind == PieceKind::Pawn {
            for &d in PAWN_CAPTURES.iter() {
                if let Cell::Occupied(target) = board.view(side, from + d) {
                    if target.color != side {
                        push(board, arena, from, from + d);
                    }
                }
            }
            if board.view(side, from + PAWN_ADVANCE).is_empty() {
                push(board, arena, from, from + PAWN_ADVANCE);
            }
            continue;
        }

        for &d in piece.kind.directions() {
            let mut to = from + d;
            for _ in 0..piece.kind.range() {
                match board.view(side, to) {
                    Cell::Empty => push(board, arena, from, to),
                    Cell::Occupied(target) if target.color != side => {
                        push(board, arena, from, to);
                        break;
                    }
                    // Own piece or edge of the board
                    _ => break,
                }
                to += d;
            }
        }
    }
}

fn push(board: &BoardState, arena: &mut MoveArena, from: i16, to: i16) {
    let side = board.side_to_move();
    arena.push(Move::new(
        board.view_to_square(side, from),
        board.view_to_square(side, to),
    ));
}

/// All moves of the side to move. An empty list means the side is stuck.
pub fn legal_moves(board: &BoardState) -> Vec<Move> {
    let mut arena = MoveArena::with_capacity(64);
    generate(board, &mut arena);
    arena.since(0).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves;
    use crate::positions::*;
    use crate::utils::random_walk;
    use crate::variants::Variant;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_start_moves() {
        let b = Variant::Six.setup();
        let dims = b.dims();
        let expected = moves!(dims;
            "a2a3", "b2b3", "c2c3", "d2d3", "e2e3", "f2f3",
            "b1a3", "b1c3", "e1d3", "e1f3"
        );
        let got: HashSet<Move> = legal_moves(&b).into_iter().collect();
        assert_eq!(got, expected.into_iter().collect());
    }

    #[test]
    fn test_narrow_board_moves() {
        let b = Variant::Four.setup();
        let dims = b.dims();
        let moves = legal_moves(&b);
        assert!(moves.contains(&Move::from_algebraic("d2d3", dims).unwrap()));
        for mv in &moves {
            assert!(b.cell(mv.from).piece().is_some(), "{:?} from empty square", mv);
        }
    }

    #[test]
    fn test_sliding_queen() {
        let dims = Dimensions::new(5, 5).unwrap();
        let b = BoardState::load("k4/5/2Q2/5/4K", dims);
        let queen = Square::from_algebraic("c3", dims).unwrap();
        let got: HashSet<Move> = legal_moves(&b)
            .into_iter()
            .filter(|mv| mv.from == queen)
            .collect();
        let expected = moves!(dims;
            "c3d4", "c3e5", "c3c4", "c3c5", "c3b4", "c3a5", "c3b3", "c3a3",
            "c3d3", "c3e3", "c3b2", "c3a1", "c3c2", "c3c1", "c3d2"
        );
        assert_eq!(got, expected.into_iter().collect());
    }

    #[test]
    fn test_pawn_rules() {
        let dims = Dimensions::new(5, 5).unwrap();
        // White pawn on c2 takes on b3 but can't advance into the knight
        let b = BoardState::load("4k/5/1pn2/2P2/K4", dims);
        let got: Vec<Move> = legal_moves(&b)
            .into_iter()
            .filter(|mv| b.cell(mv.from).piece().map(|p| p.kind) == Some(PieceKind::Pawn))
            .collect();
        assert_eq!(got, moves!(dims; "c2b3"));

        let mut b = BoardState::load("4k/5/1pn2/2P2/K4", dims);
        b.set_side_to_move(Color::Black);
        let got: Vec<Move> = legal_moves(&b)
            .into_iter()
            .filter(|mv| b.cell(mv.from).piece().map(|p| p.kind) == Some(PieceKind::Pawn))
            .collect();
        // Black pawn moves down the board and takes towards c2
        assert_eq!(got, moves!(dims; "b3c2", "b3b2"));
    }

    #[test]
    fn test_no_wrap_around() {
        let dims = Dimensions::new(6, 6).unwrap();
        let b = BoardState::load("6/6/R4k/6/6/K5", dims);
        let rook = Square::from_algebraic("a4", dims).unwrap();
        let dests: HashSet<String> = legal_moves(&b)
            .into_iter()
            .filter(|mv| mv.from == rook)
            .map(|mv| mv.to.algebraic(dims))
            .collect();
        let expected: HashSet<String> = [
            "a5", "a6", "a3", "a2", "b4", "c4", "d4", "e4", "f4",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(dests, expected);
    }

    #[test]
    fn test_moves_are_pseudo_legal() {
        let mut rng = SmallRng::seed_from_u64(42);
        for v in Variant::all() {
            for b in random_walk(v, &mut rng, 40) {
                let side = b.side_to_move();
                let dims = b.dims();
                for mv in legal_moves(&b) {
                    assert!(dims.is_playable(mv.to.index() as i16), "{:?}\n{:?}", mv, b);
                    assert_eq!(b.cell(mv.from).piece().map(|p| p.color), Some(side));
                    match b.cell(mv.to) {
                        Cell::Empty => (),
                        Cell::Occupied(p) => assert_ne!(p.color, side, "{:?}\n{:?}", mv, b),
                        Cell::OffBoard => panic!("{:?} leaves the board", mv),
                    }
                }
            }
        }
    }

    #[test]
    fn test_black_moves_match_flipped_board() {
        let mut rng = SmallRng::seed_from_u64(3);
        for v in Variant::all() {
            for b in random_walk(v, &mut rng, 20) {
                let dims = b.dims();
                let mut flipped = b.clone();
                flipped.flip_sides();

                // The army to move on `flipped` is the one waiting on `b`
                let mut waiting = b.clone();
                waiting.set_side_to_move(b.side_to_move().opposite());

                let mapped: Vec<Move> = legal_moves(&flipped)
                    .into_iter()
                    .map(|mv| Move::new(mv.from.rotated(dims), mv.to.rotated(dims)))
                    .collect();
                assert_eq!(legal_moves(&waiting), mapped, "\n{:?}", b);
            }
        }
    }
}
