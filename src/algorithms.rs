use crate::boards::BoardState;
use crate::evaluation::{evaluate, Score};
use crate::movegen::generate;
use crate::moves::{Move, MoveArena};
use log::debug;
use std::time::Instant;

/// Search depth the engine plays with unless told otherwise.
pub const DEFAULT_DEPTH: u8 = 2;
const ARENA_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: Score,
    /// None at depth 0 (a leaf) and when the side to move has no move.
    pub best_move: Option<Move>,
}

/// Plain fixed-depth negamax, no pruning and no move ordering.
///
/// The moves of every frame live in `arena` between the frame's start mark
/// and the length after generation; children push above that and release
/// their part before returning, so the arena ends up as it was passed in.
/// The board is restored as well.
///
/// Among equally scored moves the one examined last wins. A node without
/// moves scores `Score::NO_MOVES`, but that value is no floor: when every
/// move scores below it, the node returns the real maximum.
pub fn negamax(board: &mut BoardState, arena: &mut MoveArena, depth: u8) -> SearchResult {
    if depth == 0 {
        return SearchResult {
            score: evaluate(board),
            best_move: None,
        };
    }

    let start = arena.mark();
    generate(board, arena);
    let end = arena.mark();

    let mut best: Option<(Move, Score)> = None;
    for i in start..end {
        let mv = arena.get(i);
        let captured = board.apply(mv);
        let score = -negamax(board, arena, depth - 1).score;
        board.undo(mv, captured);
        debug_assert_eq!(arena.mark(), end, "search frame leaked moves");

        if best.map_or(true, |(_, max)| score >= max) {
            best = Some((mv, score));
        }
    }
    arena.release(start);

    match best {
        Some((mv, score)) => SearchResult {
            score,
            best_move: Some(mv),
        },
        None => SearchResult {
            score: Score::NO_MOVES,
            best_move: None,
        },
    }
}

/// Runs negamax at a fixed depth, keeping its move arena between searches.
/// The depth is at least 1, so a move is found whenever there is one.
#[derive(Debug, Clone)]
pub struct Searcher {
    arena: MoveArena,
    depth: u8,
}

impl Searcher {
    pub fn new(depth: u8) -> Searcher {
        Searcher {
            arena: MoveArena::with_capacity(ARENA_CAPACITY),
            depth: depth.max(1),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Best move for the side to move and its score, None if it has no move.
    pub fn best_move(&mut self, board: &mut BoardState) -> Option<(Move, Score)> {
        let started = Instant::now();
        let result = negamax(board, &mut self.arena, self.depth);
        let dims = board.dims();
        debug!(
            "depth {} search: score {}, {:?} in {:?} (arena peak {})",
            self.depth,
            result.score,
            result.best_move.map(|mv| mv.to_algebraic(dims)),
            started.elapsed(),
            self.arena.high_water()
        );
        result.best_move.map(|mv| (mv, result.score))
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Searcher::new(DEFAULT_DEPTH)
    }
}

/// Depth 0 searches one ply, like `Searcher::new`.
pub fn search_best_move(board: &mut BoardState, depth: u8) -> Option<(Move, Score)> {
    Searcher::new(depth).best_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::legal_moves;
    use crate::positions::*;
    use crate::utils::random_walk;
    use crate::variants::Variant;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    // Reference search on cloned boards, no shared arena involved
    fn naive_negamax(board: &BoardState, depth: u8) -> Score {
        if depth == 0 {
            return evaluate(board);
        }
        legal_moves(board)
            .into_iter()
            .map(|mv| {
                let mut child = board.clone();
                child.apply(mv);
                -naive_negamax(&child, depth - 1)
            })
            .max()
            .unwrap_or(Score::NO_MOVES)
    }

    #[test]
    fn test_depth_zero_is_evaluation() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut arena = MoveArena::default();
        for v in Variant::all() {
            for mut b in random_walk(v, &mut rng, 20) {
                let res = negamax(&mut b, &mut arena, 0);
                assert_eq!(res.score, evaluate(&b));
                assert_eq!(res.best_move, None);
            }
        }
    }

    #[test]
    fn test_depth_one_bound() {
        let mut rng = SmallRng::seed_from_u64(6);
        let mut arena = MoveArena::default();
        for v in Variant::all() {
            for mut b in random_walk(v, &mut rng, 20) {
                let res = negamax(&mut b, &mut arena, 1);
                for mv in legal_moves(&b) {
                    let mut child = b.clone();
                    child.apply(mv);
                    assert!(res.score >= -evaluate(&child), "{:?}\n{:?}", mv, b);
                }
            }
        }
    }

    #[test]
    fn test_matches_naive_search() {
        let mut rng = SmallRng::seed_from_u64(8);
        let mut arena = MoveArena::default();
        for v in Variant::all() {
            for mut b in random_walk(v, &mut rng, 12) {
                for depth in 1..=2 {
                    let res = negamax(&mut b, &mut arena, depth);
                    assert_eq!(res.score, naive_negamax(&b, depth), "depth {}\n{:?}", depth, b);
                }
            }
        }
    }

    #[test]
    fn test_search_restores_board_and_arena() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut arena = MoveArena::default();
        let dummy = Move::new(Square::from(0), Square::from(8));
        arena.push(dummy);
        for v in Variant::all() {
            for mut b in random_walk(v, &mut rng, 15) {
                let prev_b = b.clone();
                negamax(&mut b, &mut arena, 2);
                assert_eq!(b, prev_b);
                assert_eq!(arena.since(0), &[dummy]);
            }
        }
    }

    #[test]
    fn test_ties_go_to_last_move() {
        let mut b = Variant::Six.setup();
        let (mv, score) = search_best_move(&mut b, 1).unwrap();
        assert_eq!(score, Score::ZERO);
        assert_eq!(mv, *legal_moves(&b).last().unwrap());
        assert_eq!(mv.to_algebraic(b.dims()), "e1f3");
    }

    #[test]
    fn test_takes_hanging_queen() {
        let dims = Dimensions::new(5, 5).unwrap();
        let mut b = BoardState::load("k4/5/q4/5/R3K", dims);
        let (mv, score) = search_best_move(&mut b, 2).unwrap();
        assert_eq!(mv.to_algebraic(dims), "a1a3");
        assert_eq!(score, Score(5));
    }

    #[test]
    fn test_no_moves() {
        let dims = Dimensions::new(6, 6).unwrap();
        let mut b = BoardState::load("k5/6/6/6/6/6", dims);
        assert_eq!(search_best_move(&mut b, 2), None);
        let res = negamax(&mut b, &mut MoveArena::default(), 1);
        assert_eq!(res.score, Score::NO_MOVES);
        assert_eq!(res.best_move, None);
    }

    #[test]
    fn test_depth_zero_still_finds_move() {
        let mut b = Variant::Six.setup();
        assert_eq!(Searcher::new(0).depth(), 1);
        assert_eq!(search_best_move(&mut b, 0), search_best_move(&mut b, 1));
        assert!(search_best_move(&mut b, 0).is_some());
    }

    #[test]
    fn test_lost_node_keeps_real_maximum() {
        // Every king move walks into the queen
        let dims = Dimensions::new(5, 5).unwrap();
        let mut b = BoardState::load("k4/5/1q3/5/K4", dims);
        assert_eq!(legal_moves(&b).len(), 3);
        let (mv, score) = search_best_move(&mut b, 2).unwrap();
        assert_eq!(score, Score(-1008));
        assert!(score < Score::NO_MOVES);
        assert_eq!(mv, *legal_moves(&b).last().unwrap());
    }

    #[test]
    fn test_searcher_reuses_arena() {
        let mut b = Variant::Five.setup();
        let mut searcher = Searcher::default();
        assert_eq!(searcher.depth(), DEFAULT_DEPTH);
        let first = searcher.best_move(&mut b);
        let second = searcher.best_move(&mut b);
        assert!(first.is_some());
        assert_eq!(first, second);
        assert!(searcher.arena.is_empty());
    }
}
