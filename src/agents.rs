/// Differing kinds of agents that can play the game
use crate::algorithms::Searcher;
use crate::boards::BoardState;
use crate::chess_errors::*;
use crate::game::Agent;
use crate::movegen::legal_moves;
use crate::moves::Move;
use log::warn;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::{stdout, Write};
use text_io::try_read;

type TokenSource = Box<dyn FnMut() -> ChessResult<String>>;

/// Reads moves like `d2d3` from a token source, stdin by default. Asks
/// again until it gets a move that can be played.
pub struct HumanAgent {
    input: TokenSource,
}

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent::from_source(Box::new(|| {
            let token: Result<String, _> = try_read!();
            match token {
                // Whitespace is skipped, so nothing left means end of input
                Ok(t) if t.is_empty() => Err(ChessError::Input("end of input".to_string())),
                Ok(t) => Ok(t),
                Err(e) => Err(ChessError::Input(format!("{:?}", e))),
            }
        }))
    }

    pub fn from_source(input: TokenSource) -> Self {
        HumanAgent { input }
    }

    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: 'static,
    {
        let mut it = tokens.into_iter();
        HumanAgent::from_source(Box::new(move || {
            it.next()
                .ok_or_else(|| ChessError::Input("end of input".to_string()))
        }))
    }
}

impl Default for HumanAgent {
    fn default() -> Self {
        HumanAgent::new()
    }
}

impl Agent for HumanAgent {
    fn play_move(&mut self, board: &mut BoardState) -> ChessResult<Option<Move>> {
        let moves = legal_moves(board);
        if moves.is_empty() {
            return Ok(None);
        }
        let dims = board.dims();

        loop {
            print!("Your move: ");
            stdout()
                .flush()
                .map_err(|e| ChessError::Input(e.to_string()))?;
            let token = (self.input)()?;

            let parsed = Move::from_algebraic(&token, dims).and_then(|mv| {
                if moves.contains(&mv) {
                    Ok(mv)
                } else {
                    Err(ChessError::IllegalMove(mv.to_algebraic(dims)))
                }
            });
            match parsed {
                Ok(mv) => return Ok(Some(mv)),
                Err(e) => {
                    warn!("rejected input {:?}: {}", token, e);
                    println!("invalid move");
                }
            }
        }
    }
}

/// Plays the best move found by a fixed-depth negamax search.
pub struct EngineAgent {
    searcher: Searcher,
}

impl EngineAgent {
    pub fn new(depth: u8) -> Self {
        EngineAgent {
            searcher: Searcher::new(depth),
        }
    }
}

impl Agent for EngineAgent {
    fn play_move(&mut self, board: &mut BoardState) -> ChessResult<Option<Move>> {
        Ok(self.searcher.best_move(board).map(|(mv, _)| mv))
    }
}

/// Plays a uniformly random move. Seeded, so games can be replayed.
pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn play_move(&mut self, board: &mut BoardState) -> ChessResult<Option<Move>> {
        Ok(legal_moves(board).choose(&mut self.rng).copied())
    }
}
