use crate::boards::*;
use crate::chess_errors::*;
use crate::evaluation::{evaluate, Score};
use crate::movegen::legal_moves;
use crate::moves::*;
use crate::pieces::Color;
use log::{debug, info};

/// Once the material balance leaves this margin a king has been taken.
pub const DECISIVE_MARGIN: i32 = 100;

/// An agent is an object that can play by choosing moves appropriate to the
/// current board.
pub trait Agent {
    /// Picks a move for the side to move, None if there is none. The board may
    /// be used as scratch space but must be handed back unchanged.
    fn play_move(&mut self, board: &mut BoardState) -> ChessResult<Option<Move>>;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn play_move(&mut self, board: &mut BoardState) -> ChessResult<Option<Move>> {
        (**self).play_move(board)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// `side` had no move left.
    NoMoves { side: Color, score: Score },
    /// A king has fallen.
    Decided { score: Score },
    TurnLimit { score: Score },
}

// All outcome scores are seen from White's side.
fn white_score(board: &BoardState) -> Score {
    let score = evaluate(board);
    match board.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}

pub struct Game<A1: Agent, A2: Agent> {
    white: A1,
    black: A2,
    board: BoardState,
    turn_limit: Option<u32>,
    turn_count: u32,
}

impl<A1: Agent, A2: Agent> Game<A1, A2> {
    pub fn new(board: BoardState, white: A1, black: A2) -> Game<A1, A2> {
        Game {
            white,
            black,
            board,
            turn_limit: None,
            turn_count: 0,
        }
    }

    /// Ends the game after `limit` moves (of either side).
    pub fn with_turn_limit(mut self, limit: Option<u32>) -> Self {
        self.turn_limit = limit;
        self
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Plays until one side is stuck, a king falls or the turn limit is hit.
    pub fn play(&mut self) -> ChessResult<GameOutcome> {
        info!("new {}x{} game", self.board.dims().width(), self.board.dims().height());
        println!("{}", self.board);

        loop {
            if let Some(outcome) = self.step()? {
                info!("game over after {} moves: {:?}", self.turn_count, outcome);
                return Ok(outcome);
            }
        }
    }

    /// Plays a single move. Returns the outcome if the game ended.
    pub fn step(&mut self) -> ChessResult<Option<GameOutcome>> {
        let score = white_score(&self.board);
        if self.turn_limit.map_or(false, |limit| self.turn_count >= limit) {
            return Ok(Some(GameOutcome::TurnLimit { score }));
        }

        let side = self.board.side_to_move();
        let legal = legal_moves(&self.board);
        let chosen = if legal.is_empty() {
            None
        } else {
            match side {
                Color::White => self.white.play_move(&mut self.board)?,
                Color::Black => self.black.play_move(&mut self.board)?,
            }
        };
        let mv = match chosen {
            Some(mv) => mv,
            None => {
                println!("GAME OVER: {}", score);
                return Ok(Some(GameOutcome::NoMoves { side, score }));
            }
        };

        let dims = self.board.dims();
        if !legal.contains(&mv) {
            return Err(ChessError::IllegalMove(mv.to_algebraic(dims)));
        }
        let captured = self.board.apply(mv);
        self.turn_count += 1;
        debug!("{} plays {}, captures {:?}", side, mv.to_algebraic(dims), captured);

        let score = white_score(&self.board);
        println!("{}: {} (eval {})", side, mv.to_algebraic(dims), score);
        println!("{}", self.board);

        if score.abs() > DECISIVE_MARGIN {
            println!("GAME OVER: {}", score);
            return Ok(Some(GameOutcome::Decided { score }));
        }
        Ok(None)
    }
}
