// For testing purposes: Easily creates a list of moves from their algebraic
// notation on a board of the given dimensions.
#[macro_export]
macro_rules! moves {
    ( $dims:expr; $( $x:expr ),* ) => {
        {
            #[allow(unused_mut)]
            let mut base: Vec<$crate::moves::Move> = Vec::new();
            $(
                base.push($crate::moves::Move::from_algebraic($x, $dims).unwrap());
            )*
            base
        }
    };
}

/// Plays up to `plies` random moves from the starting position of the
/// variant and returns every position on the way, the start included.
/// Stops early when the side to move is stuck.
#[cfg(test)]
pub fn random_walk(
    variant: crate::variants::Variant,
    rng: &mut impl rand::Rng,
    plies: usize,
) -> Vec<crate::boards::BoardState> {
    use crate::movegen::legal_moves;
    use rand::seq::SliceRandom;

    let mut board = variant.setup();
    let mut res = vec![board.clone()];
    for _ in 0..plies {
        let moves = legal_moves(&board);
        match moves.choose(rng) {
            Some(&mv) => {
                board.apply(mv);
                res.push(board.clone());
            }
            None => break,
        }
    }
    res
}
