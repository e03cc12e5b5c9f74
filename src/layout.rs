/// Checks layout strings before they are handed to `BoardState::load`,
/// which trusts its input.
use crate::boards::BoardState;
use crate::chess_errors::*;
use crate::pieces::Piece;
use crate::positions::Dimensions;

/// Validates a layout such as `kbnr/p3/4/3P/RNBK` against the board size.
/// Everything after the first whitespace is ignored, like `load` does.
pub fn validate_layout(layout: &str, dims: Dimensions) -> ChessResult<()> {
    let placement = layout.split_whitespace().next().unwrap_or("");
    let ranks: Vec<&str> = placement.split('/').collect();

    if ranks.len() != dims.height() as usize {
        return Err(ChessError::layout(
            layout,
            format!("expected {} ranks, found {}", dims.height(), ranks.len()),
        ));
    }

    for (row, rank) in ranks.iter().enumerate() {
        let mut width = 0u32;
        for c in rank.chars() {
            if let Some(run) = c.to_digit(10) {
                if run == 0 {
                    return Err(ChessError::layout(layout, "empty run of length 0"));
                }
                width += run;
            } else if Piece::from_symbol(c).is_some() {
                width += 1;
            } else {
                return Err(ChessError::layout(layout, format!("unknown piece {:?}", c)));
            }
        }
        if width != dims.width() as u32 {
            return Err(ChessError::layout(
                layout,
                format!(
                    "rank {} is {} cells wide, expected {}",
                    row + 1,
                    width,
                    dims.width()
                ),
            ));
        }
    }
    Ok(())
}

/// Validates and loads a layout on a board of `width` x `height`.
pub fn load_position(layout: &str, width: u8, height: u8) -> ChessResult<BoardState> {
    let dims = Dimensions::new(width, height)?;
    validate_layout(layout, dims)?;
    Ok(BoardState::load(layout, dims))
}
