use thiserror::Error;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------

/// Errors of the outer layers (loading, input, game loop). The engine core
/// itself never fails; "no legal move" is reported as `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChessError {
    #[error("unknown variant {0}, expected 4, 5 or 6")]
    UnknownVariant(u8),
    #[error("board of {width}x{height} does not fit into the 6x6 playing area")]
    InvalidDimensions { width: u8, height: u8 },
    #[error("invalid layout {layout:?}: {reason}")]
    InvalidLayout { layout: String, reason: String },
    #[error("invalid square {0:?}")]
    InvalidSquare(String),
    #[error("invalid move {0:?}")]
    InvalidMove(String),
    #[error("illegal move {0}")]
    IllegalMove(String),
    #[error("input error: {0}")]
    Input(String),
}

pub type ChessResult<T> = std::result::Result<T, ChessError>;

impl ChessError {
    pub(crate) fn layout(layout: &str, reason: impl Into<String>) -> ChessError {
        ChessError::InvalidLayout {
            layout: layout.to_string(),
            reason: reason.into(),
        }
    }
}
