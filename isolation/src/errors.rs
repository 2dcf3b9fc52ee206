use crate::Position;

/// The error type for [`GameState::apply_move()`](crate::GameState::apply_move)
/// and [`GameState::check_move()`](crate::GameState::check_move).
///
/// Every variant has the same consequence (the move is rejected and the
/// state is left untouched); the distinction only exists so that a caller
/// can tell the player why.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// The target is outside the 4×4 grid.
    OutOfBounds,
    /// The target is the square the token already stands on.
    SamePosition,
    /// The target is not on a straight or diagonal line from the token.
    NotAligned,
    /// Some square on the way to the target (or the target itself) is
    /// blocked or occupied.
    PathBlocked { at: Position },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds => {
                write!(f, "Target square is outside the board")
            }
            IllegalMove::SamePosition => {
                write!(f, "A token cannot stay on its own square")
            }
            IllegalMove::NotAligned => {
                write!(
                    f,
                    "Target square is not on a straight or diagonal line from the token"
                )
            }
            IllegalMove::PathBlocked { at } => {
                write!(f, "The way to the target is not free, {} is taken", at)
            }
        }
    }
}
