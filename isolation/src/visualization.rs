use crate::{Cell, GameState, Position, BOARD_SIZE};

/// Renders the grid as text, with column letters on top and row numbers on
/// the left. Open squares print as `_`, blocked ones as `.`, and the
/// tokens as their symbol.
pub fn visualize_board(state: &GameState) -> String {
    let mut result = String::from(" ");
    for col in 0..BOARD_SIZE {
        result.push(' ');
        result.push((b'a' + col as u8) as char);
    }
    for row in 0..BOARD_SIZE {
        result.push('\n');
        result += &(row + 1).to_string();
        for col in 0..BOARD_SIZE {
            result.push(' ');
            result.push(match state.board().get(Position { row, col }) {
                Cell::Open => '_',
                Cell::Blocked => '.',
                Cell::Token(player) => player.as_char(),
            });
        }
    }
    result
}
