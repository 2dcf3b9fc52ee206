use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: i8 = 4;

/// One of the two token symbols.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opposing symbol.
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A coordinate on the grid, 0-indexed.
///
/// `(0, 0)` is the top-left square, printed as `a1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
    }
}

/// The error type for the [`FromStr`] instance of [`Position`].
#[derive(Clone, Copy, Debug)]
pub enum PositionFromStrErr {
    LessThanTwoChars,
    MoreThanTwoChars,
    InvalidColumn,
    InvalidRow,
}

impl FromStr for Position {
    type Err = PositionFromStrErr;

    /// Parses algebraic notation like `c3` (column letter, then row number).
    ///
    /// Coordinates outside the grid (e.g. `h7`) still parse; the bounds
    /// check happens during move validation, together with every other
    /// way a move can be illegal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_char = chars.next().ok_or(PositionFromStrErr::LessThanTwoChars)?;
        let row_char = chars.next().ok_or(PositionFromStrErr::LessThanTwoChars)?;
        if chars.next().is_some() {
            return Err(PositionFromStrErr::MoreThanTwoChars);
        }
        if !col_char.is_ascii_lowercase() {
            return Err(PositionFromStrErr::InvalidColumn);
        }
        let row_digit = row_char.to_digit(10).ok_or(PositionFromStrErr::InvalidRow)?;
        if row_digit == 0 {
            return Err(PositionFromStrErr::InvalidRow);
        }
        Ok(Position {
            row: row_digit as i8 - 1,
            col: (col_char as u8 - b'a') as i8,
        })
    }
}

macro_rules! pos {
    ($rs:literal) => {
        <$crate::Position as std::str::FromStr>::from_str($rs)
            .expect("Invalid coordinate given to pos! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use pos;

/// One square of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Never held a token, or at least not yet.
    Open,
    /// Vacated by a token. Stays blocked for the rest of the game.
    Blocked,
    /// Currently holds this player's token.
    Token(Player),
}

impl Cell {
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }
}

/// The 4×4 grid of cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Open; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    pub fn is_in_bounds(pos: Position) -> bool {
        (0..BOARD_SIZE).contains(&pos.row) && (0..BOARD_SIZE).contains(&pos.col)
    }

    /// Returns the cell at `pos`, which must be in bounds.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_round_trip() {
        for (s, row, col) in [("a1", 0, 0), ("d4", 3, 3), ("c2", 1, 2)] {
            let pos: Position = s.parse().unwrap();
            assert_eq!(pos, Position { row, col });
            assert_eq!(pos.to_string(), s);
        }
    }

    #[test]
    fn position_parse_rejects_garbage() {
        assert!("".parse::<Position>().is_err());
        assert!("c".parse::<Position>().is_err());
        assert!("c10".parse::<Position>().is_err());
        assert!("3c".parse::<Position>().is_err());
        assert!("c0".parse::<Position>().is_err());
    }

    #[test]
    fn off_board_coordinates_parse_but_are_out_of_bounds() {
        let pos: Position = "h7".parse().unwrap();
        assert!(!Board::is_in_bounds(pos));
    }
}
