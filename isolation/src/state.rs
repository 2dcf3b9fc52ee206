use crate::{Board, Cell, IllegalMove, Player, Position, BOARD_SIZE};

/// The complete state of one game round.
///
/// This is a plain value type: the grid plus both token positions, the
/// turn indicator, and which symbol the computer plays. It is `Copy` on
/// purpose, so that search probing can work on independent copies while
/// [`Self::apply_move()`] mutates in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) x_pos: Position,
    pub(crate) o_pos: Position,
    pub(crate) ai: Player,
    pub(crate) human: Player,
    pub(crate) turn: Player,
}

impl GameState {
    /// Sets up a fresh round: X in the top-left corner, O in the
    /// bottom-right one, every other square open.
    pub fn new(human: Player, first_to_move: Player) -> Self {
        let x_pos = Position { row: 0, col: 0 };
        let o_pos = Position {
            row: BOARD_SIZE - 1,
            col: BOARD_SIZE - 1,
        };
        let mut board = Board::empty();
        board.set(x_pos, Cell::Token(Player::X));
        board.set(o_pos, Cell::Token(Player::O));
        Self {
            board,
            x_pos,
            o_pos,
            ai: human.other(),
            human,
            turn: first_to_move,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn ai(&self) -> Player {
        self.ai
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn position_of(&self, player: Player) -> Position {
        match player {
            Player::X => self.x_pos,
            Player::O => self.o_pos,
        }
    }

    /// Checks whether `player` may move their token to `target`.
    ///
    /// A move is legal if the target lies on one of the eight straight or
    /// diagonal lines through the token, and every square from the token
    /// (exclusive) to the target (inclusive) is open. Distance along the
    /// line is unlimited.
    pub fn check_move(&self, player: Player, target: Position) -> Result<(), IllegalMove> {
        if !Board::is_in_bounds(target) {
            return Err(IllegalMove::OutOfBounds);
        }
        let from = self.position_of(player);
        if from == target {
            return Err(IllegalMove::SamePosition);
        }
        let d_row = target.row - from.row;
        let d_col = target.col - from.col;
        if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
            return Err(IllegalMove::NotAligned);
        }
        // Walk square by square towards the target. The starting square is
        // skipped: the token vacates it by this very move, so it can never
        // block itself.
        let step_row = d_row.signum();
        let step_col = d_col.signum();
        let mut cursor = from;
        while cursor != target {
            cursor = Position {
                row: cursor.row + step_row,
                col: cursor.col + step_col,
            };
            if !self.board.get(cursor).is_open() {
                return Err(IllegalMove::PathBlocked { at: cursor });
            }
        }
        Ok(())
    }

    pub fn is_legal(&self, player: Player, target: Position) -> bool {
        self.check_move(player, target).is_ok()
    }

    /// All squares `player` may move to, in row-major order.
    ///
    /// The order matters: the search breaks score ties by keeping the first
    /// candidate it has seen, so enumeration order decides which of several
    /// equally good moves the computer plays.
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        let mut list = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let target = Position { row, col };
                if self.is_legal(player, target) {
                    list.push(target);
                }
            }
        }
        list
    }

    /// Moves `player`'s token to `target`.
    ///
    /// The vacated square becomes [`Cell::Blocked`] for the rest of the
    /// game; squares are never reopened. On an illegal move nothing
    /// changes. The turn indicator is not touched either way, callers
    /// advance it with [`Self::end_turn()`] after a successful move.
    pub fn apply_move(&mut self, player: Player, target: Position) -> Result<(), IllegalMove> {
        self.check_move(player, target)?;
        let from = self.position_of(player);
        self.board.set(from, Cell::Blocked);
        self.board.set(target, Cell::Token(player));
        match player {
            Player::X => self.x_pos = target,
            Player::O => self.o_pos = target,
        }
        Ok(())
    }

    /// Passes the turn to the other player.
    pub fn end_turn(&mut self) {
        self.turn = self.turn.other();
    }

    /// The winner, if the game is over.
    ///
    /// The player whose turn it is loses the moment they have no legal
    /// move left; only the side to move is ever checked.
    pub fn winner(&self) -> Option<Player> {
        if self.legal_moves(self.turn).is_empty() {
            Some(self.turn.other())
        } else {
            None
        }
    }
}
