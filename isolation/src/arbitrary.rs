use quickcheck::{Arbitrary, Gen};

use crate::{Board, Cell, GameState, Player, Position, BOARD_SIZE};

impl Arbitrary for Player {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Player::X
        } else {
            Player::O
        }
    }
}

impl Arbitrary for Position {
    fn arbitrary(g: &mut Gen) -> Self {
        // Reaches one square beyond every board edge, so that properties
        // also exercise the bounds handling.
        Position {
            row: (u8::arbitrary(g) % 6) as i8 - 1,
            col: (u8::arbitrary(g) % 6) as i8 - 1,
        }
    }
}

fn in_bounds_position(g: &mut Gen) -> Position {
    Position {
        row: (u8::arbitrary(g) % BOARD_SIZE as u8) as i8,
        col: (u8::arbitrary(g) % BOARD_SIZE as u8) as i8,
    }
}

impl Arbitrary for GameState {
    fn arbitrary(g: &mut Gen) -> Self {
        let x_pos = in_bounds_position(g);
        // The tokens must occupy distinct squares
        let o_pos = loop {
            let square = in_bounds_position(g);
            if square != x_pos {
                break square;
            }
        };
        let mut board = Board::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let square = Position { row, col };
                if square != x_pos && square != o_pos && u8::arbitrary(g) % 3 == 0 {
                    board.set(square, Cell::Blocked);
                }
            }
        }
        board.set(x_pos, Cell::Token(Player::X));
        board.set(o_pos, Cell::Token(Player::O));
        let ai = Player::arbitrary(g);
        GameState {
            board,
            x_pos,
            o_pos,
            ai,
            human: ai.other(),
            turn: Player::arbitrary(g),
        }
    }
}
