use crate::{GameState, Position};

/// Search depth in plies.
pub const MINIMAX_DEPTH: u32 = 8;

/// Mobility heuristic: how many moves the computer has available, minus how
/// many the human has. Higher is better for the computer. Whose turn it is
/// does not enter into the score.
pub fn evaluate(state: &GameState) -> i32 {
    let ai_moves = state.legal_moves(state.ai()).len() as i32;
    let human_moves = state.legal_moves(state.human()).len() as i32;
    ai_moves - human_moves
}

/// Picks the computer's move with a fixed-depth minimax search.
///
/// Returns `None` only when the computer has no legal move at all, a case
/// the caller should already have ruled out via [`GameState::winner()`].
pub fn best_move(state: &GameState) -> Option<Position> {
    let mut chosen = None;
    minimax(*state, MINIMAX_DEPTH, true, &mut chosen);
    chosen
}

// Plain minimax over the legal-move tree, no pruning. Every branch works on
// its own copy of the state, so sibling branches never observe each other's
// moves. Only a strictly better score replaces the incumbent, which makes
// the first best-scoring move in row-major order the winner of any tie.
fn minimax(state: GameState, depth: u32, maximizing: bool, chosen: &mut Option<Position>) -> i32 {
    if depth == 0 || state.winner().is_some() {
        return evaluate(&state);
    }
    if maximizing {
        let mut max_eval = i32::MIN;
        for target in state.legal_moves(state.ai()) {
            let mut child = state;
            let applied = child.apply_move(child.ai(), target);
            debug_assert!(applied.is_ok());
            child.end_turn();
            let eval = minimax(child, depth - 1, false, chosen);
            if eval > max_eval {
                max_eval = eval;
                // Only the root of the search records the candidate move
                if depth == MINIMAX_DEPTH {
                    *chosen = Some(target);
                }
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for target in state.legal_moves(state.human()) {
            let mut child = state;
            let applied = child.apply_move(child.human(), target);
            debug_assert!(applied.is_ok());
            child.end_turn();
            let eval = minimax(child, depth - 1, true, chosen);
            if eval < min_eval {
                min_eval = eval;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::board::pos;
    use crate::{Board, Cell, Player};

    fn endgame_state(
        x_pos: Position,
        o_pos: Position,
        open: &[Position],
        turn: Player,
    ) -> GameState {
        let mut board = Board::empty();
        for row in 0..crate::BOARD_SIZE {
            for col in 0..crate::BOARD_SIZE {
                board.set(Position { row, col }, Cell::Blocked);
            }
        }
        for &square in open {
            board.set(square, Cell::Open);
        }
        board.set(x_pos, Cell::Token(Player::X));
        board.set(o_pos, Cell::Token(Player::O));
        GameState {
            board,
            x_pos,
            o_pos,
            ai: Player::X,
            human: Player::O,
            turn,
        }
    }

    #[test]
    fn search_finds_the_trapping_move() {
        // X (computer) on a1, O on d1, only b1 and c1 open. Taking c1 seals
        // O in immediately; taking b1 instead lets O slip onto c1, after
        // which X is the one left without a move.
        let state = endgame_state(
            pos!("a1"),
            pos!("d1"),
            &[pos!("b1"), pos!("c1")],
            Player::X,
        );
        assert_eq!(best_move(&state), Some(pos!("c1")));
    }

    #[test]
    fn search_agrees_with_exhaustive_two_ply_scan() {
        // Small enough that the fixed-depth search exhausts the game tree,
        // so its choice must match a brute-force best-worst-case scan.
        let state = endgame_state(
            pos!("a1"),
            pos!("d1"),
            &[pos!("b1"), pos!("c1")],
            Player::X,
        );

        let mut brute_best: Option<(i32, Position)> = None;
        for target in state.legal_moves(Player::X) {
            let mut child = state;
            child.apply_move(Player::X, target).unwrap();
            child.end_turn();
            let replies = child.legal_moves(Player::O);
            let worst_case = if replies.is_empty() {
                evaluate(&child)
            } else {
                replies
                    .into_iter()
                    .map(|reply| {
                        let mut grandchild = child;
                        grandchild.apply_move(Player::O, reply).unwrap();
                        grandchild.end_turn();
                        evaluate(&grandchild)
                    })
                    .min()
                    .unwrap()
            };
            if brute_best.map_or(true, |(score, _)| worst_case > score) {
                brute_best = Some((worst_case, target));
            }
        }

        assert_eq!(best_move(&state), brute_best.map(|(_, target)| target));
    }

    #[test]
    fn search_returns_the_sole_legal_move() {
        let state = endgame_state(
            pos!("a1"),
            pos!("d4"),
            &[pos!("b1"), pos!("c4")],
            Player::X,
        );
        assert_eq!(state.legal_moves(Player::X), vec![pos!("b1")]);
        assert_eq!(best_move(&state), Some(pos!("b1")));
    }

    #[test]
    fn search_on_a_trapped_root_records_no_move() {
        let state = endgame_state(pos!("a1"), pos!("d4"), &[pos!("c4")], Player::X);
        assert_eq!(best_move(&state), None);
    }

    #[test]
    fn search_from_the_opening_position_is_deterministic() {
        let state = GameState::new(Player::O, Player::X);
        let first = best_move(&state);
        assert!(first.is_some());
        assert_eq!(first, best_move(&state));
    }

    quickcheck! {
        fn evaluate_negates_under_role_swap(state: GameState) -> bool {
            let swapped = GameState {
                ai: state.human,
                human: state.ai,
                ..state
            };
            evaluate(&swapped) == -evaluate(&state)
        }
    }
}
