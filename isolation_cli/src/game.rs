use std::io::{BufRead, Write};

use isolation::{best_move, visualize_board, GameState, Player, Position};
use tracing::debug;

use crate::recording::Recorder;

/// Plays one round to completion and returns the winner.
pub fn play_game(state: &mut GameState, recorder: &mut Option<Recorder>) -> anyhow::Result<Player> {
    let winner = loop {
        if let Some(winner) = state.winner() {
            break winner;
        }
        println!("{}\n", visualize_board(state));

        let mover = state.turn();
        let target = if mover == state.human() {
            prompt_human_move(state)?
        } else {
            computer_move(state)?
        };
        if let Some(recorder) = recorder {
            recorder.store_move(mover, target);
        }
        state.end_turn();
    };

    println!("{}\n", visualize_board(state));
    if let Some(recorder) = recorder {
        recorder.write_game_recording(winner, state)?;
    }
    Ok(winner)
}

/// Asks for a move until the human enters one that parses and is legal,
/// then applies it.
fn prompt_human_move(state: &mut GameState) -> anyhow::Result<Position> {
    let mut stdin = std::io::stdin().lock();
    let mut buf = String::new();
    loop {
        print!("{} enter your move (eg c3): ", state.turn());
        std::io::stdout().flush()?;
        buf.clear();
        if stdin.read_line(&mut buf)? == 0 {
            anyhow::bail!("Unexpected end of input");
        }
        let target: Position = match buf.trim().parse() {
            Ok(target) => target,
            Err(_) => {
                println!("Enter a column letter followed by a row number, like c3");
                continue;
            }
        };
        match state.apply_move(state.human(), target) {
            Ok(()) => break Ok(target),
            Err(err) => println!("Illegal move: {}", err),
        }
    }
}

/// Runs the search and applies the move it picked.
fn computer_move(state: &mut GameState) -> anyhow::Result<Position> {
    // The game loop only reaches this point when the side to move has at
    // least one legal move, so the search always yields a candidate.
    let target = best_move(state)
        .ok_or_else(|| anyhow::anyhow!("Search produced no move for a non-terminal state"))?;
    debug!(target = %target, "Search finished");
    state.apply_move(state.ai(), target)?;
    println!("AI moved to {}", target);
    Ok(target)
}
