use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use isolation::{Board, GameState, Player, Position};
use serde::Serialize;

/// Writes one numbered JSON file per finished game.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    moves: Vec<MoveRecord>,
}

#[derive(Serialize)]
struct MoveRecord {
    player: Player,
    target: Position,
}

#[derive(Serialize)]
struct GameRecord {
    winner: Player,
    moves: Vec<MoveRecord>,
    final_board: Board,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            moves: Vec::new(),
        })
    }

    pub fn store_move(&mut self, player: Player, target: Position) {
        self.moves.push(MoveRecord { player, target });
    }

    pub fn write_game_recording(
        &mut self,
        winner: Player,
        state: &GameState,
    ) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        let record = GameRecord {
            winner,
            moves: std::mem::take(&mut self.moves),
            final_board: *state.board(),
        };
        serde_json::to_writer_pretty(writer, &record)?;
        self.num += 1;
        Ok(())
    }
}
