use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use patchwork::{Command, Seat};
use serde::Serialize;

/// Writes one JSON file per game with every command that was played.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    moves: Vec<RecordedMove>,
}

#[derive(Serialize)]
struct RecordedMove {
    player: u8,
    command: Command,
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

    pub fn store_move(&mut self, seat: Seat, command: Command) {
        self.moves.push(RecordedMove {
            player: seat.number(),
            command,
        });
    }

    pub fn write_game_recording(&mut self) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(writer, &std::mem::take(&mut self.moves))?;
        self.num += 1;
        Ok(())
    }
}
