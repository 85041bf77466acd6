use patchwork::{visualize_board, visualize_track, Match, Seat, Variant};
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::recording::Recorder;
use crate::strategy::pick_command;

pub enum GameResult {
    WonBySeat(Seat),
    Tie,
}

// Generous: a full game needs well under a thousand commands.
const MAX_COMMANDS: usize = 10_000;

/// Plays one self-play game to the end.
///
/// Returns an error only if the strategy produces a command the engine
/// rejects, which would be a bug in the strategy.
pub fn play_game(
    rng: &mut StdRng,
    variant: Variant,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    let mut game = Match::new(variant, rng);

    let mut commands = 0usize;
    while !game.finished() {
        let seat = game.turn_holder();
        let command = pick_command(&game, seat, rng);
        trace!(player = seat.number(), ?command);
        if let Err(err) = game.apply(seat, command) {
            anyhow::bail!("strategy produced an illegal command: {err}");
        }
        if let Some(rec) = recorder {
            rec.store_move(seat, command);
        }
        commands += 1;
        if commands > MAX_COMMANDS {
            anyhow::bail!("game did not finish within {MAX_COMMANDS} commands");
        }
    }

    if let Some(rec) = recorder {
        rec.write_game_recording()?;
    }

    debug!(
        player_1 = game.player(Seat::One).score(),
        player_2 = game.player(Seat::Two).score(),
        "Final scores"
    );
    trace!(
        "Final state:\n{}\nPlayer 1 {}Player 2 {}",
        visualize_track(
            game.time_track(),
            [
                game.player(Seat::One).position(),
                game.player(Seat::Two).position(),
            ],
        ),
        visualize_board(game.player(Seat::One).board()),
        visualize_board(game.player(Seat::Two).board()),
    );
    Ok(match game.winner() {
        Some(seat) => GameResult::WonBySeat(seat),
        None => GameResult::Tie,
    })
}
