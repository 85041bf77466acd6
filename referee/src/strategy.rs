use patchwork::{Command, Match, Seat, VISIBLE_PATCHES};
use rand::rngs::StdRng;
use rand::Rng;

/// Picks the next command for `seat`: resolve any pending placement at the
/// board's first-fit position, otherwise buy a random affordable and
/// placeable visible patch, otherwise pass.
pub fn pick_command(game: &Match, seat: Seat, rng: &mut StdRng) -> Command {
    if let Some(pending) = game.pending() {
        return match pending.position() {
            Some(_) => Command::CommitPending,
            None => {
                let (x, y) = game
                    .player(seat)
                    .board()
                    .find_first_fit(pending.patch())
                    .expect("pending patch fits nowhere");
                Command::SetPendingPosition { x, y }
            }
        };
    }

    let player = game.player(seat);
    let buyable: Vec<usize> = (0..VISIBLE_PATCHES.min(game.queue().remaining()))
        .filter(|&k| {
            let patch = game.queue().visible(k).expect("visible patch disappeared");
            player.can_afford(patch) && player.can_place(patch)
        })
        .collect();

    if buyable.is_empty() {
        Command::EndTurn
    } else {
        Command::ChoosePatch {
            index: buyable[rng.gen_range(0..buyable.len())],
        }
    }
}
