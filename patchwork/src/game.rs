use rand::rngs::StdRng;

use crate::{
    Command, IllegalCommand, MatchView, Patch, PatchQueue, Player, PlayerView, Seat, TimeTrack,
    VisiblePatch, BOARD_SIZE, BONUS_SQUARE, STARTING_BUTTONS, VISIBLE_PATCHES,
};

/// Which patch set a match is played with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Two patch kinds, 20 copies each.
    Short,
    /// The full 33-patch catalog.
    Standard,
}

#[derive(Clone, Copy, Debug)]
enum PendingSource {
    Queue { index: usize },
    Leather,
}

/// A patch the turn holder is still deciding where to put.
///
/// Ephemeral: created when a patch is chosen (or a leather patch comes due)
/// and discarded on commit. Never part of the persisted match state.
#[derive(Clone, Debug)]
pub struct PendingPlacement {
    source: PendingSource,
    patch: Patch,
    position: Option<(usize, usize)>,
}

impl PendingPlacement {
    /// The patch in its current orientation.
    pub fn patch(&self) -> &Patch {
        &self.patch
    }

    pub fn position(&self) -> Option<(usize, usize)> {
        self.position
    }

    /// Whether this is an owed leather patch rather than a bought one.
    pub fn is_leather(&self) -> bool {
        matches!(self.source, PendingSource::Leather)
    }
}

/// A complete two-player match: both players, the shared queue and track,
/// and the turn-holder state machine.
///
/// A match is an explicitly constructed context object; create one per game
/// session and drop it when the session ends.
#[derive(Clone, Debug)]
pub struct Match {
    players: [Player; 2],
    track: TimeTrack,
    queue: PatchQueue,
    holder: Seat,
    bonus_awarded: bool,
    pending: Option<PendingPlacement>,
}

impl Match {
    /// A fresh match of the given variant on the standard time track.
    pub fn new(variant: Variant, rng: &mut StdRng) -> Self {
        let queue = match variant {
            Variant::Short => PatchQueue::new_short(rng),
            Variant::Standard => PatchQueue::new_standard(rng),
        };
        Self::from_parts(queue, TimeTrack::standard())
    }

    /// A match over a custom patch catalog, shuffled, on the standard track.
    pub fn with_custom_catalog(patches: Vec<Patch>, rng: &mut StdRng) -> Self {
        Self::from_parts(PatchQueue::shuffled(patches, rng), TimeTrack::standard())
    }

    /// A match from an explicit queue and track, in the given order.
    pub fn from_parts(queue: PatchQueue, track: TimeTrack) -> Self {
        Self {
            players: [
                Player::new(1, BOARD_SIZE, STARTING_BUTTONS),
                Player::new(2, BOARD_SIZE, STARTING_BUTTONS),
            ],
            track,
            queue,
            holder: Seat::One,
            bonus_awarded: false,
            pending: None,
        }
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn time_track(&self) -> &TimeTrack {
        &self.track
    }

    pub fn queue(&self) -> &PatchQueue {
        &self.queue
    }

    /// The placement the turn holder is currently deciding on, if any.
    pub fn pending(&self) -> Option<&PendingPlacement> {
        self.pending.as_ref()
    }

    /// Whether the one-shot 7×7 bonus has been claimed by anyone.
    pub fn bonus_awarded(&self) -> bool {
        self.bonus_awarded
    }

    /// Who moves next.
    ///
    /// Resolved from the current positions on every call: the holder keeps
    /// the turn while they owe leather placements; otherwise the turn goes
    /// to the opponent as soon as the opponent is strictly behind.
    pub fn turn_holder(&self) -> Seat {
        let holder = self.holder;
        if self.player(holder).pending_leather_count() > 0 {
            return holder;
        }
        let opponent = holder.opponent();
        if self.player(opponent).position() < self.player(holder).position() {
            opponent
        } else {
            holder
        }
    }

    /// Whether both players stand on the final square with no leather owed.
    pub fn finished(&self) -> bool {
        self.players.iter().all(|p| {
            p.position() == self.track.len() - 1 && p.pending_leather_count() == 0
        })
    }

    /// The seat with the strictly higher score, or `None` on a tie.
    pub fn winner(&self) -> Option<Seat> {
        use std::cmp::Ordering;
        match self.players[0].score().cmp(&self.players[1].score()) {
            Ordering::Greater => Some(Seat::One),
            Ordering::Less => Some(Seat::Two),
            Ordering::Equal => None,
        }
    }

    /// Claims the match-wide 7×7 bonus. True exactly once, for the first
    /// caller; every later call returns false no matter who asks.
    pub fn award_bonus_once(&mut self) -> bool {
        if !self.bonus_awarded {
            self.bonus_awarded = true;
            true
        } else {
            false
        }
    }

    /// Validates and executes one command for `seat`.
    ///
    /// On rejection the match state is completely unchanged.
    pub fn apply(&mut self, seat: Seat, command: Command) -> Result<(), IllegalCommand> {
        if self.finished() {
            return Err(IllegalCommand::MatchFinished);
        }
        let holder = self.turn_holder();
        if seat != holder {
            return Err(IllegalCommand::NotYourTurn { seat });
        }
        self.holder = holder;

        match command {
            Command::ChoosePatch { index } => self.choose_patch(seat, index),
            Command::RotatePending => self.reorient_pending(Patch::rotate_clockwise),
            Command::FlipPending => self.reorient_pending(Patch::flip_horizontal),
            Command::SetPendingPosition { x, y } => self.set_pending_position(x, y),
            Command::CommitPending => self.commit_pending(seat),
            Command::EndTurn => self.end_turn(seat),
        }
    }

    /// Read-only snapshot of everything a renderer needs.
    pub fn snapshot(&self) -> MatchView {
        let holder = self.player(self.turn_holder());
        let visible_patches = (0..VISIBLE_PATCHES.min(self.queue.remaining()))
            .map(|k| {
                let patch = self.queue.visible(k).expect("visible patch disappeared");
                VisiblePatch {
                    affordable: holder.can_afford(patch),
                    placeable: holder.can_place(patch),
                    patch: patch.clone(),
                }
            })
            .collect();
        let finished = self.finished();
        MatchView {
            turn_holder: self.turn_holder(),
            finished,
            winner: if finished { self.winner() } else { None },
            track_length: self.track.len(),
            patches_remaining: self.queue.remaining(),
            visible_patches,
            players: [self.player_view(Seat::One), self.player_view(Seat::Two)],
        }
    }

    fn player_view(&self, seat: Seat) -> PlayerView {
        let player = self.player(seat);
        PlayerView {
            seat,
            buttons: player.buttons(),
            position: player.position(),
            button_income: player.button_income(),
            remaining_space: player.board().remaining_space(),
            pending_leather: player.pending_leather_count(),
            has_bonus: player.has_bonus(),
            score: player.score(),
            patches: player.board().patches().to_vec(),
        }
    }

    fn choose_patch(&mut self, seat: Seat, index: usize) -> Result<(), IllegalCommand> {
        let player = self.player(seat);
        if player.pending_leather_count() > 0 {
            return Err(IllegalCommand::LeatherOwed {
                count: player.pending_leather_count(),
            });
        }
        if self.pending.is_some() {
            return Err(IllegalCommand::UnresolvedPendingPatch);
        }
        if index >= VISIBLE_PATCHES {
            return Err(IllegalCommand::NoSuchPatch { index });
        }
        let Some(patch) = self.queue.visible(index) else {
            return Err(IllegalCommand::NotEnoughPatches {
                index,
                remaining: self.queue.remaining(),
            });
        };
        if !player.can_afford(patch) {
            return Err(IllegalCommand::CannotAfford {
                cost: patch.button_cost,
                buttons: player.buttons(),
            });
        }
        if !player.can_place(patch) {
            return Err(IllegalCommand::NoRoomOnBoard);
        }
        self.pending = Some(PendingPlacement {
            source: PendingSource::Queue { index },
            patch: patch.clone(),
            position: None,
        });
        Ok(())
    }

    fn reorient_pending(&mut self, transform: fn(&Patch) -> Patch) -> Result<(), IllegalCommand> {
        match &mut self.pending {
            Some(pending) => {
                pending.patch = transform(&pending.patch);
                Ok(())
            }
            None => Err(IllegalCommand::NoPendingPatch),
        }
    }

    fn set_pending_position(&mut self, x: usize, y: usize) -> Result<(), IllegalCommand> {
        match &mut self.pending {
            Some(pending) => {
                pending.position = Some((x, y));
                Ok(())
            }
            None => Err(IllegalCommand::NoPendingPatch),
        }
    }

    fn commit_pending(&mut self, seat: Seat) -> Result<(), IllegalCommand> {
        let Some(pending) = self.pending.as_ref() else {
            return Err(IllegalCommand::NoPendingPatch);
        };
        let Some((x, y)) = pending.position else {
            return Err(IllegalCommand::NoPositionChosen);
        };
        let idx = seat.index();
        if !self.players[idx].board().fits(&pending.patch, x, y) {
            return Err(IllegalCommand::DoesNotFit { x, y });
        }

        let pending = self.pending.take().expect("pending placement disappeared");
        match pending.source {
            PendingSource::Leather => {
                self.players[idx].place_leather(x, y);
            }
            PendingSource::Queue { index } => {
                // The queue still holds the original orientation; discard it
                // and commit the oriented copy.
                let _ = self.queue.take(index);
                self.players[idx].buy_and_place(pending.patch, x, y, &mut self.track);
            }
        }

        if self.players[idx].board().has_filled_bonus_square() && self.award_bonus_once() {
            self.players[idx].award_bonus();
        }
        self.refresh_pending_leather(seat);
        Ok(())
    }

    fn end_turn(&mut self, seat: Seat) -> Result<(), IllegalCommand> {
        let player = self.player(seat);
        if player.pending_leather_count() > 0 {
            return Err(IllegalCommand::LeatherOwed {
                count: player.pending_leather_count(),
            });
        }
        if self.pending.is_some() {
            return Err(IllegalCommand::UnresolvedPendingPatch);
        }
        let opponent_position = self.player(seat.opponent()).position();
        self.players[seat.index()].end_turn(opponent_position, &mut self.track);
        self.refresh_pending_leather(seat);
        Ok(())
    }

    /// Turns an owed leather patch into a pending placement the player must
    /// resolve. Owed leathers that can never be placed (full board) are
    /// dropped outright.
    fn refresh_pending_leather(&mut self, seat: Seat) {
        debug_assert!(self.pending.is_none());
        let player = &mut self.players[seat.index()];
        if player.pending_leather_count() == 0 {
            return;
        }
        if player.board().remaining_space() == 0 {
            player.forfeit_pending_leather();
            return;
        }
        self.pending = Some(PendingPlacement {
            source: PendingSource::Leather,
            patch: Patch::leather(),
            position: None,
        });
    }
}
