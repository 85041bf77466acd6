use serde::{Deserialize, Serialize};

use crate::{Patch, PatchCoord};

/// One of the two player slots of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// The display number of this seat's player.
    pub fn number(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// A command submitted by the presentation layer on behalf of one seat.
///
/// Commands are validated by [`Match::apply()`](crate::Match::apply); a
/// rejected command has no effect at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Start buying the patch at visible queue offset 0..=2.
    ChoosePatch { index: usize },
    /// Rotate the pending patch 90° clockwise.
    RotatePending,
    /// Mirror the pending patch along the vertical axis.
    FlipPending,
    /// Put the pending patch's top-left corner at `(x, y)`.
    SetPendingPosition { x: usize, y: usize },
    /// Commit the pending patch to the board at its chosen position.
    CommitPending,
    /// Pass, jumping one square past the opponent.
    EndTurn,
}

/// One visible queue entry, annotated for the current turn holder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VisiblePatch {
    pub patch: Patch,
    /// Whether the turn holder can pay the button cost.
    pub affordable: bool,
    /// Whether the patch fits somewhere on the turn holder's board,
    /// as currently oriented.
    pub placeable: bool,
}

/// Read-only view of one player.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: Seat,
    pub buttons: u32,
    pub position: usize,
    pub button_income: u32,
    pub remaining_space: u32,
    pub pending_leather: u32,
    pub has_bonus: bool,
    pub score: i32,
    /// Every committed patch, in placement order.
    pub patches: Vec<PatchCoord>,
}

/// Read-only snapshot of a whole match, for rendering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchView {
    pub turn_holder: Seat,
    pub finished: bool,
    /// `None` while the match runs, and on a tie.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub winner: Option<Seat>,
    pub track_length: usize,
    pub patches_remaining: usize,
    pub visible_patches: Vec<VisiblePatch>,
    pub players: [PlayerView; 2],
}
