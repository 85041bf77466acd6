use crate::Seat;

/// The error type for [`Match::apply()`](crate::Match::apply), i.e. for one
/// player command.
///
/// A rejected command leaves the whole match untouched; the caller fixes the
/// command and submits again. Caller bugs (committing an unchecked patch,
/// overspending buttons) are panics instead, never values of this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalCommand {
    NotYourTurn { seat: Seat },
    NoSuchPatch { index: usize },
    NotEnoughPatches { index: usize, remaining: usize },
    CannotAfford { cost: u32, buttons: u32 },
    NoRoomOnBoard,
    DoesNotFit { x: usize, y: usize },
    LeatherOwed { count: u32 },
    NoPendingPatch,
    NoPositionChosen,
    UnresolvedPendingPatch,
    MatchFinished,
}

impl std::error::Error for IllegalCommand {}

impl std::fmt::Display for IllegalCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalCommand::NotYourTurn { seat } =>
                write!(f, "It is not player {}'s turn", seat.number()),
            IllegalCommand::NoSuchPatch { index } =>
                write!(f, "Patch {} was chosen, but only the first 3 patches of the queue are buyable", index),
            IllegalCommand::NotEnoughPatches { index, remaining } =>
                write!(f, "Patch {} was chosen, but only {} patch(es) remain in the queue", index, remaining),
            IllegalCommand::CannotAfford { cost, buttons } =>
                write!(f, "The chosen patch costs {} buttons, but the player only has {}", cost, buttons),
            IllegalCommand::NoRoomOnBoard =>
                write!(f, "The chosen patch fits nowhere on the player's quilt board"),
            IllegalCommand::DoesNotFit { x, y } =>
                write!(f, "The pending patch does not fit at position ({}, {})", x, y),
            IllegalCommand::LeatherOwed { count } =>
                write!(f, "The player still owes {} leather patch(es) and must place them first", count),
            IllegalCommand::NoPendingPatch =>
                write!(f, "There is no pending patch to act on"),
            IllegalCommand::NoPositionChosen =>
                write!(f, "The pending patch has no position yet"),
            IllegalCommand::UnresolvedPendingPatch =>
                write!(f, "A pending patch must be committed before doing anything else"),
            IllegalCommand::MatchFinished =>
                write!(f, "The match is already finished"),
        }
    }
}
