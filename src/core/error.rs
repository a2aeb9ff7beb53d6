//! Rejected inputs.
//!
//! Illegal actions are not failures: the controller refuses them and leaves
//! every piece of state untouched. The variant only tells the caller why, so
//! a UI can show a hint or simply ignore it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::Color;
use super::pawn::PawnId;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[error("an animation is still in flight")]
    Busy,
    #[error("the game is over")]
    GameOver,
    #[error("rolling is not allowed right now")]
    CannotRoll,
    #[error("no roll is waiting for a pawn selection")]
    NotAwaitingSelection,
    #[error("{0} does not exist")]
    UnknownPawn(PawnId),
    #[error("{pawn} does not belong to {current}")]
    NotYourPawn { pawn: PawnId, current: Color },
    #[error("{pawn} cannot move {dice}")]
    IllegalMove { pawn: PawnId, dice: u8 },
}
