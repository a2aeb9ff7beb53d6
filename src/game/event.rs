//! Events the controller emits for the renderer.
//!
//! Events are cues for sound and animation. They never carry authority: the
//! snapshot is the source of truth, and a renderer that drops every event
//! still shows the correct board after each step.

use serde::{Deserialize, Serialize};

use crate::core::{Color, PawnId};
use crate::rules::GameResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Cosmetic face shown while the die tumbles. Not a committed roll.
    DiceFlicker { color: Color, value: u8 },

    /// The committed roll.
    DiceSettled { color: Color, value: u8 },

    /// The committed roll has no legal pawn; the turn ends.
    NoMovesAvailable { color: Color, dice: u8 },

    PawnLeftHome { pawn: PawnId, color: Color },

    /// One cell of a pawn's walk, `position` is color-relative.
    PawnStepped { pawn: PawnId, color: Color, position: u8 },

    /// `pawn` was sent home by `by` on absolute cell `cell`.
    PawnCaptured { pawn: PawnId, color: Color, by: PawnId, cell: u8 },

    PawnFinished { pawn: PawnId, color: Color },

    /// `color` brought its last pawn home; `place` is 1-based.
    ColorWon { color: Color, place: usize },

    /// Same color rolls again.
    ExtraTurn { color: Color },

    TurnPassed { from: Color, to: Color },

    GameOver { result: GameResult },
}

impl GameEvent {
    /// Check if the event is purely decorative (dice tumbling, pawn walking).
    #[must_use]
    pub fn is_cosmetic(&self) -> bool {
        matches!(self, GameEvent::DiceFlicker { .. } | GameEvent::PawnStepped { .. })
    }
}
