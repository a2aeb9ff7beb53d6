//! Player inputs and their history.
//!
//! A Ludo turn is driven by exactly two kinds of input: asking for a roll and
//! picking a pawn. Bots and humans submit the same `Action`s, and every
//! accepted action is recorded as an `ActionRecord` so a game can be replayed
//! from its seed.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::pawn::PawnId;

/// A player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll the die.
    Roll,
    /// Move the given pawn by the committed roll.
    Select(PawnId),
}

impl Action {
    /// The selected pawn, if this is a selection.
    #[must_use]
    pub fn pawn(&self) -> Option<PawnId> {
        match self {
            Action::Roll => None,
            Action::Select(pawn) => Some(*pawn),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Roll => f.write_str("roll"),
            Action::Select(pawn) => write!(f, "select {pawn}"),
        }
    }
}

/// An accepted action with metadata.
///
/// Used for:
/// - Deterministic replay
/// - Debugging and logging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The color that acted.
    pub color: Color,

    /// The action taken.
    pub action: Action,

    /// Committed roll after the action, if any. For `Roll` this is the
    /// settled value; for `Select` it is the value the pawn moved by.
    pub dice: Option<u8>,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number across the whole game.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(color: Color, action: Action, dice: Option<u8>, turn: u32, sequence: u32) -> Self {
        Self {
            color,
            action,
            dice,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_pawn() {
        assert_eq!(Action::Roll.pawn(), None);
        assert_eq!(Action::Select(PawnId(3)).pawn(), Some(PawnId(3)));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Roll.to_string(), "roll");
        assert_eq!(Action::Select(PawnId(9)).to_string(), "select Pawn(9)");
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Color::Blue, Action::Select(PawnId(12)), Some(4), 7, 21);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
