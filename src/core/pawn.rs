//! Pawn identification and state.
//!
//! Every pawn has a stable `PawnId` that is unique across the game.
//!
//! ## ID Layout
//!
//! IDs are allocated by seat:
//! - `0..4`: Red pawns
//! - `4..8`: Green pawns
//! - `8..12`: Yellow pawns
//! - `12..16`: Blue pawns
//!
//! so the owning color can be recovered from the ID alone.
//!
//! ```
//! use rust_ludo::core::{Color, PawnId};
//!
//! let pawn = PawnId::for_color(Color::Yellow, 2);
//! assert_eq!(pawn, PawnId(10));
//! assert_eq!(pawn.color(), Some(Color::Yellow));
//! assert_eq!(pawn.slot(), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::color::{Color, SEAT_COUNT};
use crate::board::{FINISH_POSITION, HOME_COLUMN_START};

/// Pawns owned by each color.
pub const PAWNS_PER_COLOR: usize = 4;

/// Total pawns in a game.
pub const PAWN_COUNT: usize = SEAT_COUNT * PAWNS_PER_COLOR;

/// Unique identifier for a pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PawnId(pub u8);

impl PawnId {
    /// Create a pawn ID from its raw value.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// ID of the `slot`-th pawn (0..4) of `color`.
    #[must_use]
    pub const fn for_color(color: Color, slot: u8) -> Self {
        Self(color as u8 * PAWNS_PER_COLOR as u8 + slot)
    }

    /// Raw index into the pawn table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Owning color, or `None` for an out-of-range ID.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        Color::from_index(self.0 as usize / PAWNS_PER_COLOR)
    }

    /// Position of this pawn within its color's set (0..4).
    #[must_use]
    pub const fn slot(self) -> u8 {
        self.0 % PAWNS_PER_COLOR as u8
    }

    /// Check if this ID refers to a pawn that exists.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < PAWN_COUNT
    }
}

impl std::fmt::Display for PawnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pawn({})", self.0)
    }
}

/// Where a pawn is in its journey.
///
/// The track position only exists while the pawn is on the track.
/// Positions are color-relative: `0..=50` is the shared track measured from
/// the color's entry cell, `51..=55` is the private home column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PawnState {
    #[default]
    AtHome,
    OnTrack(u8),
    Finished,
}

/// A single pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pawn {
    pub id: PawnId,
    pub color: Color,
    pub state: PawnState,
}

impl Pawn {
    /// Create a pawn in its yard.
    #[must_use]
    pub const fn new(color: Color, slot: u8) -> Self {
        Self {
            id: PawnId::for_color(color, slot),
            color,
            state: PawnState::AtHome,
        }
    }

    /// Track position if the pawn is on the track.
    #[must_use]
    pub const fn position(&self) -> Option<u8> {
        match self.state {
            PawnState::OnTrack(position) => Some(position),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_at_home(&self) -> bool {
        matches!(self.state, PawnState::AtHome)
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, PawnState::Finished)
    }

    /// On the shared track, where captures can happen.
    #[must_use]
    pub const fn is_on_shared_track(&self) -> bool {
        matches!(self.state, PawnState::OnTrack(p) if p < HOME_COLUMN_START)
    }

    /// Progress towards the center, 0 at home and `FINISH_POSITION + 1` when finished.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        match self.state {
            PawnState::AtHome => 0,
            PawnState::OnTrack(position) => position + 1,
            PawnState::Finished => FINISH_POSITION + 1,
        }
    }
}

/// The full set of pawns, indexed by `PawnId`.
pub type Pawns = [Pawn; PAWN_COUNT];

/// All 16 pawns in their yards.
#[must_use]
pub fn initial_pawns() -> Pawns {
    std::array::from_fn(|i| {
        let id = PawnId(i as u8);
        let color = id.color().unwrap_or(Color::Red);
        Pawn::new(color, id.slot())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_layout() {
        assert_eq!(PawnId::for_color(Color::Red, 0), PawnId(0));
        assert_eq!(PawnId::for_color(Color::Green, 0), PawnId(4));
        assert_eq!(PawnId::for_color(Color::Blue, 3), PawnId(15));
    }

    #[test]
    fn test_id_color_and_slot() {
        for color in Color::ALL {
            for slot in 0..PAWNS_PER_COLOR as u8 {
                let id = PawnId::for_color(color, slot);
                assert_eq!(id.color(), Some(color));
                assert_eq!(id.slot(), slot);
                assert!(id.is_valid());
            }
        }
    }

    #[test]
    fn test_out_of_range_id() {
        let id = PawnId(16);
        assert!(!id.is_valid());
        assert_eq!(id.color(), None);
    }

    #[test]
    fn test_initial_pawns() {
        let pawns = initial_pawns();

        assert_eq!(pawns.len(), 16);
        for (i, pawn) in pawns.iter().enumerate() {
            assert_eq!(pawn.id.index(), i);
            assert!(pawn.is_at_home());
            assert_eq!(pawn.position(), None);
        }
        assert_eq!(pawns.iter().filter(|p| p.color == Color::Green).count(), 4);
    }

    #[test]
    fn test_position_only_on_track() {
        let mut pawn = Pawn::new(Color::Red, 0);
        assert_eq!(pawn.position(), None);

        pawn.state = PawnState::OnTrack(12);
        assert_eq!(pawn.position(), Some(12));
        assert!(pawn.is_on_shared_track());

        pawn.state = PawnState::OnTrack(53);
        assert!(!pawn.is_on_shared_track());

        pawn.state = PawnState::Finished;
        assert_eq!(pawn.position(), None);
        assert!(pawn.is_finished());
    }

    #[test]
    fn test_progress_ordering() {
        let mut pawn = Pawn::new(Color::Blue, 1);
        let home = pawn.progress();
        pawn.state = PawnState::OnTrack(0);
        let entry = pawn.progress();
        pawn.state = PawnState::Finished;
        let done = pawn.progress();

        assert!(home < entry && entry < done);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PawnId(7)), "Pawn(7)");
    }

    #[test]
    fn test_serialization() {
        let pawn = Pawn {
            id: PawnId(5),
            color: Color::Green,
            state: PawnState::OnTrack(30),
        };
        let json = serde_json::to_string(&pawn).unwrap();
        let deserialized: Pawn = serde_json::from_str(&json).unwrap();
        assert_eq!(pawn, deserialized);
    }
}
