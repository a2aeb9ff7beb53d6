//! Read-only view of a session for rendering and bots.

use serde::{Deserialize, Serialize};

use crate::board::{pawn_coordinate, yard_coordinate, Coordinate, GeometryError, CENTER};
use crate::core::{Color, Pawn, PawnId, PawnState, Pawns, Phase};
use crate::rules::LegalPawns;

/// Owned copy of everything a renderer needs after a step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub pawns: Pawns,
    pub current: Color,
    pub current_color_index: usize,
    pub last_dice: Option<u8>,
    pub can_roll: bool,
    pub message: String,
    pub winners: Vec<Color>,
    pub phase: Phase,

    /// Pawns the current color may select; empty unless awaiting selection.
    pub legal_pawns: LegalPawns,

    pub turn_number: u32,

    /// Animation steps are still queued.
    pub busy: bool,
}

impl GameSnapshot {
    /// Get a pawn by ID.
    #[must_use]
    pub fn pawn(&self, id: PawnId) -> Option<&Pawn> {
        self.pawns.get(id.index())
    }

    /// Board coordinate of every pawn, in ID order.
    pub fn coordinates(&self) -> Result<Vec<(PawnId, Coordinate)>, GeometryError> {
        self.pawns
            .iter()
            .map(|pawn| Ok((pawn.id, render_coordinate(pawn)?)))
            .collect()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

/// Where a pawn is drawn: its yard slot, its track or column cell, or the center.
pub fn render_coordinate(pawn: &Pawn) -> Result<Coordinate, GeometryError> {
    match pawn.state {
        PawnState::AtHome => yard_coordinate(pawn.color, pawn.id.slot()),
        PawnState::OnTrack(position) => pawn_coordinate(pawn.color, position),
        PawnState::Finished => Ok(CENTER),
    }
}
