//! Game state: pawns, turn record and action history.
//!
//! ## TurnState
//!
//! Whose turn it is and where that turn stands:
//! - Current color, committed roll, roll permission
//! - Pending extra turn and finishing order
//! - Controller phase and turn counter
//!
//! ## GameState
//!
//! Complete game state:
//! - All 16 pawns
//! - Turn state
//! - Action history (persistent vector, O(1) clone)

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ActionRecord};
use super::color::{Color, ColorMap};
use super::pawn::{initial_pawns, Pawn, PawnId, Pawns, PAWNS_PER_COLOR};
use crate::board::absolute_track_index;

/// Controller phase.
///
/// The turn-ended transition is instantaneous; it is reported through
/// events rather than as a resting phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    AwaitingRoll,
    Rolling,
    AwaitingSelection,
    Resolving,
    GameOver,
}

impl Phase {
    /// Phases in which queued animation steps are still running.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Phase::Rolling | Phase::Resolving)
    }
}

/// Turn record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Color to move.
    pub current: Color,

    /// Committed roll for the current turn, cleared when the turn ends.
    pub last_dice: Option<u8>,

    /// Whether `current` may roll now.
    pub can_roll: bool,

    /// Set while a resolved move has earned the current color another roll.
    pub pending_extra_turn: bool,

    /// Colors that finished all pawns, in finishing order.
    pub winners: Vec<Color>,

    pub phase: Phase,

    /// Turn number (starts at 1, counts seat changes).
    pub turn_number: u32,
}

impl TurnState {
    /// Red to roll, nobody finished.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Color::Red,
            last_dice: None,
            can_roll: true,
            pending_extra_turn: false,
            winners: Vec::new(),
            phase: Phase::AwaitingRoll,
            turn_number: 1,
        }
    }

    /// Seat index of the color to move (0..4).
    #[must_use]
    pub fn current_color_index(&self) -> usize {
        self.current.index()
    }

    /// Check if a color already finished.
    #[must_use]
    pub fn has_finished(&self, color: Color) -> bool {
        self.winners.contains(&color)
    }

    /// Hand the turn to `color`, ready to roll.
    pub fn pass_to(&mut self, color: Color) {
        self.current = color;
        self.turn_number += 1;
        self.last_dice = None;
        self.can_roll = true;
        self.pending_extra_turn = false;
        self.phase = Phase::AwaitingRoll;
    }

    /// Let the current color roll again.
    pub fn grant_extra_turn(&mut self) {
        self.last_dice = None;
        self.can_roll = true;
        self.pending_extra_turn = false;
        self.phase = Phase::AwaitingRoll;
    }

    /// End the session.
    pub fn end_game(&mut self) {
        self.can_roll = false;
        self.pending_extra_turn = false;
        self.phase = Phase::GameOver;
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pawns sharing an absolute track cell.
pub type CellOccupants = SmallVec<[PawnId; PAWNS_PER_COLOR]>;

/// Pawns on the shared track grouped by absolute cell.
///
/// Yard, home-column and finished pawns are absent; they cannot be captured.
#[must_use]
pub fn track_occupancy(pawns: &Pawns) -> FxHashMap<u8, CellOccupants> {
    let mut cells: FxHashMap<u8, CellOccupants> = FxHashMap::default();
    for pawn in pawns.iter().filter(|p| p.is_on_shared_track()) {
        if let Some(cell) = pawn
            .position()
            .and_then(|pos| absolute_track_index(pawn.color, pos).ok())
        {
            cells.entry(cell).or_default().push(pawn.id);
        }
    }
    cells
}

/// Full game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// All pawns, indexed by `PawnId`.
    pub pawns: Pawns,

    pub turn: TurnState,

    /// Accepted actions in order.
    pub history: Vector<ActionRecord>,

    next_sequence: u32,
}

impl GameState {
    /// Fresh game: every pawn at home, Red to roll.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pawns: initial_pawns(),
            turn: TurnState::new(),
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    // === Pawns ===

    /// Get a pawn by ID.
    #[must_use]
    pub fn pawn(&self, id: PawnId) -> Option<&Pawn> {
        self.pawns.get(id.index())
    }

    /// Pawns of one color, in slot order.
    pub fn pawns_of(&self, color: Color) -> impl Iterator<Item = &Pawn> {
        let start = color.index() * PAWNS_PER_COLOR;
        self.pawns[start..start + PAWNS_PER_COLOR].iter()
    }

    /// Number of a color's pawns that reached the center.
    #[must_use]
    pub fn finished_count(&self, color: Color) -> usize {
        self.pawns_of(color).filter(|p| p.is_finished()).count()
    }

    /// Finished pawn counts for every color.
    #[must_use]
    pub fn finished_counts(&self) -> ColorMap<usize> {
        ColorMap::new(|color| self.finished_count(color))
    }

    /// A color has won iff all of its pawns are finished.
    #[must_use]
    pub fn has_won(&self, color: Color) -> bool {
        self.finished_count(color) == PAWNS_PER_COLOR
    }

    /// Pawns on the shared track grouped by absolute cell.
    #[must_use]
    pub fn occupancy(&self) -> FxHashMap<u8, CellOccupants> {
        track_occupancy(&self.pawns)
    }

    // === History ===

    /// Record an accepted action.
    pub fn record(&mut self, color: Color, action: Action, dice: Option<u8>) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.history.push_back(ActionRecord::new(
            color,
            action,
            dice,
            self.turn.turn_number,
            sequence,
        ));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
