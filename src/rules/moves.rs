//! Move validation and resolution.
//!
//! Both functions are pure over the pawn table: validation reads a single
//! pawn, resolution mutates the table it is given and reports everything
//! that happened so the controller can emit events and decide the next turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{absolute_track_index, is_safe_cell, FINISH_POSITION, HOME_COLUMN_START};
use crate::core::{
    track_occupancy, Color, Pawn, PawnId, PawnState, Pawns, Rejection, DIE_FACES, PAWNS_PER_COLOR,
};

/// Roll needed to bring a pawn out of its yard.
pub const UNLOCK_ROLL: u8 = 6;

/// Pawn IDs a color may move with the committed roll.
pub type LegalPawns = SmallVec<[PawnId; PAWNS_PER_COLOR]>;

/// Everything a single resolved move changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResolution {
    pub pawn: PawnId,
    pub color: Color,
    pub dice: u8,
    pub from: PawnState,
    pub to: PawnState,

    /// Relative positions visited one cell at a time, ending at the target.
    /// Leaving home visits only the entry cell.
    pub path: SmallVec<[u8; 6]>,

    pub left_home: bool,

    /// Opponent pawns sent home, all from `capture_cell`.
    pub captured: SmallVec<[PawnId; PAWNS_PER_COLOR]>,
    pub capture_cell: Option<u8>,

    pub finished: bool,

    /// The move finished the color's last pawn.
    pub won: bool,

    /// Left home, captured, or finished.
    pub extra_turn: bool,
}

/// Whether `pawn` may move by `dice`.
///
/// - Dice outside `1..=6` never move anything.
/// - Finished pawns never move.
/// - Pawns at home need a 6.
/// - Pawns on the track cannot overshoot the center.
#[must_use]
pub fn is_valid_move(pawn: &Pawn, dice: u8) -> bool {
    if !(1..=DIE_FACES).contains(&dice) {
        return false;
    }
    match pawn.state {
        PawnState::Finished => false,
        PawnState::AtHome => dice == UNLOCK_ROLL,
        PawnState::OnTrack(position) => position
            .checked_add(dice)
            .is_some_and(|target| target <= FINISH_POSITION),
    }
}

/// Pawns of `color` that may move by `dice`, in ID order.
#[must_use]
pub fn legal_pawns(pawns: &Pawns, color: Color, dice: u8) -> LegalPawns {
    pawns
        .iter()
        .filter(|p| p.color == color && is_valid_move(p, dice))
        .map(|p| p.id)
        .collect()
}

/// Apply a move to the pawn table.
///
/// Rejects unknown pawns and illegal moves without touching the table.
pub fn resolve_move(pawns: &mut Pawns, id: PawnId, dice: u8) -> Result<MoveResolution, Rejection> {
    let pawn = *pawns.get(id.index()).ok_or(Rejection::UnknownPawn(id))?;
    if !is_valid_move(&pawn, dice) {
        return Err(Rejection::IllegalMove { pawn: id, dice });
    }

    let mut resolution = MoveResolution {
        pawn: id,
        color: pawn.color,
        dice,
        from: pawn.state,
        to: pawn.state,
        path: SmallVec::new(),
        left_home: false,
        captured: SmallVec::new(),
        capture_cell: None,
        finished: false,
        won: false,
        extra_turn: false,
    };

    let target = match pawn.state {
        PawnState::AtHome => {
            resolution.left_home = true;
            resolution.path.push(0);
            0
        }
        PawnState::OnTrack(old) => {
            let new = old + dice;
            resolution.path.extend(old + 1..=new);
            new
        }
        // is_valid_move already refused finished pawns
        PawnState::Finished => return Err(Rejection::IllegalMove { pawn: id, dice }),
    };

    resolution.to = if target == FINISH_POSITION {
        PawnState::Finished
    } else {
        PawnState::OnTrack(target)
    };
    pawns[id.index()].state = resolution.to;

    if target < HOME_COLUMN_START && !resolution.left_home {
        capture_at(pawns, pawn.color, target, &mut resolution);
    }

    if resolution.to == PawnState::Finished {
        resolution.finished = true;
        resolution.won = pawns
            .iter()
            .filter(|p| p.color == pawn.color)
            .all(Pawn::is_finished);
    }

    resolution.extra_turn =
        resolution.left_home || !resolution.captured.is_empty() || resolution.finished;
    Ok(resolution)
}

/// Resolve a move on a copy, leaving `pawns` untouched.
pub fn preview_move(pawns: &Pawns, id: PawnId, dice: u8) -> Result<MoveResolution, Rejection> {
    let mut scratch = *pawns;
    resolve_move(&mut scratch, id, dice)
}

fn capture_at(pawns: &mut Pawns, mover: Color, relative: u8, resolution: &mut MoveResolution) {
    let Ok(cell) = absolute_track_index(mover, relative) else {
        return;
    };
    if is_safe_cell(cell) {
        return;
    }

    let mut occupancy = track_occupancy(pawns);
    let Some(occupants) = occupancy.remove(&cell) else {
        return;
    };
    for id in occupants {
        let other = &mut pawns[id.index()];
        if other.color != mover {
            other.state = PawnState::AtHome;
            resolution.captured.push(id);
        }
    }

    if !resolution.captured.is_empty() {
        resolution.capture_cell = Some(cell);
    }
}
