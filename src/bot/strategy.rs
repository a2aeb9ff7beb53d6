//! Pawn choice for bot seats.
//!
//! Strategies are trait-based so a host can swap in its own:
//! - `RandomStrategy`: uniform over the legal set
//! - `GreedyStrategy`: best immediate outcome, previewed on a copy

use crate::board::{absolute_track_index, is_safe_cell, HOME_COLUMN_START};
use crate::core::{GameRng, PawnId, PawnState};
use crate::game::GameSnapshot;
use crate::rules::{preview_move, MoveResolution};

/// Chooses which legal pawn a bot moves.
pub trait MoveStrategy: Send + Sync {
    /// Pick one of `legal`.
    ///
    /// Returns `None` if `legal` is empty.
    fn choose_move(
        &self,
        legal: &[PawnId],
        snapshot: &GameSnapshot,
        rng: &mut GameRng,
    ) -> Option<PawnId>;
}

/// Uniform random choice.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    fn choose_move(
        &self,
        legal: &[PawnId],
        _snapshot: &GameSnapshot,
        rng: &mut GameRng,
    ) -> Option<PawnId> {
        rng.choose(legal).copied()
    }
}

/// Picks the move with the best immediate outcome.
///
/// Priority, highest first: finishing a pawn, capturing, leaving home,
/// landing on a safe cell, then furthest progress. Ties go to the lowest ID.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

/// Ordered so that the derived comparison follows move priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct MoveScore {
    finished: bool,
    captured: usize,
    left_home: bool,
    safe: bool,
    progress: u8,
}

impl MoveScore {
    fn of(resolution: &MoveResolution) -> Self {
        let (safe, progress) = match resolution.to {
            PawnState::Finished => (true, u8::MAX),
            PawnState::OnTrack(pos) if pos >= HOME_COLUMN_START => (true, pos),
            PawnState::OnTrack(pos) => {
                let safe = absolute_track_index(resolution.color, pos)
                    .map(is_safe_cell)
                    .unwrap_or(false);
                (safe, pos)
            }
            PawnState::AtHome => (false, 0),
        };
        Self {
            finished: resolution.finished,
            captured: resolution.captured.len(),
            left_home: resolution.left_home,
            safe,
            progress,
        }
    }
}

impl MoveStrategy for GreedyStrategy {
    fn choose_move(
        &self,
        legal: &[PawnId],
        snapshot: &GameSnapshot,
        _rng: &mut GameRng,
    ) -> Option<PawnId> {
        let dice = snapshot.last_dice?;
        let mut best: Option<(MoveScore, PawnId)> = None;

        for &pawn in legal {
            let Ok(resolution) = preview_move(&snapshot.pawns, pawn, dice) else {
                continue;
            };
            let score = MoveScore::of(&resolution);
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, pawn));
            }
        }

        best.map(|(_, pawn)| pawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LudoConfig, ScriptedDice};
    use crate::game::LudoGame;

    fn snapshot_with(dice: u8, placements: &[(u8, PawnState)]) -> GameSnapshot {
        let mut snapshot =
            LudoGame::with_dice(LudoConfig::default(), ScriptedDice::new(std::iter::empty()))
                .snapshot();
        for &(id, state) in placements {
            snapshot.pawns[id as usize].state = state;
        }
        snapshot.last_dice = Some(dice);
        snapshot
    }

    #[test]
    fn test_random_picks_from_legal() {
        let snapshot = snapshot_with(6, &[]);
        let legal = [PawnId(0), PawnId(2)];
        let mut rng = GameRng::new(1);

        for _ in 0..20 {
            let choice = RandomStrategy.choose_move(&legal, &snapshot, &mut rng).unwrap();
            assert!(legal.contains(&choice));
        }
    }

    #[test]
    fn test_empty_legal_set() {
        let snapshot = snapshot_with(3, &[]);
        let mut rng = GameRng::new(1);

        assert_eq!(RandomStrategy.choose_move(&[], &snapshot, &mut rng), None);
        assert_eq!(GreedyStrategy.choose_move(&[], &snapshot, &mut rng), None);
    }

    #[test]
    fn test_greedy_prefers_finish() {
        // Pawn 0 can finish, pawn 1 can capture Green on absolute cell 10
        let snapshot = snapshot_with(
            3,
            &[
                (0, PawnState::OnTrack(53)),
                (1, PawnState::OnTrack(7)),
                (4, PawnState::OnTrack(49)),
            ],
        );
        let mut rng = GameRng::new(1);

        let choice = GreedyStrategy.choose_move(&[PawnId(0), PawnId(1)], &snapshot, &mut rng);
        assert_eq!(choice, Some(PawnId(0)));
    }

    #[test]
    fn test_greedy_prefers_capture_over_leaving_home() {
        // Green pawn at relative 49 sits on absolute 10
        let snapshot = snapshot_with(
            6,
            &[(1, PawnState::OnTrack(4)), (4, PawnState::OnTrack(49))],
        );
        let mut rng = GameRng::new(1);
        let legal = [PawnId(0), PawnId(1), PawnId(2), PawnId(3)];

        assert_eq!(GreedyStrategy.choose_move(&legal, &snapshot, &mut rng), Some(PawnId(1)));
    }

    #[test]
    fn test_greedy_prefers_safe_cell() {
        // Pawn 0 lands on the star at 8, pawn 1 goes further to an open cell
        let snapshot = snapshot_with(
            2,
            &[(0, PawnState::OnTrack(6)), (1, PawnState::OnTrack(20))],
        );
        let mut rng = GameRng::new(1);

        let choice = GreedyStrategy.choose_move(&[PawnId(0), PawnId(1)], &snapshot, &mut rng);
        assert_eq!(choice, Some(PawnId(0)));
    }

    #[test]
    fn test_greedy_advances_furthest() {
        let snapshot = snapshot_with(
            1,
            &[(0, PawnState::OnTrack(2)), (1, PawnState::OnTrack(30))],
        );
        let mut rng = GameRng::new(1);

        let choice = GreedyStrategy.choose_move(&[PawnId(0), PawnId(1)], &snapshot, &mut rng);
        assert_eq!(choice, Some(PawnId(1)));
    }
}
