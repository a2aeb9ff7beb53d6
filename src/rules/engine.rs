//! Rule variants and game results.
//!
//! `LudoRules` wraps the move functions with the table's house rules:
//! - Whether a bare 6 earns another roll
//! - Whether the game stops at the first winner or plays out every place

use serde::{Deserialize, Serialize};

use super::moves::{legal_pawns, resolve_move, LegalPawns, MoveResolution, UNLOCK_ROLL};
use crate::core::{Color, GameState, LudoConfig, PawnId, Rejection, SEAT_COUNT};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// First color home; the session stopped there.
    Winner(Color),
    /// Every color ranked, first to last.
    Placement(Vec<Color>),
}

impl GameResult {
    /// The color that finished first.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::Winner(color) => Some(*color),
            GameResult::Placement(order) => order.first().copied(),
        }
    }

    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        self.winner() == Some(color)
    }
}

/// Rule set for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LudoRules {
    pub bonus_turn_on_six: bool,
    pub play_to_completion: bool,
}

impl LudoRules {
    #[must_use]
    pub fn from_config(config: &LudoConfig) -> Self {
        Self {
            bonus_turn_on_six: config.bonus_turn_on_six,
            play_to_completion: config.play_to_completion,
        }
    }

    /// Pawns `color` may move with `dice`.
    #[must_use]
    pub fn legal_pawns(&self, state: &GameState, color: Color, dice: u8) -> LegalPawns {
        legal_pawns(&state.pawns, color, dice)
    }

    /// Resolve a move and apply the bare-6 variant to its extra turn.
    pub fn apply_move(
        &self,
        state: &mut GameState,
        pawn: PawnId,
        dice: u8,
    ) -> Result<MoveResolution, Rejection> {
        let mut resolution = resolve_move(&mut state.pawns, pawn, dice)?;
        if self.bonus_turn_on_six && dice == UNLOCK_ROLL {
            resolution.extra_turn = true;
        }
        Ok(resolution)
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if it has ended, `None` if play continues.
    #[must_use]
    pub fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        let winners = &state.turn.winners;
        if self.play_to_completion {
            (winners.len() == SEAT_COUNT).then(|| GameResult::Placement(winners.clone()))
        } else {
            winners.first().copied().map(GameResult::Winner)
        }
    }

    /// Next color that still has pawns to move, after `color`.
    #[must_use]
    pub fn next_active(&self, state: &GameState, color: Color) -> Option<Color> {
        let mut next = color.next();
        for _ in 0..SEAT_COUNT {
            if !state.turn.has_finished(next) {
                return Some(next);
            }
            next = next.next();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PawnState;

    #[test]
    fn test_game_result_winner() {
        let result = GameResult::Winner(Color::Green);
        assert!(result.is_winner(Color::Green));
        assert!(!result.is_winner(Color::Red));

        let placement = GameResult::Placement(vec![Color::Blue, Color::Red, Color::Green, Color::Yellow]);
        assert_eq!(placement.winner(), Some(Color::Blue));
        assert!(!placement.is_winner(Color::Red));
    }

    #[test]
    fn test_bare_six_variant() {
        let mut state = GameState::new();
        state.pawns[0].state = PawnState::OnTrack(4);

        let narrow = LudoRules::default();
        let res = narrow.apply_move(&mut state.clone(), PawnId(0), 6).unwrap();
        assert!(!res.extra_turn);

        let generous = LudoRules { bonus_turn_on_six: true, ..LudoRules::default() };
        let res = generous.apply_move(&mut state, PawnId(0), 6).unwrap();
        assert!(res.extra_turn);
    }

    #[test]
    fn test_terminal_first_winner() {
        let rules = LudoRules::default();
        let mut state = GameState::new();
        assert_eq!(rules.is_terminal(&state), None);

        state.turn.winners.push(Color::Yellow);
        assert_eq!(rules.is_terminal(&state), Some(GameResult::Winner(Color::Yellow)));
    }

    #[test]
    fn test_terminal_play_to_completion() {
        let rules = LudoRules { play_to_completion: true, ..LudoRules::default() };
        let mut state = GameState::new();

        state.turn.winners = vec![Color::Yellow, Color::Red, Color::Blue];
        assert_eq!(rules.is_terminal(&state), None);

        state.turn.winners.push(Color::Green);
        assert_eq!(
            rules.is_terminal(&state),
            Some(GameResult::Placement(vec![Color::Yellow, Color::Red, Color::Blue, Color::Green]))
        );
    }

    #[test]
    fn test_next_active_skips_finished() {
        let rules = LudoRules::default();
        let mut state = GameState::new();
        assert_eq!(rules.next_active(&state, Color::Red), Some(Color::Green));

        state.turn.winners = vec![Color::Green, Color::Yellow];
        assert_eq!(rules.next_active(&state, Color::Red), Some(Color::Blue));
        assert_eq!(rules.next_active(&state, Color::Blue), Some(Color::Red));

        state.turn.winners = Color::ALL.to_vec();
        assert_eq!(rules.next_active(&state, Color::Red), None);
    }

    #[test]
    fn test_from_config() {
        let config = LudoConfig::default().with_play_to_completion(true);
        let rules = LudoRules::from_config(&config);
        assert!(rules.play_to_completion);
        assert!(!rules.bonus_turn_on_six);
    }
}
