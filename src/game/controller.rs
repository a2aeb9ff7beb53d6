//! Turn controller: the owned session object.
//!
//! ## Phases
//!
//! ```text
//! AwaitingRoll --request_roll--> Rolling --ticks--> AwaitingSelection
//!      ^                                                 |
//!      |                                           select_pawn
//!      |                                                 v
//!      +------- turn ends / extra turn <--ticks--- Resolving --> GameOver
//! ```
//!
//! ## Ticks
//!
//! Dice tumbling and pawn walking are queued as discrete steps. Each call to
//! [`LudoGame::tick`] runs one step and returns the event it produced;
//! [`LudoGame::next_delay`] tells a scheduler how long to wait first. While
//! steps are queued every input is rejected with [`Rejection::Busy`], so two
//! moves can never interleave. A host that does not animate simply calls
//! [`LudoGame::settle`].
//!
//! ```
//! use rust_ludo::core::{LudoConfig, ScriptedDice};
//! use rust_ludo::game::LudoGame;
//!
//! let mut game = LudoGame::with_dice(LudoConfig::default(), ScriptedDice::new([6]));
//! game.roll().unwrap();
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.last_dice, Some(6));
//! assert_eq!(snapshot.legal_pawns.len(), 4);
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, info, trace, warn};

use super::event::GameEvent;
use super::snapshot::GameSnapshot;
use crate::core::{
    Action, ActionRecord, Color, DiceSource, GameRng, GameState, LudoConfig, PawnId, Phase,
    Rejection, ScriptedDice, SeatKind, DIE_FACES,
};
use crate::rules::{GameResult, LegalPawns, LudoRules, MoveResolution, UNLOCK_ROLL};

/// Stream name for cosmetic dice faces.
const FLICKER_CONTEXT: &str = "flicker";

/// One queued animation step.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Step {
    Flicker(u8),
    Settle,
    Show(GameEvent),
    EndTurn { extra_turn: bool },
}

/// A Ludo session.
pub struct LudoGame {
    config: LudoConfig,
    rules: LudoRules,
    state: GameState,
    dice: Box<dyn DiceSource>,
    flicker: GameRng,
    steps: VecDeque<Step>,
    legal: LegalPawns,
    message: String,
}

impl LudoGame {
    /// Create a session whose dice are seeded from `config.seed`.
    #[must_use]
    pub fn new(config: LudoConfig) -> Self {
        let dice = GameRng::new(config.seed);
        Self::with_dice(config, dice)
    }

    /// Create a session drawing committed rolls from `dice`.
    #[must_use]
    pub fn with_dice(config: LudoConfig, dice: impl DiceSource + 'static) -> Self {
        let mut game = Self {
            rules: LudoRules::from_config(&config),
            flicker: GameRng::new(config.seed).for_context(FLICKER_CONTEXT),
            config,
            state: GameState::new(),
            dice: Box::new(dice),
            steps: VecDeque::new(),
            legal: LegalPawns::new(),
            message: String::new(),
        };
        game.init_game();
        game
    }

    /// Resume from a position, `state.turn.current` to roll.
    ///
    /// Queued steps and any committed roll are discarded.
    #[must_use]
    pub fn with_state(config: LudoConfig, dice: impl DiceSource + 'static, state: GameState) -> Self {
        let mut game = Self::with_dice(config, dice);
        game.state = state;
        let turn = &mut game.state.turn;
        if turn.phase != Phase::GameOver {
            turn.phase = Phase::AwaitingRoll;
            turn.can_roll = true;
            turn.last_dice = None;
        }
        game.message = format!("{} to roll", turn.current);
        game
    }

    /// Rebuild a session from recorded actions.
    ///
    /// Committed rolls are taken from the records, so the replay does not
    /// depend on which dice source produced the original game.
    pub fn replay(config: LudoConfig, records: &[ActionRecord]) -> Result<Self, Rejection> {
        let rolls: Vec<u8> = records
            .iter()
            .filter(|r| r.action == Action::Roll)
            .filter_map(|r| r.dice)
            .collect();
        let fallback = GameRng::new(config.seed);
        let mut game = Self::with_dice(config, ScriptedDice::with_fallback(rolls, fallback));

        for record in records {
            match record.action {
                Action::Roll => game.roll()?,
                Action::Select(pawn) => game.play(pawn)?,
            };
        }
        Ok(game)
    }

    /// Reset to the opening position: every pawn home, Red to roll.
    ///
    /// The dice source keeps its stream; the cosmetic flicker stream restarts.
    pub fn init_game(&mut self) -> GameSnapshot {
        self.state = GameState::new();
        self.steps.clear();
        self.legal.clear();
        self.flicker = GameRng::new(self.config.seed).for_context(FLICKER_CONTEXT);
        self.message = format!("{} to roll", self.state.turn.current);
        info!(seed = self.config.seed, "new game");
        self.snapshot()
    }

    // === Inputs ===

    /// Start rolling for the current color.
    pub fn request_roll(&mut self) -> Result<(), Rejection> {
        self.check_idle()?;
        let turn = &mut self.state.turn;
        if turn.phase != Phase::AwaitingRoll || !turn.can_roll {
            return Err(Rejection::CannotRoll);
        }

        turn.phase = Phase::Rolling;
        turn.can_roll = false;
        for _ in 0..self.config.flicker_count {
            self.steps.push_back(Step::Flicker(self.flicker.roll_die()));
        }
        self.steps.push_back(Step::Settle);
        self.message = format!("{} is rolling", turn.current);
        debug!(color = %turn.current, "roll requested");
        Ok(())
    }

    /// Move a pawn by the committed roll.
    ///
    /// Only pawns in the current legal set are accepted.
    pub fn select_pawn(&mut self, pawn: PawnId) -> Result<(), Rejection> {
        self.check_idle()?;
        if self.state.turn.phase != Phase::AwaitingSelection {
            return Err(Rejection::NotAwaitingSelection);
        }
        let dice = self.state.turn.last_dice.ok_or(Rejection::NotAwaitingSelection)?;
        let current = self.state.turn.current;
        let selected = self.state.pawn(pawn).ok_or(Rejection::UnknownPawn(pawn))?;
        if selected.color != current {
            return Err(Rejection::NotYourPawn { pawn, current });
        }
        if !self.legal.contains(&pawn) {
            return Err(Rejection::IllegalMove { pawn, dice });
        }

        let resolution = self.rules.apply_move(&mut self.state, pawn, dice)?;
        self.state.record(current, Action::Select(pawn), Some(dice));
        self.state.turn.phase = Phase::Resolving;
        self.state.turn.pending_extra_turn = resolution.extra_turn;
        self.legal.clear();
        debug!(
            color = %current,
            %pawn,
            dice,
            to = ?resolution.to,
            captured = resolution.captured.len(),
            "move resolved"
        );

        if resolution.won {
            self.record_winner(current);
        }
        self.queue_resolution(&resolution);
        self.message = format!("{current} moves {pawn}");
        Ok(())
    }

    // === Ticks ===

    /// Run one queued step. Returns `None` when nothing is queued.
    pub fn tick(&mut self) -> Option<GameEvent> {
        let step = self.steps.pop_front()?;
        trace!(?step, "tick");
        let current = self.state.turn.current;

        let event = match step {
            Step::Flicker(value) => GameEvent::DiceFlicker { color: current, value },
            Step::Settle => self.settle_roll(),
            Step::Show(event) => event,
            Step::EndTurn { extra_turn } => self.end_turn(extra_turn),
        };
        Some(event)
    }

    /// Cosmetic delay before the next queued step.
    #[must_use]
    pub fn next_delay(&self) -> Option<Duration> {
        self.steps.front().map(|step| match step {
            Step::Flicker(_) | Step::Settle => self.config.flicker_delay(),
            Step::Show(GameEvent::PawnStepped { .. }) => self.config.step_delay(),
            Step::Show(_) | Step::EndTurn { .. } => Duration::ZERO,
        })
    }

    /// Run every queued step and return the events in order.
    pub fn settle(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::with_capacity(self.steps.len());
        while let Some(event) = self.tick() {
            events.push(event);
        }
        events
    }

    /// `request_roll` followed by `settle`.
    pub fn roll(&mut self) -> Result<Vec<GameEvent>, Rejection> {
        self.request_roll()?;
        Ok(self.settle())
    }

    /// `select_pawn` followed by `settle`.
    pub fn play(&mut self, pawn: PawnId) -> Result<Vec<GameEvent>, Rejection> {
        self.select_pawn(pawn)?;
        Ok(self.settle())
    }

    // === Queries ===

    /// Copy of the state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let turn = &self.state.turn;
        GameSnapshot {
            pawns: self.state.pawns,
            current: turn.current,
            current_color_index: turn.current_color_index(),
            last_dice: turn.last_dice,
            can_roll: turn.can_roll && !self.is_busy(),
            message: self.message.clone(),
            winners: turn.winners.clone(),
            phase: turn.phase,
            legal_pawns: self.legal.clone(),
            turn_number: turn.turn_number,
            busy: self.is_busy(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &LudoConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> LudoRules {
        self.rules
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.turn.phase
    }

    #[must_use]
    pub fn current(&self) -> Color {
        self.state.turn.current
    }

    /// Who acts for the current color.
    #[must_use]
    pub fn current_seat(&self) -> SeatKind {
        self.config.seats[self.state.turn.current]
    }

    /// Pawns the current color may select.
    #[must_use]
    pub fn legal_pawns(&self) -> &[PawnId] {
        &self.legal
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.steps.is_empty()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.turn.phase == Phase::GameOver
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Accepted actions in order.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.state.history.iter()
    }

    // === Internals ===

    fn check_idle(&self) -> Result<(), Rejection> {
        if self.state.turn.phase == Phase::GameOver {
            return Err(Rejection::GameOver);
        }
        if self.is_busy() {
            return Err(Rejection::Busy);
        }
        Ok(())
    }

    /// Draw the committed roll and compute the legal set.
    fn settle_roll(&mut self) -> GameEvent {
        let raw = self.dice.roll();
        debug_assert!(
            (1..=DIE_FACES).contains(&raw),
            "dice source returned {raw}, out of range 1..={DIE_FACES}"
        );
        let value = raw.clamp(1, DIE_FACES);
        if value != raw {
            warn!(raw, value, "dice source out of range, clamped");
        }
        let color = self.state.turn.current;
        self.state.turn.last_dice = Some(value);
        self.state.turn.phase = Phase::AwaitingSelection;
        self.state.record(color, Action::Roll, Some(value));
        self.legal = self.rules.legal_pawns(&self.state, color, value);
        debug!(%color, value, legal = self.legal.len(), "roll settled");

        if self.legal.is_empty() {
            let all_home = self.state.pawns_of(color).all(|p| p.is_at_home());
            self.message = if all_home {
                format!("{color} rolled {value}. Roll a 6 to unlock a pawn.")
            } else {
                format!("{color} rolled {value}. No moves available.")
            };
            let extra_turn = self.rules.bonus_turn_on_six && value == UNLOCK_ROLL;
            self.steps.push_back(Step::Show(GameEvent::NoMovesAvailable { color, dice: value }));
            self.steps.push_back(Step::EndTurn { extra_turn });
        } else {
            self.message = format!("{color} rolled {value}. Pick a pawn.");
        }
        GameEvent::DiceSettled { color, value }
    }

    fn record_winner(&mut self, color: Color) {
        let winners = &mut self.state.turn.winners;
        if winners.contains(&color) {
            return;
        }
        winners.push(color);
        info!(%color, place = winners.len(), "color finished");

        // With three colors home the last place is decided
        if self.rules.play_to_completion && winners.len() == Color::ALL.len() - 1 {
            if let Some(last) = Color::ALL.into_iter().find(|c| !winners.contains(c)) {
                winners.push(last);
            }
        }
    }

    fn queue_resolution(&mut self, resolution: &MoveResolution) {
        let MoveResolution { pawn, color, .. } = *resolution;

        if resolution.left_home {
            self.steps.push_back(Step::Show(GameEvent::PawnLeftHome { pawn, color }));
        } else {
            for &position in &resolution.path {
                self.steps
                    .push_back(Step::Show(GameEvent::PawnStepped { pawn, color, position }));
            }
        }

        if let Some(cell) = resolution.capture_cell {
            for &captured in &resolution.captured {
                let captured_color = captured.color().unwrap_or(color);
                self.steps.push_back(Step::Show(GameEvent::PawnCaptured {
                    pawn: captured,
                    color: captured_color,
                    by: pawn,
                    cell,
                }));
            }
        }

        if resolution.finished {
            self.steps.push_back(Step::Show(GameEvent::PawnFinished { pawn, color }));
        }

        if resolution.won {
            let place = self
                .state
                .turn
                .winners
                .iter()
                .position(|&c| c == color)
                .map_or(self.state.turn.winners.len(), |i| i + 1);
            self.steps.push_back(Step::Show(GameEvent::ColorWon { color, place }));
        }

        self.steps.push_back(Step::EndTurn { extra_turn: resolution.extra_turn });
    }

    fn end_turn(&mut self, extra_turn: bool) -> GameEvent {
        self.legal.clear();

        if let Some(result) = self.rules.is_terminal(&self.state) {
            self.state.turn.last_dice = None;
            self.state.turn.end_game();
            self.message = match result.winner() {
                Some(winner) => format!("{winner} wins!"),
                None => "Game over".to_string(),
            };
            info!(?result, "game over");
            return GameEvent::GameOver { result };
        }

        let from = self.state.turn.current;
        if extra_turn && !self.state.turn.has_finished(from) {
            self.state.turn.grant_extra_turn();
            self.message = format!("{from} rolls again");
            debug!(color = %from, "extra turn");
            return GameEvent::ExtraTurn { color: from };
        }

        let to = self.rules.next_active(&self.state, from).unwrap_or(from);
        self.state.turn.pass_to(to);
        self.message = format!("{to} to roll");
        debug!(%from, %to, "turn passed");
        GameEvent::TurnPassed { from, to }
    }
}

impl std::fmt::Debug for LudoGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LudoGame")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("queued_steps", &self.steps.len())
            .field("legal", &self.legal)
            .finish_non_exhaustive()
    }
}
