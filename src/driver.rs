//! Runs a session: paces queued steps and plays bot seats.
//!
//! The controller never sleeps. Pacing is delegated to a [`Pacer`]:
//! - `Instant`: no waiting, for tests and simulations
//! - `Sleeping`: blocks the thread, for a terminal front end
//!
//! ```
//! use rust_ludo::core::LudoConfig;
//! use rust_ludo::driver::{Driver, DriverStatus};
//! use rust_ludo::game::LudoGame;
//!
//! let game = LudoGame::new(LudoConfig::all_bots().with_seed(3));
//! let mut driver = Driver::new(game);
//!
//! let status = driver.run().unwrap();
//! assert!(matches!(status, DriverStatus::Finished(_)));
//! ```

use std::time::Duration;

use tracing::debug;

use crate::bot::{GreedyStrategy, MoveStrategy};
use crate::core::{Color, GameRng, Phase, Rejection, SeatKind};
use crate::game::{GameEvent, LudoGame};
use crate::rules::GameResult;

/// Stream name for bot choices.
const BOT_CONTEXT: &str = "bot";

/// Waits out cosmetic delays.
pub trait Pacer {
    fn wait(&mut self, delay: Duration);
}

/// Never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Instant;

impl Pacer for Instant {
    fn wait(&mut self, _delay: Duration) {}
}

/// Sleeps the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sleeping;

impl Pacer for Sleeping {
    fn wait(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Why [`Driver::run`] returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverStatus {
    /// A human seat must roll or pick a pawn.
    AwaitingHuman(Color),
    Finished(GameResult),
}

/// Drives a [`LudoGame`] until a human must act.
pub struct Driver<P: Pacer = Instant> {
    game: LudoGame,
    strategy: Box<dyn MoveStrategy>,
    pacer: P,
    rng: GameRng,
    events: Vec<GameEvent>,
}

impl Driver<Instant> {
    /// Driver with no pacing and the greedy bot.
    #[must_use]
    pub fn new(game: LudoGame) -> Self {
        Self::with_pacer(game, Instant)
    }
}

impl<P: Pacer> Driver<P> {
    #[must_use]
    pub fn with_pacer(game: LudoGame, pacer: P) -> Self {
        let rng = GameRng::new(game.config().seed).for_context(BOT_CONTEXT);
        Self {
            game,
            strategy: Box::new(GreedyStrategy),
            pacer,
            rng,
            events: Vec::new(),
        }
    }

    /// Use a different bot strategy.
    #[must_use]
    pub fn with_strategy<S: MoveStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    #[must_use]
    pub fn game(&self) -> &LudoGame {
        &self.game
    }

    /// Mutable access for human input.
    pub fn game_mut(&mut self) -> &mut LudoGame {
        &mut self.game
    }

    #[must_use]
    pub fn into_game(self) -> LudoGame {
        self.game
    }

    /// Events produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run queued steps and bot turns until a human must act or the game ends.
    pub fn run(&mut self) -> Result<DriverStatus, Rejection> {
        loop {
            self.flush();

            if self.game.is_over() {
                if let Some(result) = self.game.result() {
                    return Ok(DriverStatus::Finished(result));
                }
            }

            let color = self.game.current();
            if self.game.current_seat() == SeatKind::Human {
                return Ok(DriverStatus::AwaitingHuman(color));
            }

            self.pacer.wait(self.game.config().bot_delay());
            self.bot_turn(color)?;
        }
    }

    /// Run every queued step, waiting before each.
    fn flush(&mut self) {
        while let Some(delay) = self.game.next_delay() {
            self.pacer.wait(delay);
            if let Some(event) = self.game.tick() {
                self.events.push(event);
            }
        }
    }

    fn bot_turn(&mut self, color: Color) -> Result<(), Rejection> {
        match self.game.phase() {
            Phase::AwaitingSelection => {
                let snapshot = self.game.snapshot();
                let pawn = self
                    .strategy
                    .choose_move(&snapshot.legal_pawns, &snapshot, &mut self.rng)
                    .ok_or(Rejection::NotAwaitingSelection)?;
                debug!(%color, %pawn, "bot selects");
                self.game.select_pawn(pawn)
            }
            _ => {
                debug!(%color, "bot rolls");
                self.game.request_roll()
            }
        }
    }
}
