//! # rust-ludo
//!
//! A four-color Ludo engine: board geometry, move rules, a tick-driven turn
//! controller and bot seats. Rendering, input and sound belong to the host.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Pure**: Legality and resolution are functions over a pawn
//!    table. The controller sequences turns but never decides legality.
//!
//! 2. **Time Is External**: Dice tumbling and pawn walking are queued steps.
//!    The host decides how long to wait between ticks, or not at all.
//!
//! 3. **Deterministic**: Committed rolls come from an injectable
//!    `DiceSource`. A seed or a scripted sequence reproduces a game exactly,
//!    and cosmetic randomness draws from its own stream.
//!
//! ## Modules
//!
//! - `core`: Colors, pawns, state, actions, RNG, configuration, rejections
//! - `board`: Track and home-column coordinate tables
//! - `rules`: Move validation, resolution and rule variants
//! - `game`: The turn controller, its events and snapshots
//! - `bot`: Pawn choice for automated seats
//! - `driver`: Paced loop that plays bot seats

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod bot;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, SEAT_COUNT,
    Pawn, PawnId, PawnState, Pawns, PAWNS_PER_COLOR, PAWN_COUNT,
    DiceSource, GameRng, ScriptedDice,
    LudoConfig, SeatKind, ConfigError,
    Action, ActionRecord,
    GameState, TurnState, Phase,
    Rejection,
};

pub use crate::board::{Coordinate, GeometryError};

pub use crate::rules::{GameResult, LudoRules, MoveResolution};

pub use crate::game::{GameEvent, GameSnapshot, LudoGame};

pub use crate::bot::{GreedyStrategy, MoveStrategy, RandomStrategy};

pub use crate::driver::{Driver, DriverStatus, Pacer};
