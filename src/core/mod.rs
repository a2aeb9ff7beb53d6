//! Core engine types: colors, pawns, state, actions, RNG, configuration.
//!
//! This module holds the pawn/board model. It knows nothing about move
//! legality; the `rules` module decides that.

pub mod action;
pub mod color;
pub mod config;
pub mod error;
pub mod pawn;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use color::{Color, ColorMap, SEAT_COUNT};
pub use config::{ConfigError, LudoConfig, SeatKind};
pub use error::Rejection;
pub use pawn::{initial_pawns, Pawn, PawnId, PawnState, Pawns, PAWNS_PER_COLOR, PAWN_COUNT};
pub use rng::{DiceSource, GameRng, ScriptedDice, DIE_FACES};
pub use state::{track_occupancy, CellOccupants, GameState, Phase, TurnState};
