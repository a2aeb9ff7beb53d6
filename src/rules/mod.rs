//! Move validation, move resolution and rule variants.
//!
//! - `moves`: the pure validator and resolver over a pawn table
//! - `engine`: `LudoRules`, which layers house-rule variants and the
//!   terminal condition on top of the resolver
//!
//! The turn controller calls into this module but never decides legality
//! itself.

pub mod engine;
pub mod moves;

pub use engine::{GameResult, LudoRules};
pub use moves::{
    is_valid_move, legal_pawns, preview_move, resolve_move, LegalPawns, MoveResolution,
    UNLOCK_ROLL,
};
