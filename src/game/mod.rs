//! The turn controller and what it reports.
//!
//! - `controller`: `LudoGame`, the session object hosts drive
//! - `event`: cues emitted per tick
//! - `snapshot`: owned view for rendering and bots

pub mod controller;
pub mod event;
pub mod snapshot;

pub use controller::LudoGame;
pub use event::GameEvent;
pub use snapshot::{render_coordinate, GameSnapshot};
