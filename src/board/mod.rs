//! Board geometry: static translation between color-relative pawn
//! positions and absolute board cells.
//!
//! Everything here is computed at compile time and never mutated, so any
//! number of readers may use it concurrently.

pub mod geometry;

pub use geometry::{
    absolute_track_index, check_safe_cell, entry_offset, home_column_coordinate, is_safe_cell,
    pawn_coordinate, track_coordinate, yard_coordinate, Coordinate, GeometryError, BOARD_SIZE,
    CENTER, FINISH_POSITION, HOME_COLUMN_LEN, HOME_COLUMN_START, LAST_SHARED_POSITION,
    SAFE_CELLS, SEAT_SPACING, TRACK_LEN,
};
