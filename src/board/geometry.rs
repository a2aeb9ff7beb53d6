//! Static board geometry on a 15×15 grid.
//!
//! ## Track Layout
//!
//! The shared track is 52 cells, numbered clockwise starting from Red's
//! entry cell at `(6, 1)`. Each color enters 13 cells after the previous
//! seat:
//!
//! | Color  | Entry cell | Star cell | Home column      |
//! |--------|------------|-----------|------------------|
//! | Red    | 0          | 8         | row 7, cols 1-5  |
//! | Green  | 13         | 21        | col 7, rows 1-5  |
//! | Yellow | 26         | 34        | row 7, cols 13-9 |
//! | Blue   | 39         | 47        | col 7, rows 13-9 |
//!
//! A pawn at relative position 50 sits on the cell just before its home
//! column, so relative 51 is always adjacent to relative 50.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Color;

/// Cells on the shared circular track.
pub const TRACK_LEN: u8 = 52;

/// Last color-relative position on the shared track.
pub const LAST_SHARED_POSITION: u8 = 50;

/// First color-relative position inside the private home column.
pub const HOME_COLUMN_START: u8 = 51;

/// Cells in each color's private home column.
pub const HOME_COLUMN_LEN: u8 = 5;

/// Color-relative position of a pawn that has arrived at the center.
pub const FINISH_POSITION: u8 = 56;

/// Cells between consecutive seats' entry cells.
pub const SEAT_SPACING: u8 = TRACK_LEN / 4;

/// Side length of the square board grid.
pub const BOARD_SIZE: u8 = 15;

/// A cell on the rendered board grid (row 0 is the top edge).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: u8,
    pub col: u8,
}

impl Coordinate {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

const fn c(row: u8, col: u8) -> Coordinate {
    Coordinate::new(row, col)
}

/// Caller bugs in geometry lookups.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

#[rustfmt::skip]
const TRACK: [Coordinate; TRACK_LEN as usize] = [
    // Red arm, heading right
    c(6, 1), c(6, 2), c(6, 3), c(6, 4), c(6, 5),
    // up the top arm
    c(5, 6), c(4, 6), c(3, 6), c(2, 6), c(1, 6), c(0, 6),
    c(0, 7), c(0, 8),
    // Green arm, heading down
    c(1, 8), c(2, 8), c(3, 8), c(4, 8), c(5, 8),
    c(6, 9), c(6, 10), c(6, 11), c(6, 12), c(6, 13), c(6, 14),
    c(7, 14), c(8, 14),
    // Yellow arm, heading left
    c(8, 13), c(8, 12), c(8, 11), c(8, 10), c(8, 9),
    c(9, 8), c(10, 8), c(11, 8), c(12, 8), c(13, 8), c(14, 8),
    c(14, 7), c(14, 6),
    // Blue arm, heading up
    c(13, 6), c(12, 6), c(11, 6), c(10, 6), c(9, 6),
    c(8, 5), c(8, 4), c(8, 3), c(8, 2), c(8, 1), c(8, 0),
    c(7, 0), c(6, 0),
];

#[rustfmt::skip]
const HOME_COLUMNS: [[Coordinate; HOME_COLUMN_LEN as usize]; 4] = [
    [c(7, 1), c(7, 2), c(7, 3), c(7, 4), c(7, 5)],
    [c(1, 7), c(2, 7), c(3, 7), c(4, 7), c(5, 7)],
    [c(7, 13), c(7, 12), c(7, 11), c(7, 10), c(7, 9)],
    [c(13, 7), c(12, 7), c(11, 7), c(10, 7), c(9, 7)],
];

#[rustfmt::skip]
const YARDS: [[Coordinate; 4]; 4] = [
    [c(2, 2), c(2, 3), c(3, 2), c(3, 3)],
    [c(2, 11), c(2, 12), c(3, 11), c(3, 12)],
    [c(11, 11), c(11, 12), c(12, 11), c(12, 12)],
    [c(11, 2), c(11, 3), c(12, 2), c(12, 3)],
];

/// Center of the board, where arrived pawns rest.
pub const CENTER: Coordinate = c(7, 7);

/// Offset from an entry cell to that quadrant's star cell.
const STAR_OFFSET: u8 = 8;

/// Absolute cells where captures cannot happen: every entry cell and every star.
pub const SAFE_CELLS: [u8; 8] = [
    0,
    STAR_OFFSET,
    SEAT_SPACING,
    SEAT_SPACING + STAR_OFFSET,
    2 * SEAT_SPACING,
    2 * SEAT_SPACING + STAR_OFFSET,
    3 * SEAT_SPACING,
    3 * SEAT_SPACING + STAR_OFFSET,
];

/// Absolute index of a color's entry cell.
#[must_use]
pub const fn entry_offset(color: Color) -> u8 {
    color as u8 * SEAT_SPACING
}

/// Map a color-relative shared-track position (0..=50) to the absolute cell.
///
/// ```
/// use rust_ludo::board::absolute_track_index;
/// use rust_ludo::core::Color;
///
/// assert_eq!(absolute_track_index(Color::Red, 10), Ok(10));
/// assert_eq!(absolute_track_index(Color::Blue, 20), Ok(7)); // (20 + 39) % 52
/// assert!(absolute_track_index(Color::Red, 51).is_err());
/// ```
pub fn absolute_track_index(color: Color, relative: u8) -> Result<u8, GeometryError> {
    if relative > LAST_SHARED_POSITION {
        return Err(GeometryError::PreconditionViolation(format!(
            "relative position {relative} is not on the shared track"
        )));
    }
    Ok((relative + entry_offset(color)) % TRACK_LEN)
}

/// Coordinate of a color's home-column cell for relative positions 51..=55.
pub fn home_column_coordinate(color: Color, relative: u8) -> Result<Coordinate, GeometryError> {
    if !(HOME_COLUMN_START..HOME_COLUMN_START + HOME_COLUMN_LEN).contains(&relative) {
        return Err(GeometryError::PreconditionViolation(format!(
            "relative position {relative} is not in the home column"
        )));
    }
    Ok(HOME_COLUMNS[color.index()][(relative - HOME_COLUMN_START) as usize])
}

/// Coordinate of an absolute track cell.
pub fn track_coordinate(absolute: u8) -> Result<Coordinate, GeometryError> {
    TRACK.get(absolute as usize).copied().ok_or_else(|| {
        GeometryError::PreconditionViolation(format!("track index {absolute} out of range"))
    })
}

/// Whether captures are forbidden on an absolute cell.
#[must_use]
pub fn is_safe_cell(absolute: u8) -> bool {
    SAFE_CELLS.contains(&absolute)
}

/// [`is_safe_cell`] that rejects indices off the track.
pub fn check_safe_cell(absolute: u8) -> Result<bool, GeometryError> {
    if absolute >= TRACK_LEN {
        return Err(GeometryError::PreconditionViolation(format!(
            "track index {absolute} out of range"
        )));
    }
    Ok(is_safe_cell(absolute))
}

/// Render coordinate for any color-relative position (0..=56).
pub fn pawn_coordinate(color: Color, relative: u8) -> Result<Coordinate, GeometryError> {
    match relative {
        0..=LAST_SHARED_POSITION => track_coordinate(absolute_track_index(color, relative)?),
        FINISH_POSITION => Ok(CENTER),
        _ => home_column_coordinate(color, relative),
    }
}

/// Coordinate of a yard slot (0..4) for pawns at home.
pub fn yard_coordinate(color: Color, slot: u8) -> Result<Coordinate, GeometryError> {
    YARDS[color.index()].get(slot as usize).copied().ok_or_else(|| {
        GeometryError::PreconditionViolation(format!("yard slot {slot} out of range"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacent(a: Coordinate, b: Coordinate) -> bool {
        a.row.abs_diff(b.row) + a.col.abs_diff(b.col) == 1
    }

    #[test]
    fn test_track_is_a_closed_loop() {
        for i in 0..TRACK_LEN {
            let here = track_coordinate(i).unwrap();
            let next = track_coordinate((i + 1) % TRACK_LEN).unwrap();
            // Corners of the cross step diagonally
            let step = here.row.abs_diff(next.row) + here.col.abs_diff(next.col);
            assert!(step == 1 || step == 2, "gap between cell {i} and its successor");
        }
    }

    #[test]
    fn test_track_cells_are_distinct_and_on_board() {
        let mut cells: Vec<_> = TRACK.to_vec();
        assert!(cells.iter().all(|c| c.row < BOARD_SIZE && c.col < BOARD_SIZE));
        cells.sort_by_key(|c| (c.row, c.col));
        cells.dedup();
        assert_eq!(cells.len(), TRACK_LEN as usize);
    }

    #[test]
    fn test_entry_offsets() {
        assert_eq!(entry_offset(Color::Red), 0);
        assert_eq!(entry_offset(Color::Green), 13);
        assert_eq!(entry_offset(Color::Yellow), 26);
        assert_eq!(entry_offset(Color::Blue), 39);
    }

    #[test]
    fn test_absolute_track_index_wraps() {
        assert_eq!(absolute_track_index(Color::Green, 0), Ok(13));
        assert_eq!(absolute_track_index(Color::Yellow, 30), Ok(4));
        assert_eq!(absolute_track_index(Color::Blue, 50), Ok(37));
    }

    #[test]
    fn test_absolute_track_index_rejects_home_column() {
        for relative in [51, 55, 56, 200] {
            assert!(matches!(
                absolute_track_index(Color::Red, relative),
                Err(GeometryError::PreconditionViolation(_))
            ));
        }
    }

    #[test]
    fn test_home_column_joins_track() {
        for color in Color::ALL {
            let last_shared = pawn_coordinate(color, LAST_SHARED_POSITION).unwrap();
            let first_home = home_column_coordinate(color, HOME_COLUMN_START).unwrap();
            let last_home = home_column_coordinate(color, HOME_COLUMN_START + 4).unwrap();

            assert!(adjacent(last_shared, first_home), "{color} column detached");
            // The center square spans the middle 3x3 block
            let to_center = last_home.row.abs_diff(CENTER.row) + last_home.col.abs_diff(CENTER.col);
            assert_eq!(to_center, 2, "{color} column misses center");
        }
    }

    #[test]
    fn test_home_column_rejects_track_positions() {
        assert!(home_column_coordinate(Color::Green, 50).is_err());
        assert!(home_column_coordinate(Color::Green, 56).is_err());
        assert!(home_column_coordinate(Color::Green, 53).is_ok());
    }

    #[test]
    fn test_entry_cells_are_safe() {
        for color in Color::ALL {
            assert!(is_safe_cell(entry_offset(color)));
        }
        assert!(!is_safe_cell(1));
        assert!(!is_safe_cell(10));
    }

    #[test]
    fn test_safe_set_is_rotationally_symmetric() {
        for &cell in &SAFE_CELLS {
            assert!(is_safe_cell((cell + SEAT_SPACING) % TRACK_LEN));
        }
    }

    #[test]
    fn test_check_safe_cell_rejects_out_of_range() {
        assert_eq!(check_safe_cell(8), Ok(true));
        assert_eq!(check_safe_cell(9), Ok(false));
        assert!(check_safe_cell(TRACK_LEN).is_err());
    }

    #[test]
    fn test_pawn_coordinate_dispatch() {
        assert_eq!(pawn_coordinate(Color::Red, 0).unwrap(), c(6, 1));
        assert_eq!(pawn_coordinate(Color::Green, 0).unwrap(), c(1, 8));
        assert_eq!(pawn_coordinate(Color::Yellow, 51).unwrap(), c(7, 13));
        assert_eq!(pawn_coordinate(Color::Blue, FINISH_POSITION).unwrap(), CENTER);
        assert!(pawn_coordinate(Color::Blue, 57).is_err());
    }

    #[test]
    fn test_yard_coordinates() {
        assert_eq!(yard_coordinate(Color::Yellow, 3).unwrap(), c(12, 12));
        assert!(yard_coordinate(Color::Red, 4).is_err());
    }
}
