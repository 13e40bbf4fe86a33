use crate::{CoreError, CoreResult};
use ruta_shared::Bus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column letters available on any coach, left to right.
pub const SEAT_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// A single seat: 1-based row plus column letter, rendered as "3C".
///
/// Ordering is row-major, matching the order the grid generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId {
    pub row: u32,
    pub letter: char,
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}

impl FromStr for SeatId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_ascii() || s.len() < 2 {
            return Err(CoreError::Validation(format!("invalid seat identifier: {s:?}")));
        }
        let (digits, letter_part) = s.split_at(s.len() - 1);
        let letter = letter_part
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| SEAT_LETTERS.contains(c))
            .ok_or_else(|| CoreError::Validation(format!("invalid seat letter in: {s:?}")))?;
        let row: u32 = digits
            .parse()
            .map_err(|_| CoreError::Validation(format!("invalid seat row in: {s:?}")))?;
        if row == 0 {
            return Err(CoreError::Validation(format!("seat rows start at 1: {s:?}")));
        }
        Ok(Self { row, letter })
    }
}

impl TryFrom<String> for SeatId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeatId> for String {
    fn from(seat: SeatId) -> Self {
        seat.to_string()
    }
}

/// Dimensions of a coach's seat grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatGrid {
    rows: u32,
    seats_per_row: u32,
}

impl SeatGrid {
    pub fn new(rows: u32, seats_per_row: u32) -> CoreResult<Self> {
        if rows == 0 {
            return Err(CoreError::Configuration("a bus needs at least one row".to_string()));
        }
        if seats_per_row == 0 {
            return Err(CoreError::Configuration(
                "a row needs at least one seat".to_string(),
            ));
        }
        if seats_per_row as usize > SEAT_LETTERS.len() {
            return Err(CoreError::Configuration(format!(
                "seats per row cannot exceed {}, got {}",
                SEAT_LETTERS.len(),
                seats_per_row
            )));
        }
        Ok(Self { rows, seats_per_row })
    }

    pub fn for_bus(bus: &Bus) -> CoreResult<Self> {
        Self::new(bus.rows, bus.seats_per_row)
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn seats_per_row(&self) -> u32 {
        self.seats_per_row
    }

    pub fn capacity(&self) -> u32 {
        self.rows * self.seats_per_row
    }

    /// Seat ids in row-major order: 1A, 1B, ..., 2A, 2B, ...
    pub fn seat_ids(self) -> impl Iterator<Item = SeatId> {
        let per_row = self.seats_per_row as usize;
        (1..=self.rows).flat_map(move |row| {
            (0..per_row).map(move |col| SeatId {
                row,
                letter: SEAT_LETTERS[col],
            })
        })
    }
}
