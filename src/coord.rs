//! Coordinate addressing: rows A-F, columns 1-6.

use crate::config::GRID_SIZE;
use core::fmt;
use core::str::FromStr;

/// Errors returned when coordinate text cannot be resolved to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// Input is not a two-character letter/digit pair.
    Malformed,
    /// Row letter outside A-F.
    RowOutOfRange(char),
    /// Column digit outside 1-6.
    ColOutOfRange(char),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Malformed => write!(f, "expected a coordinate like A1"),
            CoordError::RowOutOfRange(c) => write!(f, "row must be A-F, got '{}'", c),
            CoordError::ColOutOfRange(c) => write!(f, "column must be 1-6, got '{}'", c),
        }
    }
}

/// A validated grid cell. Parses from text like `A1`, `c3`, or `3C` and
/// always holds an in-range (row, col) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Build from zero-based indices; `None` when out of range.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Coordinate { row, col })
        } else {
            None
        }
    }

    /// Zero-based row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Scan free text for a fire command and extract its coordinate.
    ///
    /// Any token after a fire keyword is tried first, then any standalone
    /// coordinate token anywhere in the text.
    pub fn find_in_text(text: &str) -> Option<Coordinate> {
        let mut after_keyword = false;
        for word in text.split_whitespace() {
            let token = word.trim_matches(|c: char| !c.is_ascii_alphanumeric());
            if after_keyword {
                if let Ok(coord) = token.parse() {
                    return Some(coord);
                }
            }
            if token.eq_ignore_ascii_case("fire")
                || token.eq_ignore_ascii_case("shoot")
                || token.eq_ignore_ascii_case("attack")
            {
                after_keyword = true;
            }
        }
        text.split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
            .find_map(|token| token.parse().ok())
    }
}

impl FromStr for Coordinate {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, CoordError> {
        let s = s.trim();
        let mut chars = s.chars();
        let (a, b) = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => return Err(CoordError::Malformed),
        };
        // accept digit-first input such as "3C"
        let (row_ch, col_ch) = if a.is_ascii_digit() && b.is_ascii_alphabetic() {
            (b, a)
        } else {
            (a, b)
        };
        if !row_ch.is_ascii_alphabetic() {
            return Err(CoordError::Malformed);
        }
        let row = (row_ch.to_ascii_uppercase() as u8 - b'A') as usize;
        if row >= GRID_SIZE {
            return Err(CoordError::RowOutOfRange(row_ch.to_ascii_uppercase()));
        }
        let col_digit = col_ch.to_digit(10).ok_or(CoordError::Malformed)? as usize;
        if col_digit < 1 || col_digit > GRID_SIZE {
            return Err(CoordError::ColOutOfRange(col_ch));
        }
        Ok(Coordinate {
            row,
            col: col_digit - 1,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
    }
}
