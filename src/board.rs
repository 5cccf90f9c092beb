//! Geometry of the cross-shaped 160-square Camelot board.
//!
//! Files are lettered A..L (12 columns), ranks run 1..16. The playing
//! surface is the cross-shaped subset of that grid; squares outside the
//! cross are not addressable and can never be constructed.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::types::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of addressable squares on the board.
pub const SQUARE_COUNT: usize = 160;

/// Number of files (columns A..L).
pub const FILE_COUNT: u8 = 12;

/// Number of ranks (rows 1..16).
pub const RANK_COUNT: u8 = 16;

/// The eight unit directions: the four rook directions plus the four diagonals.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Inclusive file span of each rank (0-based), or `None` off the grid.
///
/// Row widths of the cross: rank 1 {F,G}, rank 2 {C..J}, rank 3 {B..K},
/// ranks 4..13 full {A..L}, then mirrored toward rank 16.
const fn file_span(rank: u8) -> Option<(u8, u8)> {
    match rank {
        0 | 15 => Some((5, 6)),
        1 | 14 => Some((2, 9)),
        2 | 13 => Some((1, 10)),
        3..=12 => Some((0, 11)),
        _ => None,
    }
}

/// An addressable square of the cross. File and rank are stored 0-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    file: u8,
    rank: u8,
}

/// All 160 squares in rank-major order.
static SQUARES: Lazy<Vec<Square>> = Lazy::new(|| {
    let mut squares = Vec::with_capacity(SQUARE_COUNT);
    for rank in 0..RANK_COUNT {
        if let Some((lo, hi)) = file_span(rank) {
            for file in lo..=hi {
                squares.push(Square { file, rank });
            }
        }
    }
    debug_assert_eq!(squares.len(), SQUARE_COUNT);
    squares
});

/// Dense index of each grid cell into [`SQUARES`]; `None` for off-cross cells.
static SQUARE_INDEX: Lazy<[[Option<u8>; FILE_COUNT as usize]; RANK_COUNT as usize]> =
    Lazy::new(|| {
        let mut index = [[None; FILE_COUNT as usize]; RANK_COUNT as usize];
        for (i, sq) in SQUARES.iter().enumerate() {
            index[sq.rank as usize][sq.file as usize] = Some(i as u8);
        }
        index
    });

/// The fixed ordered list of all addressable squares.
#[must_use]
pub fn squares() -> &'static [Square] {
    &SQUARES
}

impl Square {
    /// Construct a square from 0-based file and rank, if it lies on the cross.
    #[must_use]
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        match file_span(rank) {
            Some((lo, hi)) if file >= lo && file <= hi => Some(Square { file, rank }),
            _ => None,
        }
    }

    /// Unchecked const constructor for known-good coordinates (castle tables).
    pub(crate) const fn at(file: u8, rank: u8) -> Square {
        Square { file, rank }
    }

    /// 0-based file (0 = file A).
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// 0-based rank (0 = rank 1).
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// 1-based rank as printed in coordinates.
    #[inline]
    #[must_use]
    pub const fn rank_number(self) -> u8 {
        self.rank + 1
    }

    /// Dense index into the ordered square list, 0..160.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        // Every constructed Square is on the cross, so the lookup is total.
        SQUARE_INDEX[self.rank as usize][self.file as usize].unwrap_or(0) as usize
    }

    /// The square displaced by `(df, dr)`, or `None` if that leaves the cross.
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file as i16 + df as i16;
        let rank = self.rank as i16 + dr as i16;
        if file < 0 || rank < 0 || file >= FILE_COUNT as i16 || rank >= RANK_COUNT as i16 {
            return None;
        }
        Square::new(file as u8, rank as u8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.file) as char, self.rank_number())
    }
}

/// Error type for square coordinate parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    /// Text is not a file letter followed by a rank number.
    InvalidFormat { text: String },
    /// Coordinates are syntactically valid but lie outside the cross.
    OffBoard { text: String },
}

impl fmt::Display for SquareParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareParseError::InvalidFormat { text } => {
                write!(f, "Invalid square coordinate '{text}'")
            }
            SquareParseError::OffBoard { text } => {
                write!(f, "Square '{text}' is not on the board")
            }
        }
    }
}

impl std::error::Error for SquareParseError {}

impl FromStr for Square {
    type Err = SquareParseError;

    /// Parse a coordinate like `F1` or `c11` (case-insensitive file letter).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareParseError::InvalidFormat {
            text: s.to_string(),
        };
        let mut chars = s.chars();
        let file_char = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        if !('A'..='L').contains(&file_char) {
            return Err(invalid());
        }
        let rank: u8 = chars.as_str().parse().map_err(|_| invalid())?;
        if !(1..=RANK_COUNT).contains(&rank) {
            return Err(invalid());
        }
        Square::new(file_char as u8 - b'A', rank - 1).ok_or(SquareParseError::OffBoard {
            text: s.to_string(),
        })
    }
}

/// White's castle: the squares White defends and Black must enter.
pub const WHITE_CASTLE: [Square; 2] = [Square::at(5, 0), Square::at(6, 0)]; // F1, G1

/// Black's castle: the squares Black defends and White must enter.
pub const BLACK_CASTLE: [Square; 2] = [Square::at(5, 15), Square::at(6, 15)]; // F16, G16

/// The castle belonging to `color`.
#[inline]
#[must_use]
pub const fn own_castle(color: Color) -> [Square; 2] {
    match color {
        Color::White => WHITE_CASTLE,
        Color::Black => BLACK_CASTLE,
    }
}

/// The castle `color` is trying to enter.
#[inline]
#[must_use]
pub const fn enemy_castle(color: Color) -> [Square; 2] {
    match color {
        Color::White => BLACK_CASTLE,
        Color::Black => WHITE_CASTLE,
    }
}

/// Whether `sq` is one of `color`'s own castle squares.
#[inline]
#[must_use]
pub fn is_own_castle(color: Color, sq: Square) -> bool {
    own_castle(color).contains(&sq)
}

/// Whether `sq` is a square of the castle `color` attacks.
#[inline]
#[must_use]
pub fn is_enemy_castle(color: Color, sq: Square) -> bool {
    enemy_castle(color).contains(&sq)
}

/// Chebyshev (king-move) distance between two squares.
#[inline]
#[must_use]
pub fn chebyshev(a: Square, b: Square) -> u8 {
    let df = (a.file as i16 - b.file as i16).unsigned_abs();
    let dr = (a.rank as i16 - b.rank as i16).unsigned_abs();
    df.max(dr) as u8
}

/// Manhattan distance between two squares.
#[inline]
#[must_use]
pub fn manhattan(a: Square, b: Square) -> u8 {
    let df = (a.file as i16 - b.file as i16).unsigned_abs();
    let dr = (a.rank as i16 - b.rank as i16).unsigned_abs();
    (df + dr) as u8
}

/// Unit direction from `from` toward `to`, each component in {-1, 0, 1}.
///
/// Returns `None` for identical squares.
#[must_use]
pub fn direction(from: Square, to: Square) -> Option<(i8, i8)> {
    if from == to {
        return None;
    }
    let df = (to.file as i16 - from.file as i16).signum() as i8;
    let dr = (to.rank as i16 - from.rank as i16).signum() as i8;
    Some((df, dr))
}

/// Whether `to` is exactly one king-step away from `from`.
#[inline]
#[must_use]
pub fn is_one_step(from: Square, to: Square) -> bool {
    chebyshev(from, to) == 1
}

/// Whether `to` is exactly two steps from `from` along a single unit
/// direction, leaving a well-defined middle square.
#[must_use]
pub fn is_two_step(from: Square, to: Square) -> bool {
    let df = to.file as i16 - from.file as i16;
    let dr = to.rank as i16 - from.rank as i16;
    df.abs().max(dr.abs()) == 2 && df % 2 == 0 && dr % 2 == 0
}

/// Middle square of a two-step leap, or `None` if the leap is not a
/// two-step or its midpoint falls off the cross.
#[must_use]
pub fn midpoint(from: Square, to: Square) -> Option<Square> {
    if !is_two_step(from, to) {
        return None;
    }
    let file = (from.file + to.file) / 2;
    let rank = (from.rank + to.rank) / 2;
    Square::new(file, rank)
}
