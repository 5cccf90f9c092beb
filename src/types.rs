//! Piece, color, and outcome types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two piece kinds of Camelot.
///
/// Knights differ from Men only in their right to execute a charge
/// (canters followed by jumps in a single turn).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Man,
    Knight,
}

impl PieceKind {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::Man => 0,
            PieceKind::Knight => 1,
        }
    }

    /// Whether this kind may combine canters and jumps in one turn.
    #[inline]
    #[must_use]
    pub const fn can_charge(self) -> bool {
        matches!(self, PieceKind::Knight)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Man => write!(f, "Man"),
            PieceKind::Knight => write!(f, "Knight"),
        }
    }
}

/// Side colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction this side advances in: +1 for White, -1 for Black.
    #[inline]
    #[must_use]
    pub(crate) const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece on the board: kind plus owning color. No per-piece state beyond that.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    #[inline]
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Piece::new(PieceKind::Man, color)
    }

    #[inline]
    #[must_use]
    pub const fn knight(color: Color) -> Self {
        Piece::new(PieceKind::Knight, color)
    }
}

/// How a game is won. Returned by win detection on `Position`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WinCondition {
    /// Two own pieces occupy the opponent's castle.
    CastleOccupation,
    /// Every enemy piece has been captured.
    CaptureAll,
    /// The opponent has no legal turn.
    Stalemate,
}

impl WinCondition {
    /// The stable string form consumed by the game layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            WinCondition::CastleOccupation => "castle_occupation",
            WinCondition::CaptureAll => "capture_all",
            WinCondition::Stalemate => "stalemate",
        }
    }
}

impl fmt::Display for WinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
