//! Rules primitives: pure step-validity predicates over a position.
//!
//! These check a single step's geometry and occupancy only. Turn-level
//! constraints (mandatory jumps, no-revisit, castle restrictions) live in
//! the turn generator's step checker.

use std::fmt;

use crate::board::{self, Square, DIRECTIONS};
use crate::position::Position;
use crate::types::Color;

/// A plain move: one king-step onto an empty square.
#[must_use]
pub fn is_plain_move(pos: &Position, from: Square, to: Square) -> bool {
    board::is_one_step(from, to) && pos.piece_at(to).is_none()
}

/// A canter: a two-step leap over an adjacent friendly piece onto an empty
/// square. The friendly piece stays put.
#[must_use]
pub fn is_canter(pos: &Position, side: Color, from: Square, to: Square) -> bool {
    if pos.piece_at(to).is_some() {
        return false;
    }
    match board::midpoint(from, to) {
        Some(mid) => pos.piece_at(mid).is_some_and(|p| p.color == side),
        None => false,
    }
}

/// A jump: same geometry as a canter, but the middle square holds an enemy
/// piece. Removing the jumped piece is the caller's job.
#[must_use]
pub fn is_jump(pos: &Position, side: Color, from: Square, to: Square) -> bool {
    if pos.piece_at(to).is_some() {
        return false;
    }
    match board::midpoint(from, to) {
        Some(mid) => pos.piece_at(mid).is_some_and(|p| p.color != side),
        None => false,
    }
}

/// Landing and middle square of a leap from `from` along unit direction
/// `(df, dr)`, if both stay on the board.
#[must_use]
pub fn leap_squares(from: Square, df: i8, dr: i8) -> Option<(Square, Square)> {
    let mid = from.offset(df, dr)?;
    let to = from.offset(2 * df, 2 * dr)?;
    Some((mid, to))
}

/// Whether `side` has at least one legal single-step jump anywhere.
///
/// Scans every friendly piece in every direction; used for the
/// mandatory-capture rule and for quiescence gating.
#[must_use]
pub fn any_jump_available(pos: &Position, side: Color) -> bool {
    pos.pieces(side).any(|(sq, _)| piece_can_jump(pos, side, sq))
}

/// Whether the piece on `from` has a legal jump in some direction.
#[must_use]
pub fn piece_can_jump(pos: &Position, side: Color, from: Square) -> bool {
    DIRECTIONS.iter().any(|&(df, dr)| {
        leap_squares(from, df, dr)
            .map(|(_, to)| is_jump(pos, side, from, to))
            .unwrap_or(false)
    })
}

/// Why a step was rejected during turn construction.
///
/// `Display` renders the human-readable reason handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// Geometry or occupancy rules out the step (also covers revisits and
    /// canters into the own castle).
    InvalidMove,
    /// A jump is mandatory, either to start the turn or to continue it.
    MustContinueJumping,
    /// A man tried to jump after cantering; only knights charge.
    KnightsOnlyAfterCanter,
    /// A plain move is only legal as the single step of a turn.
    PlainMoveOnlyFirst,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::InvalidMove => write!(f, "Invalid move"),
            StepError::MustContinueJumping => write!(f, "Must continue jumping"),
            StepError::KnightsOnlyAfterCanter => {
                write!(f, "Only knights can jump after cantering")
            }
            StepError::PlainMoveOnlyFirst => {
                write!(f, "Can only make a plain move on the first step")
            }
        }
    }
}

impl std::error::Error for StepError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    #[test]
    fn plain_move_needs_an_empty_adjacent_square() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::man(Color::White));
        pos.place(sq("E7"), Piece::man(Color::White));
        assert!(is_plain_move(&pos, sq("E6"), sq("F7")));
        assert!(is_plain_move(&pos, sq("E6"), sq("D5")));
        assert!(!is_plain_move(&pos, sq("E6"), sq("E7"))); // occupied
        assert!(!is_plain_move(&pos, sq("E6"), sq("E8"))); // too far
    }

    #[test]
    fn canter_leaps_a_friend_without_capture() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::man(Color::White));
        pos.place(sq("E7"), Piece::man(Color::White));
        pos.place(sq("F7"), Piece::man(Color::Black));
        assert!(is_canter(&pos, Color::White, sq("E6"), sq("E8")));
        assert!(!is_canter(&pos, Color::White, sq("E6"), sq("G8"))); // enemy in the middle
        assert!(!is_canter(&pos, Color::White, sq("E6"), sq("D8"))); // no middle square
        assert!(!is_jump(&pos, Color::White, sq("E6"), sq("E8"))); // friend, not enemy
    }

    #[test]
    fn jump_leaps_an_enemy() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::knight(Color::White));
        pos.place(sq("F7"), Piece::man(Color::Black));
        assert!(is_jump(&pos, Color::White, sq("E6"), sq("G8")));
        assert!(any_jump_available(&pos, Color::White));
        assert!(piece_can_jump(&pos, Color::White, sq("E6")));
        // Black's man can jump back over the knight the other way.
        assert!(is_jump(&pos, Color::Black, sq("F7"), sq("D5")));
    }

    #[test]
    fn blocked_landing_square_forbids_the_leap() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::man(Color::White));
        pos.place(sq("F7"), Piece::man(Color::Black));
        pos.place(sq("G8"), Piece::man(Color::Black));
        assert!(!is_jump(&pos, Color::White, sq("E6"), sq("G8")));
        assert!(!any_jump_available(&pos, Color::White));
    }

    #[test]
    fn leap_squares_respect_the_board_edge() {
        // A two-step leap from F1 off the bottom of the cross has no squares.
        assert_eq!(leap_squares(sq("F1"), 0, -1), None);
        assert_eq!(
            leap_squares(sq("E6"), 1, 1),
            Some((sq("F7"), sq("G8")))
        );
    }

    #[test]
    fn step_error_messages_are_stable() {
        assert_eq!(StepError::InvalidMove.to_string(), "Invalid move");
        assert_eq!(
            StepError::MustContinueJumping.to_string(),
            "Must continue jumping"
        );
        assert_eq!(
            StepError::KnightsOnlyAfterCanter.to_string(),
            "Only knights can jump after cantering"
        );
        assert_eq!(
            StepError::PlainMoveOnlyFirst.to_string(),
            "Can only make a plain move on the first step"
        );
    }
}
