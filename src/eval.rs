//! Static position evaluation.
//!
//! Returns a signed centipoint score from White's perspective; callers
//! negate for Black. Fractional weights accumulate in `f64` and round to
//! `i32` at the end. The uniform jitter is the only nondeterminism and is
//! driven by the engine-owned, seedable RNG.

use rand::rngs::StdRng;
use rand::Rng;

use crate::board;
use crate::constants::CHECKMATE;
use crate::movegen;
use crate::position::Position;
use crate::types::{Color, PieceKind};

/// Material value of a man, in centipoints.
pub const MAN_VALUE: f64 = 100.0;

/// Material value of a knight, in centipoints.
pub const KNIGHT_VALUE: f64 = 150.0;

/// Bonus per own piece standing on an enemy-castle square.
const CASTLE_OCCUPATION_BONUS: f64 = 80.0;

/// Per-piece bonus on the central files E..H.
const CENTER_FILE_BONUS: f64 = 3.0;

/// Per-piece bonus on the near-central files D and I.
const NEAR_CENTER_FILE_BONUS: f64 = 1.5;

/// Weight on ranks advanced toward the enemy castle.
const ADVANCE_WEIGHT: f64 = 12.0;

/// Mobility is half of this bonus per available first step.
const MOBILITY_BONUS_PER_MOVE: f64 = 3.0;
const MOBILITY_WEIGHT: f64 = 0.5;

/// Amplitude of the uniform tie-breaking noise, [-10, +10).
pub const JITTER_AMPLITUDE: f64 = 10.0;

/// Staged bonus for Manhattan distance to the nearest enemy-castle square.
fn proximity_bonus(distance: u8) -> f64 {
    match distance {
        0..=2 => 40.0,
        3..=4 => 26.0,
        5..=6 => 13.0,
        7..=8 => 6.0,
        _ => 0.0,
    }
}

fn file_bonus(file: u8) -> f64 {
    match file {
        4..=7 => CENTER_FILE_BONUS,      // E..H
        3 | 8 => NEAR_CENTER_FILE_BONUS, // D, I
        _ => 0.0,
    }
}

/// Ranks advanced toward the enemy castle, off the piece's own baseline.
fn advance_term(color: Color, rank_number: u8) -> f64 {
    let ranks = match color {
        Color::White => rank_number as f64 - 6.0,
        Color::Black => 11.0 - rank_number as f64,
    };
    ranks * ADVANCE_WEIGHT
}

/// Evaluate `pos` from White's perspective.
///
/// A position either side has already won short-circuits to the checkmate
/// sentinel before any positional term or jitter is applied.
#[must_use]
pub fn evaluate(pos: &Position, rng: &mut StdRng) -> i32 {
    if pos.check_win_condition(Color::White).is_some() {
        return CHECKMATE;
    }
    if pos.check_win_condition(Color::Black).is_some() {
        return -CHECKMATE;
    }

    let mut score = 0.0f64;
    for (sq, piece) in pos.all_pieces() {
        let castle = board::enemy_castle(piece.color);
        let mut value = match piece.kind {
            PieceKind::Man => MAN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
        };
        if castle.contains(&sq) {
            value += CASTLE_OCCUPATION_BONUS;
        }
        let distance = castle
            .iter()
            .map(|&c| board::manhattan(sq, c))
            .min()
            .unwrap_or(u8::MAX);
        value += proximity_bonus(distance);
        value += file_bonus(sq.file());
        value += advance_term(piece.color, sq.rank_number());

        match piece.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }

    let mobility = MOBILITY_WEIGHT * MOBILITY_BONUS_PER_MOVE;
    score += mobility * movegen::count_initial_moves(pos, Color::White) as f64;
    score -= mobility * movegen::count_initial_moves(pos, Color::Black) as f64;

    score += rng.gen_range(-JITTER_AMPLITUDE..JITTER_AMPLITUDE);
    score.round() as i32
}

/// Evaluate `pos` from `side`'s perspective.
#[must_use]
pub fn evaluate_for(pos: &Position, side: Color, rng: &mut StdRng) -> i32 {
    let white_score = evaluate(pos, rng);
    match side {
        Color::White => white_score,
        Color::Black => -white_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    use crate::board::Square;
    use crate::types::Piece;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn initial_position_is_roughly_balanced() {
        let pos = Position::initial();
        let eval = evaluate(&pos, &mut rng());
        assert!(
            eval.abs() as f64 <= 2.0 * JITTER_AMPLITUDE,
            "initial position should be near zero, got {eval}"
        );
    }

    #[test]
    fn material_advantage_shows_up() {
        let pos = Position::initial();
        let mut up_a_knight = pos.clone();
        up_a_knight.remove(sq("C11"));
        let eval = evaluate(&up_a_knight, &mut rng());
        assert!(eval > 100, "a knight up should score well, got {eval}");
    }

    #[test]
    fn two_pieces_in_the_enemy_castle_is_checkmate() {
        let mut pos = Position::empty();
        pos.place(sq("F16"), Piece::knight(Color::White));
        pos.place(sq("G16"), Piece::knight(Color::White));
        pos.place(sq("A4"), Piece::man(Color::White));
        pos.place(sq("L13"), Piece::man(Color::Black));
        assert_eq!(evaluate(&pos, &mut rng()), CHECKMATE);
        assert_eq!(evaluate_for(&pos, Color::Black, &mut rng()), -CHECKMATE);
    }

    #[test]
    fn capture_all_is_checkmate_for_the_survivor() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::man(Color::Black));
        pos.place(sq("F6"), Piece::man(Color::Black));
        assert_eq!(evaluate(&pos, &mut rng()), -CHECKMATE);
    }

    #[test]
    fn evaluation_mirrors_within_jitter() {
        // Color-swap and rank-mirror an asymmetric position; the evaluation
        // must negate up to jitter amplitude and rounding.
        let mut pos = Position::empty();
        pos.place(sq("E8"), Piece::knight(Color::White));
        pos.place(sq("F9"), Piece::man(Color::White));
        pos.place(sq("C12"), Piece::man(Color::White));
        pos.place(sq("H11"), Piece::man(Color::Black));
        pos.place(sq("J5"), Piece::knight(Color::Black));

        let mut mirrored = Position::empty();
        for (square, piece) in pos.all_pieces() {
            let flipped = Square::new(square.file(), 15 - square.rank()).unwrap();
            mirrored.place(flipped, Piece::new(piece.kind, piece.color.opponent()));
        }

        let a = evaluate(&pos, &mut rng());
        let b = evaluate(&mirrored, &mut rng());
        assert!(
            (a + b).abs() as f64 <= 2.0 * JITTER_AMPLITUDE + 2.0,
            "mirror evaluation should negate: {a} vs {b}"
        );
    }

    #[test]
    fn same_seed_gives_the_same_evaluation() {
        let pos = Position::initial();
        let a = evaluate(&pos, &mut StdRng::seed_from_u64(99));
        let b = evaluate(&pos, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn advancing_a_piece_raises_the_score() {
        // Identical material, one White man further up the board. Use the
        // same seed so jitter cancels out of the comparison direction.
        let mut behind = Position::empty();
        behind.place(sq("F6"), Piece::man(Color::White));
        behind.place(sq("G6"), Piece::man(Color::White));
        behind.place(sq("F11"), Piece::man(Color::Black));
        behind.place(sq("G11"), Piece::man(Color::Black));

        let mut ahead = behind.clone();
        let piece = ahead.remove(sq("F6")).unwrap();
        ahead.place(sq("F10"), piece);

        let a = evaluate(&behind, &mut StdRng::seed_from_u64(3));
        let b = evaluate(&ahead, &mut StdRng::seed_from_u64(3));
        assert!(b > a, "advanced position should score higher: {a} vs {b}");
    }
}
