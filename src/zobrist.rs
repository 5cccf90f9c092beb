//! Zobrist hashing for Camelot positions.
//!
//! Provides 64-bit position fingerprints for the transposition table. Keys
//! are generated once per engine instance from a fixed seed so hashes are
//! reproducible.

use rand::prelude::*;

use crate::board::SQUARE_COUNT;
use crate::position::Position;
use crate::types::Color;

/// One random key per (kind, color, square), a side-to-move key, and a key
/// per castle-move counter value.
pub struct ZobristKeys {
    // piece_keys[kind][color][square_index]
    piece_keys: [[[u64; SQUARE_COUNT]; 2]; 2],
    black_to_move_key: u64,
    // castle_move_keys[color][counter value 0..=2]; value 0 contributes nothing
    castle_move_keys: [[u64; 3]; 2],
}

impl ZobristKeys {
    /// Fill the key tables from a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut piece_keys = [[[0u64; SQUARE_COUNT]; 2]; 2];
        let mut castle_move_keys = [[0u64; 3]; 2];

        for kind in &mut piece_keys {
            for color in kind.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castle_move_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castle_move_keys,
        }
    }

    /// Hash a position with the given side to move.
    ///
    /// XOR of the keys of all pieces, the turn key iff Black moves, and a
    /// castle-counter key per color with a non-zero counter (counters
    /// saturate at 2 for hashing).
    #[must_use]
    pub fn hash(&self, pos: &Position, side: Color) -> u64 {
        let mut h = 0u64;
        for (sq, piece) in pos.all_pieces() {
            h ^= self.piece_keys[piece.kind.index()][piece.color.index()][sq.index()];
        }
        if side == Color::Black {
            h ^= self.black_to_move_key;
        }
        for color in [Color::White, Color::Black] {
            let count = pos.castle_moves(color);
            if count > 0 {
                h ^= self.castle_move_keys[color.index()][count.min(2) as usize];
            }
        }
        h
    }
}
