//! Engine-wide constants.

/// Sentinel score magnitude signalling a forced win.
pub const CHECKMATE: i32 = 100_000;

/// Window bound comfortably outside any reachable score.
pub const INFINITY: i32 = CHECKMATE * 2;

/// Seed for the per-engine Zobrist key tables. Fixed so hashes are
/// reproducible across engine instances and test runs.
pub const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;
