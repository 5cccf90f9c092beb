//! A playing engine for Camelot, the classical two-player abstract strategy
//! game on a cross-shaped 160-square board.
//!
//! The crate answers one question well: given a position and a side to
//! move, find the best complete turn within a configured depth and time
//! budget. Around that sit the rules engine (turn generation with mandatory
//! captures, canter chains, and knight charges), a positional evaluator,
//! and an iterative-deepening alpha-beta search with a transposition table.
//!
//! # Example
//! ```
//! use camelot_engine::{Color, Difficulty, Engine, Position};
//!
//! let mut engine = Engine::from_difficulty(Difficulty::Easy);
//! let analysis = engine.search(&Position::initial(), Color::White);
//! let best = analysis.best_move.as_ref().expect("White has turns here");
//! println!("{} ({})", best.notation(), analysis.format_evaluation());
//! ```

pub mod board;
pub mod constants;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod position;
pub mod rules;
pub mod search;
pub mod transposition_table;
pub mod types;
pub mod zobrist;

pub use board::{Square, SquareParseError};
pub use engine::{Analysis, Difficulty, Engine, EngineConfig, SearchOptions};
pub use movegen::{generate_turns, CompleteTurn, TurnBuilder};
pub use position::Position;
pub use rules::StepError;
pub use search::{BestTurnSink, SearchLimits, SearchOutcome};
pub use types::{Color, Piece, PieceKind, WinCondition};
