//! Engine façade: configuration, difficulty presets, and formatted analysis.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{CHECKMATE, ZOBRIST_SEED};
use crate::eval;
use crate::movegen::{self, CompleteTurn};
use crate::position::Position;
use crate::search::{self, BestTurnSink, SearchLimits};
use crate::transposition_table::TranspositionTable;
use crate::types::Color;
use crate::zobrist::ZobristKeys;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Search budget and table size for an engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Deepest iterative-deepening iteration.
    pub max_depth: u32,
    /// Wall-clock budget per search, in milliseconds.
    pub time_limit_ms: u64,
    /// Transposition table budget, in megabytes.
    pub tt_size_mb: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_depth: 10,
            time_limit_ms: 5000,
            tt_size_mb: 128,
        }
    }
}

/// Canned strength presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// The configuration this preset stands for.
    #[must_use]
    pub const fn config(self) -> EngineConfig {
        match self {
            Difficulty::Easy => EngineConfig {
                max_depth: 3,
                time_limit_ms: 500,
                tt_size_mb: 32,
            },
            Difficulty::Medium => EngineConfig {
                max_depth: 5,
                time_limit_ms: 2000,
                tt_size_mb: 64,
            },
            Difficulty::Hard => EngineConfig {
                max_depth: 8,
                time_limit_ms: 5000,
                tt_size_mb: 128,
            },
            Difficulty::Expert => EngineConfig {
                max_depth: 12,
                time_limit_ms: 10_000,
                tt_size_mb: 256,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        };
        f.write_str(name)
    }
}

/// Error type for difficulty parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError {
    text: String,
}

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown difficulty '{}', expected easy, medium, hard or expert",
            self.text
        )
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(ParseDifficultyError { text: s.to_string() }),
        }
    }
}

/// Optional hooks for a single search call.
#[derive(Default)]
pub struct SearchOptions {
    /// Receives the best turn after every completed depth.
    pub sink: Option<BestTurnSink>,
    /// External cancellation; set from another thread, polled alongside
    /// the deadline.
    pub stop: Option<Arc<AtomicBool>>,
}

/// What a search produced, with everything a caller needs to display it.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// The turn to play; `None` means the side to move has lost.
    pub best_move: Option<CompleteTurn>,
    /// Score in centipoints from the side-to-move's perspective.
    pub evaluation_cp: i32,
    /// Last fully completed search depth.
    pub depth_reached: u32,
    /// Best line found, starting with `best_move`'s notation.
    pub principal_variation: Vec<String>,
    pub nodes_searched: u64,
    pub nodes_per_second: u64,
    pub time_ms: u64,
    /// Whether the score signals a forced finish.
    pub is_mate: bool,
    /// Full moves until the forced finish, when `is_mate`.
    pub mate_in_moves: Option<u32>,
}

impl Analysis {
    /// Human-readable evaluation: pawn units with two decimals and a `+`
    /// prefix when ahead, `M<n>` / `-M<n>` for forced finishes.
    #[must_use]
    pub fn format_evaluation(&self) -> String {
        if self.is_mate {
            let moves = self.mate_in_moves.unwrap_or(0);
            if self.evaluation_cp > 0 {
                format!("M{moves}")
            } else {
                format!("-M{moves}")
            }
        } else {
            let pawns = self.evaluation_cp as f64 / 100.0;
            if self.evaluation_cp > 0 {
                format!("+{pawns:.2}")
            } else {
                format!("{pawns:.2}")
            }
        }
    }
}

/// The playing engine: search configuration plus the long-lived tables.
///
/// The transposition table persists across searches within a game; call
/// [`Engine::new_game`] to clear it. The RNG drives evaluation jitter and
/// root-move variety and can be seeded for reproducible play.
pub struct Engine {
    config: EngineConfig,
    keys: ZobristKeys,
    tt: TranspositionTable,
    rng: StdRng,
}

impl Engine {
    /// Engine with the given configuration and an entropy-seeded RNG.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Engine {
            config,
            keys: ZobristKeys::new(ZOBRIST_SEED),
            tt: TranspositionTable::new(config.tt_size_mb),
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with a fixed RNG seed; every search is reproducible.
    #[must_use]
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        let mut engine = Engine::new(config);
        engine.set_seed(seed);
        engine
    }

    /// Engine configured from a difficulty preset.
    #[must_use]
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Engine::new(difficulty.config())
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Re-seed the RNG behind jitter and root randomization.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Forget everything cached from previous searches.
    pub fn new_game(&mut self) {
        self.tt.clear();
    }

    /// All legal turns for `side`, ordered for search.
    #[must_use]
    pub fn legal_turns(&self, pos: &Position, side: Color) -> Vec<CompleteTurn> {
        let mut turns = movegen::generate_turns(pos, side);
        movegen::order_for_search(&mut turns, side);
        turns
    }

    /// Static evaluation from `side`'s perspective, jitter included.
    pub fn evaluate(&mut self, pos: &Position, side: Color) -> i32 {
        eval::evaluate_for(pos, side, &mut self.rng)
    }

    /// Zobrist hash of a position with `side` to move.
    #[must_use]
    pub fn position_hash(&self, pos: &Position, side: Color) -> u64 {
        self.keys.hash(pos, side)
    }

    /// Search with the engine's configured depth and time budget.
    pub fn search(&mut self, pos: &Position, side: Color) -> Analysis {
        self.search_with(pos, side, SearchOptions::default())
    }

    /// Search with caller-supplied hooks.
    pub fn search_with(&mut self, pos: &Position, side: Color, opts: SearchOptions) -> Analysis {
        let limits = SearchLimits {
            max_depth: self.config.max_depth,
            time_limit: Some(Duration::from_millis(self.config.time_limit_ms)),
        };
        let stop = opts
            .stop
            .unwrap_or_else(|| Arc::new(AtomicBool::new(false)));
        let outcome = search::run_search(
            &self.keys,
            &mut self.tt,
            &mut self.rng,
            pos,
            side,
            limits,
            &stop,
            opts.sink.as_ref(),
        );

        let time_ms = outcome.elapsed.as_millis() as u64;
        let nodes_per_second = outcome.nodes * 1000 / time_ms.max(1);
        let is_mate = outcome.score.abs() > CHECKMATE / 2;
        let mate_in_moves = is_mate.then(|| {
            let distance = (CHECKMATE - outcome.score.abs()) as u32;
            (distance + 1) / 2
        });

        let principal_variation = match &outcome.best {
            Some(best) => self.principal_variation(best, side, outcome.depth),
            None => Vec::new(),
        };

        Analysis {
            best_move: outcome.best,
            evaluation_cp: outcome.score,
            depth_reached: outcome.depth,
            principal_variation,
            nodes_searched: outcome.nodes,
            nodes_per_second,
            time_ms,
            is_mate,
            mate_in_moves,
        }
    }

    /// Follow transposition-table best turns from `best` to reconstruct the
    /// expected line. Bounded by the reached depth and cycle-guarded; the
    /// first element is always `best` itself.
    fn principal_variation(&self, best: &CompleteTurn, side: Color, depth: u32) -> Vec<String> {
        let mut pv = vec![best.notation().to_string()];
        let mut current = best.resulting_position().clone();
        let mut to_move = side.opponent();
        let mut visited = std::collections::HashSet::new();

        while pv.len() < depth.max(1) as usize {
            let hash = self.keys.hash(&current, to_move);
            if !visited.insert(hash) {
                break;
            }
            let Some(notation) = self.tt.probe(hash).and_then(|e| e.best_turn.clone()) else {
                break;
            };
            let turns = movegen::generate_turns(&current, to_move);
            let Some(turn) = turns.into_iter().find(|t| t.notation() == notation) else {
                break;
            };
            pv.push(notation);
            current = turn.into_position();
            to_move = to_move.opponent();
        }
        pv
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> EngineConfig {
        EngineConfig {
            max_depth: 2,
            time_limit_ms: 2000,
            tt_size_mb: 8,
        }
    }

    #[test]
    fn difficulty_presets_match_the_documented_budgets() {
        assert_eq!(
            Difficulty::Easy.config(),
            EngineConfig {
                max_depth: 3,
                time_limit_ms: 500,
                tt_size_mb: 32
            }
        );
        assert_eq!(Difficulty::Medium.config().max_depth, 5);
        assert_eq!(Difficulty::Hard.config().max_depth, 8);
        assert_eq!(Difficulty::Hard.config().tt_size_mb, 128);
        assert_eq!(Difficulty::Expert.config().tt_size_mb, 256);
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Expert".parse::<Difficulty>(), Ok(Difficulty::Expert));
        assert!("grandmaster".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn searches_the_initial_position() {
        let mut engine = Engine::with_seed(quick_config(), 11);
        let analysis = engine.search(&Position::initial(), Color::White);
        assert!(analysis.best_move.is_some());
        assert_eq!(analysis.depth_reached, 2);
        assert!(analysis.nodes_searched > 0);
        assert!(!analysis.is_mate);
        assert_eq!(
            analysis.principal_variation[0],
            analysis.best_move.as_ref().unwrap().notation()
        );
    }

    #[test]
    fn evaluation_formats_in_pawn_units() {
        let base = Analysis {
            best_move: None,
            evaluation_cp: 137,
            depth_reached: 3,
            principal_variation: vec![],
            nodes_searched: 0,
            nodes_per_second: 0,
            time_ms: 0,
            is_mate: false,
            mate_in_moves: None,
        };
        assert_eq!(base.format_evaluation(), "+1.37");

        let behind = Analysis {
            evaluation_cp: -250,
            ..base.clone()
        };
        assert_eq!(behind.format_evaluation(), "-2.50");

        let mate = Analysis {
            evaluation_cp: CHECKMATE - 3,
            is_mate: true,
            mate_in_moves: Some(2),
            ..base
        };
        assert_eq!(mate.format_evaluation(), "M2");
    }

    #[test]
    fn seeded_engines_agree() {
        let pos = Position::initial();
        let a = Engine::with_seed(quick_config(), 5).search(&pos, Color::White);
        let b = Engine::with_seed(quick_config(), 5).search(&pos, Color::White);
        assert_eq!(
            a.best_move.as_ref().map(|t| t.notation().to_string()),
            b.best_move.as_ref().map(|t| t.notation().to_string())
        );
        assert_eq!(a.evaluation_cp, b.evaluation_cp);
    }

    #[test]
    fn new_game_clears_cached_search_state() {
        let mut engine = Engine::with_seed(quick_config(), 5);
        let _ = engine.search(&Position::initial(), Color::White);
        engine.new_game();
        // A cleared table means the next search starts cold but still works.
        let analysis = engine.search(&Position::initial(), Color::White);
        assert!(analysis.best_move.is_some());
    }
}
