//! Iterative-deepening negamax search with alpha-beta pruning, a
//! transposition table, and quiescence over capture turns.
//!
//! The search is synchronous and single-threaded. The only interruption is
//! cooperative: the deadline and the caller's stop flag are polled at every
//! node entry and before each child recursion. An interrupted depth is
//! discarded wholesale and the previous completed depth's answer stands.

use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::Rng;

use crate::constants::{CHECKMATE, INFINITY};
use crate::eval;
use crate::movegen::{self, CompleteTurn};
use crate::position::Position;
use crate::transposition_table::{BoundType, TranspositionTable};
use crate::types::Color;
use crate::zobrist::ZobristKeys;

/// Probability of swapping the chosen root move for one of the top three.
const ROOT_SHUFFLE_CHANCE: f64 = 0.2;

/// Shared slot a caller may hand in to observe the best turn after each
/// completed depth.
pub type BestTurnSink = Arc<Mutex<Option<CompleteTurn>>>;

/// Limits for one search invocation.
#[derive(Clone, Copy, Debug)]
pub struct SearchLimits {
    /// Deepest iteration to run.
    pub max_depth: u32,
    /// Wall-clock budget; `None` searches to `max_depth` uninterrupted.
    pub time_limit: Option<Duration>,
}

/// Result of a search invocation.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Best turn of the last completed depth; `None` when the side to move
    /// has no legal turn.
    pub best: Option<CompleteTurn>,
    /// Score of `best` from the side-to-move's perspective.
    pub score: i32,
    /// Last fully completed depth.
    pub depth: u32,
    /// Nodes visited, quiescence included.
    pub nodes: u64,
    /// Wall-clock time the search took.
    pub elapsed: Duration,
}

/// Per-invocation search state: borrowed engine tables plus abort tracking.
struct Searcher<'a> {
    keys: &'a ZobristKeys,
    tt: &'a mut TranspositionTable,
    rng: &'a mut StdRng,
    stop: &'a AtomicBool,
    deadline: Option<Instant>,
    aborted: bool,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    /// Sticky deadline/cancellation poll.
    fn should_abort(&mut self) -> bool {
        if self.aborted {
            return true;
        }
        if self.stop.load(Ordering::Relaxed) {
            self.aborted = true;
        } else if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.aborted = true;
            }
        }
        self.aborted
    }

    fn negamax(&mut self, pos: &Position, side: Color, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        if self.should_abort() {
            return 0;
        }
        self.nodes += 1;

        let original_alpha = alpha;
        let hash = self.keys.hash(pos, side);

        let mut tt_turn: Option<String> = None;
        if let Some(entry) = self.tt.probe(hash) {
            if entry.depth >= depth {
                match entry.bound {
                    BoundType::Exact => return entry.score,
                    BoundType::LowerBound => alpha = alpha.max(entry.score),
                    BoundType::UpperBound => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return entry.score;
                }
            }
            tt_turn = entry.best_turn.clone();
        }

        if depth == 0 {
            return self.quiescence(pos, side, alpha, beta);
        }

        let mut turns = movegen::generate_turns(pos, side);
        if turns.is_empty() {
            // No turn at all: lost, but losing later is better.
            return -CHECKMATE + depth as i32;
        }
        movegen::order_for_search(&mut turns, side);
        if let Some(notation) = &tt_turn {
            if let Some(i) = turns.iter().position(|t| t.notation() == notation) {
                turns.swap(0, i);
            }
        }

        let mut best = -INFINITY;
        let mut best_turn: Option<String> = None;
        for turn in &turns {
            if self.should_abort() {
                break;
            }
            let score =
                -self.negamax(turn.resulting_position(), side.opponent(), depth - 1, -beta, -alpha);
            if score > best {
                best = score;
                best_turn = Some(turn.notation().to_string());
            }
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }

        // A subtree cut short by the abort flag must not poison the table.
        if !self.aborted {
            let bound = if best <= original_alpha {
                BoundType::UpperBound
            } else if best >= beta {
                BoundType::LowerBound
            } else {
                BoundType::Exact
            };
            self.tt.store(hash, depth, best, bound, best_turn);
        }
        best
    }

    fn quiescence(&mut self, pos: &Position, side: Color, mut alpha: i32, beta: i32) -> i32 {
        if self.should_abort() {
            return 0;
        }
        self.nodes += 1;

        let stand_pat = eval::evaluate_for(pos, side, self.rng);
        if stand_pat >= beta {
            return stand_pat;
        }
        alpha = alpha.max(stand_pat);

        let mut captures = movegen::generate_capture_turns(pos, side);
        captures.sort_by_key(|t| Reverse(t.capture_count()));

        let mut best = stand_pat;
        for turn in &captures {
            if self.should_abort() {
                break;
            }
            let score = -self.quiescence(turn.resulting_position(), side.opponent(), -beta, -alpha);
            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// Score every root turn at `depth` with a full window. Returns `None`
    /// when the abort flag fired before the depth completed.
    fn search_root(
        &mut self,
        side: Color,
        turns: &[CompleteTurn],
        depth: u32,
    ) -> Option<Vec<(CompleteTurn, i32)>> {
        let mut alpha = -INFINITY;
        let mut scored = Vec::with_capacity(turns.len());
        for turn in turns {
            if self.should_abort() {
                return None;
            }
            let score = -self.negamax(
                turn.resulting_position(),
                side.opponent(),
                depth - 1,
                -INFINITY,
                -alpha,
            );
            if self.aborted {
                return None;
            }
            scored.push((turn.clone(), score));
            alpha = alpha.max(score);
        }
        Some(scored)
    }
}

/// Run an iterative-deepening search and return the best turn found within
/// the limits, together with search statistics.
pub fn run_search(
    keys: &ZobristKeys,
    tt: &mut TranspositionTable,
    rng: &mut StdRng,
    pos: &Position,
    side: Color,
    limits: SearchLimits,
    stop: &AtomicBool,
    sink: Option<&BestTurnSink>,
) -> SearchOutcome {
    let start = Instant::now();
    let deadline = limits.time_limit.map(|budget| start + budget);
    let root_hash = keys.hash(pos, side);

    let mut root_turns = movegen::generate_turns(pos, side);
    if root_turns.is_empty() {
        return SearchOutcome {
            best: None,
            score: -CHECKMATE,
            depth: 0,
            nodes: 0,
            elapsed: start.elapsed(),
        };
    }
    movegen::order_for_search(&mut root_turns, side);

    let mut searcher = Searcher {
        keys,
        tt,
        rng,
        stop,
        deadline,
        aborted: false,
        nodes: 0,
    };

    // Score stays neutral until a depth completes; an abort before depth 1
    // finishes must not masquerade as a mate score.
    let mut best: Option<CompleteTurn> = None;
    let mut best_score = 0;
    let mut depth_reached = 0;
    let mut last_scored: Vec<(CompleteTurn, i32)> = Vec::new();

    for depth in 1..=limits.max_depth.max(1) {
        let Some(scored) = searcher.search_root(side, &root_turns, depth) else {
            break; // aborted mid-depth; keep the previous completed result
        };

        let mut depth_best = 0usize;
        for (i, (_, score)) in scored.iter().enumerate() {
            if *score > scored[depth_best].1 {
                depth_best = i;
            }
        }
        best = Some(scored[depth_best].0.clone());
        best_score = scored[depth_best].1;
        depth_reached = depth;

        searcher.tt.store(
            root_hash,
            depth,
            best_score,
            BoundType::Exact,
            best.as_ref().map(|t| t.notation().to_string()),
        );

        if let Some(sink) = sink {
            *sink.lock() = best.clone();
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "depth {depth} best {} score {best_score} nodes {}",
            scored[depth_best].0.notation(),
            searcher.nodes
        );

        // Search the previous best first on the next iteration.
        if let Some(i) = root_turns
            .iter()
            .position(|t| t.notation() == scored[depth_best].0.notation())
        {
            root_turns.swap(0, i);
        }

        last_scored = scored;

        if best_score.abs() > CHECKMATE / 2 {
            break; // a forced finish was found; deeper search cannot help
        }
    }

    // Occasionally play one of the top three turns instead of the best, to
    // vary play between otherwise identical games.
    if last_scored.len() > 1 && searcher.rng.gen::<f64>() < ROOT_SHUFFLE_CHANCE {
        last_scored.sort_by_key(|(_, score)| Reverse(*score));
        let pick = searcher.rng.gen_range(0..last_scored.len().min(3));
        let (turn, score) = &last_scored[pick];
        best = Some(turn.clone());
        best_score = *score;
    }

    SearchOutcome {
        best,
        score: best_score,
        depth: depth_reached,
        nodes: searcher.nodes,
        elapsed: start.elapsed(),
    }
}
