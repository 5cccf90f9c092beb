//! Bounded transposition table keyed by Zobrist hash.

use std::collections::{HashMap, VecDeque};
use std::mem;

/// How a stored score relates to the true value of the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,
    LowerBound,
    UpperBound,
}

/// One cached search result.
#[derive(Clone, Debug)]
pub struct TtEntry {
    pub hash: u64,
    pub depth: u32,
    pub score: i32,
    pub bound: BoundType,
    /// Notation of the best turn found here; advisory, used only to bias
    /// move ordering on later visits.
    pub best_turn: Option<String>,
}

/// Rough per-entry footprint used to convert a megabyte budget into an
/// entry count (entry plus map/queue bookkeeping and the notation string).
const ENTRY_FOOTPRINT: usize = mem::size_of::<TtEntry>() + 64;

/// Transposition table bounded by a megabyte budget.
///
/// Same-hash replacement is depth-preferring: a shallower result never
/// overwrites a deeper one. When the table is full the oldest inserted
/// entry is evicted first.
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
    insertion_order: VecDeque<u64>,
    capacity: usize,
}

impl TranspositionTable {
    /// Create a table sized approximately `size_mb` megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let mut capacity = (size_mb * 1024 * 1024) / ENTRY_FOOTPRINT;
        if capacity == 0 {
            capacity = 1024;
        }
        TranspositionTable {
            entries: HashMap::with_capacity(capacity.min(1 << 20)),
            insertion_order: VecDeque::new(),
            capacity,
        }
    }

    /// Look up the entry for `hash`.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<&TtEntry> {
        self.entries.get(&hash)
    }

    /// Store or update an entry.
    ///
    /// An existing entry for the same hash is only overwritten when the
    /// incoming depth is greater or equal. Fresh inserts evict the oldest
    /// entry once the size bound is reached.
    pub fn store(
        &mut self,
        hash: u64,
        depth: u32,
        score: i32,
        bound: BoundType,
        best_turn: Option<String>,
    ) {
        if let Some(existing) = self.entries.get_mut(&hash) {
            if depth >= existing.depth {
                *existing = TtEntry {
                    hash,
                    depth,
                    score,
                    bound,
                    best_turn,
                };
            }
            return;
        }

        while self.entries.len() >= self.capacity {
            match self.insertion_order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }

        self.entries.insert(
            hash,
            TtEntry {
                hash,
                depth,
                score,
                bound,
                best_turn,
            },
        );
        self.insertion_order.push_back(hash);
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries the megabyte budget allows.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry; used when a new game starts.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(128)
    }
}
