use std::collections::HashMap;
use std::hash::Hash;

use engine::Score;

/// How a stored score relates to the true value of the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// The search failed high; the true value is at least the score.
    Lower,
    /// The search failed low; the true value is at most the score.
    Upper,
}

impl Bound {
    /// Classifies a fail-soft result against the window the node was searched with.
    pub fn classify(score: Score, alpha: Score, beta: Score) -> Self {
        if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranspositionEntry {
    depth: usize,
    ply: usize,
    score: Score,
    bound: Bound,
}

impl TranspositionEntry {
    pub fn new(depth: usize, ply: usize, score: Score, bound: Bound) -> Self {
        Self {
            depth,
            ply,
            score,
            bound,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// The stored score when it settles a node searched with `alpha`, `beta`.
    pub fn cutoff(&self, alpha: Score, beta: Score) -> Option<Score> {
        match self.bound {
            Bound::Exact => Some(self.score),
            Bound::Lower if self.score >= beta => Some(self.score),
            Bound::Upper if self.score <= alpha => Some(self.score),
            Bound::Lower | Bound::Upper => None,
        }
    }
}

/// Positions already scored during one root search.
///
/// An entry only answers for the same remaining depth and distance from the
/// root it was stored with, so a hit returns what searching the node again
/// would have returned.
pub struct TranspositionTable<S> {
    entries: HashMap<S, TranspositionEntry>,
}

impl<S: Hash + Eq> TranspositionTable<S> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, game_state: &S, depth: usize, ply: usize) -> Option<&TranspositionEntry> {
        self.entries
            .get(game_state)
            .filter(|entry| entry.depth == depth && entry.ply == ply)
    }

    pub fn insert(&mut self, game_state: S, entry: TranspositionEntry) {
        self.entries.insert(game_state, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Hash + Eq> Default for TranspositionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_against_window() {
        assert_eq!(Bound::classify(-5, -5, 5), Bound::Upper);
        assert_eq!(Bound::classify(5, -5, 5), Bound::Lower);
        assert_eq!(Bound::classify(0, -5, 5), Bound::Exact);
    }

    #[test]
    fn test_bounds_only_cut_outside_window() {
        let lower = TranspositionEntry::new(3, 1, 10, Bound::Lower);
        assert_eq!(lower.cutoff(0, 10), Some(10));
        assert_eq!(lower.cutoff(0, 20), None);

        let upper = TranspositionEntry::new(3, 1, -10, Bound::Upper);
        assert_eq!(upper.cutoff(-10, 0), Some(-10));
        assert_eq!(upper.cutoff(-20, 0), None);

        let exact = TranspositionEntry::new(3, 1, 7, Bound::Exact);
        assert_eq!(exact.cutoff(100, 200), Some(7));
    }

    #[test]
    fn test_entry_answers_only_for_same_depth_and_ply() {
        let mut table = TranspositionTable::new();
        assert!(table.is_empty());

        table.insert("position", TranspositionEntry::new(4, 2, 1, Bound::Exact));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&"position", 4, 2).map(|e| e.score()), Some(1));
        assert!(table.get(&"position", 3, 2).is_none());
        assert!(table.get(&"position", 4, 1).is_none());
        assert!(table.get(&"other", 4, 2).is_none());
    }

    #[test]
    fn test_insert_replaces_entry() {
        let mut table = TranspositionTable::new();
        table.insert(1u64, TranspositionEntry::new(2, 1, 3, Bound::Lower));
        table.insert(1u64, TranspositionEntry::new(2, 1, 4, Bound::Exact));
        let entry = table.get(&1, 2, 1).unwrap();
        assert_eq!(entry.bound(), Bound::Exact);
        assert_eq!(entry.score(), 4);
    }
}
