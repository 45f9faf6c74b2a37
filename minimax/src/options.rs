use engine::Score;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Alpha-beta cutoffs. Turning them off yields plain minimax with the same result.
    pub pruning: bool,
    /// Reuses scores of positions reached again by a different move order
    /// within one search. Does not change the result.
    pub transposition_table: bool,
    /// Root moves scoring within this distance of the best are reported as
    /// candidates. `Some(0)` collects exact ties.
    pub tie_tolerance: Option<Score>,
    /// Searches each root move on its own thread.
    pub parallel: bool,
}

impl SearchOptions {
    pub fn new(
        pruning: bool,
        transposition_table: bool,
        tie_tolerance: Option<Score>,
        parallel: bool,
    ) -> Self {
        Self {
            pruning,
            transposition_table,
            tie_tolerance,
            parallel,
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new(true, true, None, false)
    }
}
