use engine::{Evaluator, GameRules, GameState, Player, Score, WIN_SCORE};
use log::debug;
use rayon::prelude::*;

use super::{leaf_score, Bound, ScopedMove, SearchOptions, TranspositionEntry, TranspositionTable};

/// Bound outside every reachable score.
const INFINITY: Score = WIN_SCORE + 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<A> {
    /// `None` when the root was not expanded: depth 0, a decided game or no legal move.
    pub best_move: Option<A>,
    pub score: Score,
    /// Root moves within the tie tolerance of the best, in enumeration order.
    /// Only the best move when no tolerance was requested.
    pub candidates: Vec<A>,
    pub nodes: usize,
}

/// Depth-limited minimax with optional alpha-beta cutoffs.
///
/// Scores are always from the perspective of the `maximizing` player handed
/// to [`Minimax::search`]. The state is mutated in place and restored before
/// `search` returns. Among equally scored moves the first one enumerated
/// wins, with or without pruning.
pub struct Minimax<'a, R, E> {
    rules: &'a R,
    evaluator: &'a E,
    options: SearchOptions,
}

impl<'a, R, E> Minimax<'a, R, E>
where
    R: GameRules + Sync,
    R::State: Send + Sync,
    R::Action: Send + Sync,
    E: Evaluator<State = R::State> + Sync,
{
    pub fn new(rules: &'a R, evaluator: &'a E, options: SearchOptions) -> Self {
        Self {
            rules,
            evaluator,
            options,
        }
    }

    pub fn search(
        &self,
        game_state: &mut R::State,
        depth: usize,
        maximizing: Player,
    ) -> SearchResult<R::Action> {
        if depth == 0 || self.rules.terminal_state(game_state).is_over() {
            return self.unexpanded(game_state, maximizing);
        }

        let maximizing_to_move = self.rules.player_to_move(game_state) == maximizing;
        let mut root = RootMoves::new(maximizing_to_move, self.options.tie_tolerance);

        let nodes = if self.options.parallel {
            self.search_root_parallel(game_state, depth, maximizing, &mut root)
        } else {
            self.search_root(game_state, depth, maximizing, &mut root)
        };

        let result = match root.into_result(nodes) {
            Some(result) => result,
            None => self.unexpanded(game_state, maximizing),
        };

        debug!(
            "Searched depth {} for {}: score {}, best {:?}, {} candidates, {} nodes",
            depth,
            maximizing,
            result.score,
            result.best_move,
            result.candidates.len(),
            result.nodes
        );

        result
    }

    fn unexpanded(&self, game_state: &R::State, maximizing: Player) -> SearchResult<R::Action> {
        SearchResult {
            best_move: None,
            score: leaf_score(self.rules, self.evaluator, game_state, maximizing, 0),
            candidates: vec![],
            nodes: 1,
        }
    }

    fn search_root(
        &self,
        game_state: &mut R::State,
        depth: usize,
        maximizing: Player,
        root: &mut RootMoves<R::Action>,
    ) -> usize {
        let mut context = SearchContext::new(self.options.transposition_table);
        context.nodes = 1;

        for action in self.rules.legal_moves(game_state) {
            let (alpha, beta) = root.window();
            let score = {
                let mut child = self.play(game_state, action.clone());
                self.minimax(&mut *child, depth - 1, 1, alpha, beta, maximizing, &mut context)
            };

            root.record(action, score, alpha, beta);
        }

        if let Some(table) = &context.table {
            debug!("Transposition table held {} positions", table.len());
        }

        context.nodes
    }

    /// Every root move is searched with a full window on its own copy of the
    /// state and its own transposition table. Results are merged in
    /// enumeration order once all are done.
    fn search_root_parallel(
        &self,
        game_state: &R::State,
        depth: usize,
        maximizing: Player,
        root: &mut RootMoves<R::Action>,
    ) -> usize {
        let actions: Vec<R::Action> = self.rules.legal_moves(game_state).collect();

        let scored: Vec<(Score, usize)> = actions
            .par_iter()
            .map(|action| {
                let mut game_state = game_state.clone();
                let mut context = SearchContext::new(self.options.transposition_table);
                let mut child = self.play(&mut game_state, action.clone());
                let score = self.minimax(
                    &mut *child,
                    depth - 1,
                    1,
                    -INFINITY,
                    INFINITY,
                    maximizing,
                    &mut context,
                );
                (score, context.nodes)
            })
            .collect();

        let mut nodes = 1;
        for (action, (score, child_nodes)) in actions.into_iter().zip(scored) {
            nodes += child_nodes;
            root.record(action, score, -INFINITY, INFINITY);
        }

        nodes
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        game_state: &mut R::State,
        depth: usize,
        ply: usize,
        mut alpha: Score,
        mut beta: Score,
        maximizing: Player,
        context: &mut SearchContext<R::State>,
    ) -> Score {
        context.nodes += 1;

        if depth == 0 || self.rules.terminal_state(game_state).is_over() {
            return leaf_score(self.rules, self.evaluator, game_state, maximizing, ply);
        }

        if let Some(score) = context.lookup(game_state, depth, ply, alpha, beta) {
            return score;
        }

        let window = (alpha, beta);

        let maximizing_to_move = self.rules.player_to_move(game_state) == maximizing;
        let mut best = if maximizing_to_move {
            -INFINITY
        } else {
            INFINITY
        };

        for action in self.rules.legal_moves(game_state) {
            let score = {
                let mut child = self.play(game_state, action);
                self.minimax(&mut *child, depth - 1, ply + 1, alpha, beta, maximizing, context)
            };

            if maximizing_to_move {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.options.pruning && alpha >= beta {
                break;
            }
        }

        // Without cutoffs every child was searched, so the score is exact.
        let bound = if self.options.pruning {
            Bound::classify(best, window.0, window.1)
        } else {
            Bound::Exact
        };
        context.store(game_state, TranspositionEntry::new(depth, ply, best, bound));

        best
    }

    fn play<'s>(&self, game_state: &'s mut R::State, action: R::Action) -> ScopedMove<'s, R>
    where
        'a: 's,
    {
        ScopedMove::apply(self.rules, game_state, action)
            .unwrap_or_else(|err| panic!("Move produced by legal_moves was rejected: {}", err))
    }
}

/// Node count and transposition table for one root search, or for one root
/// move when the root is searched in parallel.
struct SearchContext<S> {
    nodes: usize,
    table: Option<TranspositionTable<S>>,
}

impl<S: GameState> SearchContext<S> {
    fn new(transposition_table: bool) -> Self {
        Self {
            nodes: 0,
            table: transposition_table.then(TranspositionTable::new),
        }
    }

    fn lookup(&self, game_state: &S, depth: usize, ply: usize, alpha: Score, beta: Score) -> Option<Score> {
        self.table
            .as_ref()?
            .get(game_state, depth, ply)?
            .cutoff(alpha, beta)
    }

    fn store(&mut self, game_state: &S, entry: TranspositionEntry) {
        if let Some(table) = &mut self.table {
            table.insert(game_state.clone(), entry);
        }
    }
}

/// Running selection at the root. Only the best move and, when a tie
/// tolerance is set, moves whose scores are known exactly are kept.
struct RootMoves<A> {
    maximizing_to_move: bool,
    tie_tolerance: Option<Score>,
    best: Option<(A, Score)>,
    exact: Vec<(A, Score)>,
}

impl<A: Clone> RootMoves<A> {
    fn new(maximizing_to_move: bool, tie_tolerance: Option<Score>) -> Self {
        Self {
            maximizing_to_move,
            tie_tolerance: tie_tolerance.map(|t| t.max(0)),
            best: None,
            exact: vec![],
        }
    }

    /// Window for the next root move. Without a tolerance a move must beat the
    /// best so far; with one, anything within the tolerance gets an exact score.
    fn window(&self) -> (Score, Score) {
        let best = match &self.best {
            Some((_, score)) => *score,
            None => return (-INFINITY, INFINITY),
        };

        let margin = self.tie_tolerance.map_or(0, |t| t.saturating_add(1));

        if self.maximizing_to_move {
            (best.saturating_sub(margin), INFINITY)
        } else {
            (-INFINITY, best.saturating_add(margin))
        }
    }

    fn record(&mut self, action: A, score: Score, alpha: Score, beta: Score) {
        if self.tie_tolerance.is_some() && alpha < score && score < beta {
            self.exact.push((action.clone(), score));
        }

        let improves = match &self.best {
            None => true,
            Some((_, best)) if self.maximizing_to_move => score > *best,
            Some((_, best)) => score < *best,
        };

        if improves {
            self.best = Some((action, score));
        }
    }

    fn into_result(self, nodes: usize) -> Option<SearchResult<A>> {
        let (best_move, score) = self.best?;

        let candidates = match self.tie_tolerance {
            None => vec![best_move.clone()],
            Some(tolerance) => self
                .exact
                .into_iter()
                .filter(|(_, s)| (s - score).abs() <= tolerance)
                .map(|(action, _)| action)
                .collect(),
        };

        Some(SearchResult {
            best_move: Some(best_move),
            score,
            candidates,
            nodes,
        })
    }
}
