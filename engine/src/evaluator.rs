use super::{Player, Score};

/// Static heuristic for positions where the search runs out of depth.
///
/// Implementations must be zero-sum: `evaluate(s, P1) == -evaluate(s, P2)`.
/// Decided positions are scored by the search itself, so `evaluate` is only
/// consulted for games still in progress.
pub trait Evaluator {
    type State;

    fn evaluate(&self, game_state: &Self::State, perspective: Player) -> Score;
}
