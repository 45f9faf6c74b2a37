use engine::{Evaluator, GameResult, GameRules, Player, Score, WIN_SCORE};

/// Score of a decided game `ply` moves below the search root. Wins closer to
/// the root score higher and losses further away score higher.
pub fn terminal_score(result: GameResult, perspective: Player, ply: usize) -> Option<Score> {
    match result {
        GameResult::InProgress => None,
        GameResult::Draw => Some(0),
        GameResult::Win(winner) => {
            let score = WIN_SCORE - ply as Score;
            if winner == perspective {
                Some(score)
            } else {
                Some(-score)
            }
        }
    }
}

/// Scores a node the search does not expand further.
pub fn leaf_score<R, E>(
    rules: &R,
    evaluator: &E,
    game_state: &R::State,
    perspective: Player,
    ply: usize,
) -> Score
where
    R: GameRules,
    E: Evaluator<State = R::State>,
{
    terminal_score(rules.terminal_state(game_state), perspective, ply)
        .unwrap_or_else(|| evaluator.evaluate(game_state, perspective))
}
