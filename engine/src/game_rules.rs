use std::fmt::Debug;

use super::{GameResult, GameState, IllegalMoveError, Player};

/// The capability set a two-player board game exposes to the search.
///
/// Rules are stateless; all mutable data lives in `State`, which is mutated in
/// place by `apply` and restored by `undo`.
pub trait GameRules {
    type State: GameState;
    type Action: Clone + Eq + Debug;
    type Moves: Iterator<Item = Self::Action> + Clone;

    /// Legal moves for the player to move, in a fixed order. The iterator
    /// owns a snapshot of the board so the state may be mutated while it is
    /// being consumed. Empty once the game is over.
    fn legal_moves(&self, game_state: &Self::State) -> Self::Moves;

    /// Plays `action` for the player to move. On error the state is unchanged.
    fn apply(
        &self,
        game_state: &mut Self::State,
        action: &Self::Action,
    ) -> Result<(), IllegalMoveError>;

    /// Reverts the most recent `apply` of `action`.
    ///
    /// # Panics
    /// If `action` was not the last move applied.
    fn undo(&self, game_state: &mut Self::State, action: &Self::Action);

    fn terminal_state(&self, game_state: &Self::State) -> GameResult;

    fn player_to_move(&self, game_state: &Self::State) -> Player;

    fn move_number(&self, game_state: &Self::State) -> usize;

    /// Upper bound on the number of moves in a game, which is also the depth
    /// of an exhaustive search from the initial position.
    fn max_moves(&self) -> usize;
}

/// Applies a move chosen by a human and reports the resulting game state.
pub fn apply_human_move<R: GameRules>(
    rules: &R,
    game_state: &mut R::State,
    action: &R::Action,
) -> Result<GameResult, IllegalMoveError> {
    rules.apply(game_state, action)?;
    Ok(rules.terminal_state(game_state))
}
