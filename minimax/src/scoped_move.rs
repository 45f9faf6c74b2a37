use std::ops::{Deref, DerefMut};

use engine::{GameRules, IllegalMoveError};

/// A move applied to a borrowed state for as long as the guard lives.
/// Dropping the guard undoes the move, including on early returns and unwinding.
pub struct ScopedMove<'a, R: GameRules> {
    rules: &'a R,
    game_state: &'a mut R::State,
    action: R::Action,
}

impl<'a, R: GameRules> ScopedMove<'a, R> {
    pub fn apply(
        rules: &'a R,
        game_state: &'a mut R::State,
        action: R::Action,
    ) -> Result<Self, IllegalMoveError> {
        rules.apply(game_state, &action)?;

        Ok(Self {
            rules,
            game_state,
            action,
        })
    }

    pub fn action(&self) -> &R::Action {
        &self.action
    }
}

impl<'a, R: GameRules> Deref for ScopedMove<'a, R> {
    type Target = R::State;

    fn deref(&self) -> &Self::Target {
        self.game_state
    }
}

impl<'a, R: GameRules> DerefMut for ScopedMove<'a, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.game_state
    }
}

impl<'a, R: GameRules> Drop for ScopedMove<'a, R> {
    fn drop(&mut self) {
        self.rules.undo(self.game_state, &self.action);
    }
}
