use engine::{
    Evaluator, GameResult, GameRules, GameState, IllegalMoveError, Player, Score,
};

/// Players alternately take 1 to 3 counters; whoever takes the last one wins.
/// Positions with a multiple of 4 counters left are lost for the player to move.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct SubtractionState {
    pub p1_turn: bool,
    pub remaining: usize,
    pub moves_played: usize,
}

impl SubtractionState {
    pub fn new(remaining: usize, p1_turn: bool) -> Self {
        Self {
            p1_turn,
            remaining,
            moves_played: 0,
        }
    }

    fn player_to_move(&self) -> Player {
        if self.p1_turn {
            Player::P1
        } else {
            Player::P2
        }
    }
}

impl GameState for SubtractionState {
    fn initial() -> Self {
        Self::new(10, true)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SubtractionAction {
    Take(usize),
}

#[derive(Clone, Debug)]
pub struct TakeMoves {
    next: usize,
    max: usize,
}

impl Iterator for TakeMoves {
    type Item = SubtractionAction;

    fn next(&mut self) -> Option<SubtractionAction> {
        if self.next > self.max {
            return None;
        }

        let action = SubtractionAction::Take(self.next);
        self.next += 1;
        Some(action)
    }
}

pub struct SubtractionRules {}

impl SubtractionRules {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameRules for SubtractionRules {
    type State = SubtractionState;
    type Action = SubtractionAction;
    type Moves = TakeMoves;

    fn legal_moves(&self, game_state: &Self::State) -> Self::Moves {
        TakeMoves {
            next: 1,
            max: game_state.remaining.min(3),
        }
    }

    fn apply(
        &self,
        game_state: &mut Self::State,
        action: &Self::Action,
    ) -> Result<(), IllegalMoveError> {
        let SubtractionAction::Take(count) = *action;

        if game_state.remaining == 0 {
            return Err(IllegalMoveError::GameOver);
        }

        if count == 0 || count > 3 || count > game_state.remaining {
            return Err(IllegalMoveError::OutOfBounds(format!("take {}", count)));
        }

        game_state.remaining -= count;
        game_state.moves_played += 1;
        game_state.p1_turn = !game_state.p1_turn;
        Ok(())
    }

    fn undo(&self, game_state: &mut Self::State, action: &Self::Action) {
        let SubtractionAction::Take(count) = *action;
        assert!(game_state.moves_played > 0, "undo without a move");

        game_state.remaining += count;
        game_state.moves_played -= 1;
        game_state.p1_turn = !game_state.p1_turn;
    }

    fn terminal_state(&self, game_state: &Self::State) -> GameResult {
        if game_state.remaining == 0 {
            GameResult::Win(game_state.player_to_move().other())
        } else {
            GameResult::InProgress
        }
    }

    fn player_to_move(&self, game_state: &Self::State) -> Player {
        game_state.player_to_move()
    }

    fn move_number(&self, game_state: &Self::State) -> usize {
        game_state.moves_played + 1
    }

    fn max_moves(&self) -> usize {
        SubtractionState::initial().remaining
    }
}

/// Knows the solution: +1 for whoever is on the winning side.
pub struct SubtractionEvaluator {}

impl SubtractionEvaluator {
    pub fn new() -> Self {
        Self {}
    }
}

impl Evaluator for SubtractionEvaluator {
    type State = SubtractionState;

    fn evaluate(&self, game_state: &Self::State, perspective: Player) -> Score {
        let to_move_wins = game_state.remaining % 4 != 0;
        let perspective_to_move = game_state.player_to_move() == perspective;

        if to_move_wins == perspective_to_move {
            1
        } else {
            -1
        }
    }
}
