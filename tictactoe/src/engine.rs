use common::SetBits;
use engine::{GameResult, GameRules, IllegalMoveError, Player};

use super::{Action, GameState, NUM_SQUARES};

/// Legal squares in row-major order.
#[derive(Clone, Debug)]
pub struct LegalMoves(SetBits);

impl Iterator for LegalMoves {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        self.0
            .next()
            .map(|bit| Action::from_square(bit.trailing_zeros() as usize))
    }
}

#[derive(Default)]
pub struct TicTacToeRules {}

impl TicTacToeRules {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameRules for TicTacToeRules {
    type State = GameState;
    type Action = Action;
    type Moves = LegalMoves;

    fn legal_moves(&self, game_state: &Self::State) -> Self::Moves {
        LegalMoves(game_state.playable_squares())
    }

    fn apply(
        &self,
        game_state: &mut Self::State,
        action: &Self::Action,
    ) -> Result<(), IllegalMoveError> {
        if !action.is_on_board() {
            return Err(IllegalMoveError::OutOfBounds(format!(
                "square ({}, {})",
                action.row, action.column
            )));
        }

        if game_state.result().is_over() {
            return Err(IllegalMoveError::GameOver);
        }

        if game_state.all_pieces() & action.square_bit() != 0 {
            return Err(IllegalMoveError::Occupied {
                row: action.row,
                column: action.column,
            });
        }

        game_state.place_piece(action.square_bit());
        Ok(())
    }

    fn undo(&self, game_state: &mut Self::State, action: &Self::Action) {
        assert!(action.is_on_board(), "undo of off-board action {:?}", action);
        game_state.remove_piece(action.square_bit());
    }

    fn terminal_state(&self, game_state: &Self::State) -> GameResult {
        game_state.result()
    }

    fn player_to_move(&self, game_state: &Self::State) -> Player {
        game_state.player_to_move()
    }

    fn move_number(&self, game_state: &Self::State) -> usize {
        game_state.number_of_pieces() + 1
    }

    fn max_moves(&self) -> usize {
        NUM_SQUARES
    }
}
