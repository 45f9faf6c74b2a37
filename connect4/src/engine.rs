use engine::{GameResult, GameRules, IllegalMoveError, Player};

use super::{Action, GameState, MOVE_ORDER, NUM_COLUMNS, NUM_ROWS};

/// Open columns, center first.
#[derive(Clone, Debug)]
pub struct LegalMoves {
    open_columns: [bool; NUM_COLUMNS],
    index: usize,
}

impl Iterator for LegalMoves {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        while self.index < MOVE_ORDER.len() {
            let column = MOVE_ORDER[self.index];
            self.index += 1;

            if self.open_columns[column] {
                return Some(Action::DropPiece(column));
            }
        }

        None
    }
}

#[derive(Default)]
pub struct ConnectFourRules {}

impl ConnectFourRules {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameRules for ConnectFourRules {
    type State = GameState;
    type Action = Action;
    type Moves = LegalMoves;

    fn legal_moves(&self, game_state: &Self::State) -> Self::Moves {
        let mut open_columns = [false; NUM_COLUMNS];

        if game_state.winner().is_none() {
            for (column, open) in open_columns.iter_mut().enumerate() {
                *open = !game_state.is_column_full(column);
            }
        }

        LegalMoves {
            open_columns,
            index: 0,
        }
    }

    fn apply(
        &self,
        game_state: &mut Self::State,
        action: &Self::Action,
    ) -> Result<(), IllegalMoveError> {
        let column = action.column();

        if column >= NUM_COLUMNS {
            return Err(IllegalMoveError::OutOfBounds(format!("column {}", column)));
        }

        if game_state.result().is_over() {
            return Err(IllegalMoveError::GameOver);
        }

        if game_state.is_column_full(column) {
            return Err(IllegalMoveError::ColumnFull(column));
        }

        game_state.drop_piece(column);
        Ok(())
    }

    fn undo(&self, game_state: &mut Self::State, action: &Self::Action) {
        let column = action.column();
        assert!(column < NUM_COLUMNS, "undo of off-board action {:?}", action);
        game_state.lift_piece(column);
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
        NUM_COLUMNS * NUM_ROWS
    }
}
