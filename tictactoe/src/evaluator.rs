use engine::{Evaluator, Player, Score};

use super::{GameState, LINE_MASKS};

/// Weight of a line holding 0, 1, 2 or 3 marks of a single player.
const LINE_WEIGHTS: [Score; 4] = [0, 1, 10, 100];

/// Counts lines that are still open for one player only: two marks in an
/// otherwise empty line outweigh any number of single marks.
#[derive(Default)]
pub struct TicTacToeEvaluator {}

impl TicTacToeEvaluator {
    pub fn new() -> Self {
        Self {}
    }

    fn open_lines(own: u16, opponent: u16) -> Score {
        LINE_MASKS
            .iter()
            .filter(|&&line| opponent & line == 0)
            .map(|&line| LINE_WEIGHTS[(own & line).count_ones() as usize])
            .sum()
    }
}

impl Evaluator for TicTacToeEvaluator {
    type State = GameState;

    fn evaluate(&self, game_state: &Self::State, perspective: Player) -> Score {
        let p1 = game_state.p1_piece_board;
        let p2 = game_state.p2_piece_board;
        let score = Self::open_lines(p1, p2) - Self::open_lines(p2, p1);

        match perspective {
            Player::P1 => score,
            Player::P2 => -score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, TicTacToeRules};
    use engine::{GameRules, GameState as GameStateTrait};

    fn play(moves: &[(usize, usize)]) -> GameState {
        let rules = TicTacToeRules::new();
        let mut state = GameState::initial();
        for &(row, column) in moves {
            rules.apply(&mut state, &Action::new(row, column)).unwrap();
        }
        state
    }

    #[test]
    fn test_empty_board_is_zero() {
        let evaluator = TicTacToeEvaluator::new();
        let state = GameState::initial();
        assert_eq!(evaluator.evaluate(&state, Player::P1), 0);
        assert_eq!(evaluator.evaluate(&state, Player::P2), 0);
    }

    #[test]
    fn test_center_beats_corner_beats_edge() {
        let evaluator = TicTacToeEvaluator::new();
        let center = evaluator.evaluate(&play(&[(1, 1)]), Player::P1);
        let corner = evaluator.evaluate(&play(&[(0, 0)]), Player::P1);
        let edge = evaluator.evaluate(&play(&[(0, 1)]), Player::P1);
        assert_eq!(center, 4);
        assert_eq!(corner, 3);
        assert_eq!(edge, 2);
    }

    #[test]
    fn test_two_in_open_line_scores_high() {
        let evaluator = TicTacToeEvaluator::new();
        // X X .
        // O . .
        // O . .
        // X: row 0 (10) + column 1 (1) + diagonal (1); O: row 1, row 2, anti-diagonal
        let state = play(&[(0, 0), (1, 0), (0, 1), (2, 0)]);
        assert_eq!(evaluator.evaluate(&state, Player::P1), 9);
    }

    #[test]
    fn test_symmetric_for_both_players() {
        let evaluator = TicTacToeEvaluator::new();
        let positions = [
            vec![(1, 1)],
            vec![(1, 1), (0, 0)],
            vec![(0, 0), (1, 1), (2, 2)],
            vec![(0, 1), (1, 1), (2, 1), (0, 0)],
        ];
        for moves in positions.iter() {
            let state = play(moves);
            assert_eq!(
                evaluator.evaluate(&state, Player::P1),
                -evaluator.evaluate(&state, Player::P2)
            );
        }
    }
}
