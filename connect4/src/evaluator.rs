use engine::{Evaluator, Player, Score};
use itertools::iproduct;

use super::{GameState, CENTER_COLUMN, LINE_LENGTH, NUM_COLUMNS, NUM_ROWS};

/// Weight of a window holding 0 to 4 discs of a single player.
const WINDOW_WEIGHTS: [Score; LINE_LENGTH + 1] = [0, 1, 10, 100, 1000];

const CENTER_DISC_WEIGHT: Score = 3;

/// Scores every four-cell window that only one player occupies, plus a bonus
/// for discs in the center column.
pub struct ConnectFourEvaluator {
    windows: Vec<u64>,
}

impl Default for ConnectFourEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectFourEvaluator {
    pub fn new() -> Self {
        let last_start_column = NUM_COLUMNS - LINE_LENGTH;
        let last_start_row = NUM_ROWS - LINE_LENGTH;

        let horizontal = iproduct!(0..=last_start_column, 0..NUM_ROWS)
            .map(|(column, row)| Self::window(column, row, 1, 0));
        let vertical = iproduct!(0..NUM_COLUMNS, 0..=last_start_row)
            .map(|(column, row)| Self::window(column, row, 0, 1));
        let up_right = iproduct!(0..=last_start_column, 0..=last_start_row)
            .map(|(column, row)| Self::window(column, row, 1, 1));
        let down_right = iproduct!(0..=last_start_column, LINE_LENGTH - 1..NUM_ROWS)
            .map(|(column, row)| Self::window(column, row, 1, -1));

        let windows = horizontal
            .chain(vertical)
            .chain(up_right)
            .chain(down_right)
            .collect();

        Self { windows }
    }

    pub fn windows(&self) -> &[u64] {
        &self.windows
    }

    fn window(column: usize, row: usize, column_step: isize, row_step: isize) -> u64 {
        (0..LINE_LENGTH as isize).fold(0, |mask, i| {
            let column = (column as isize + i * column_step) as usize;
            let row = (row as isize + i * row_step) as usize;
            mask | GameState::cell_bit(row, column)
        })
    }

    fn open_windows(&self, own: u64, opponent: u64) -> Score {
        self.windows
            .iter()
            .filter(|&&window| opponent & window == 0)
            .map(|&window| WINDOW_WEIGHTS[(own & window).count_ones() as usize])
            .sum()
    }

    fn center_discs(board: u64) -> Score {
        (board & GameState::column_mask(CENTER_COLUMN)).count_ones() as Score
    }
}

impl Evaluator for ConnectFourEvaluator {
    type State = GameState;

    fn evaluate(&self, game_state: &Self::State, perspective: Player) -> Score {
        let p1 = game_state.p1_piece_board;
        let p2 = game_state.p2_piece_board;

        let windows = self.open_windows(p1, p2) - self.open_windows(p2, p1);
        let center = (Self::center_discs(p1) - Self::center_discs(p2)) * CENTER_DISC_WEIGHT;
        let score = windows + center;

        match perspective {
            Player::P1 => score,
            Player::P2 => -score,
        }
    }
}
