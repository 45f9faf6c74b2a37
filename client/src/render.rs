use colored::{ColoredString, Colorize};
use connect4::ConnectFourRules;
use engine::{Cell, GameRules, Player};
use tictactoe::TicTacToeRules;

/// Which player the human controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seats {
    pub human: Player,
}

impl Seats {
    pub fn new(human: Player) -> Self {
        Self { human }
    }

    pub fn is_human(&self, player: Player) -> bool {
        self.human == player
    }
}

/// Cells, as `(row, column)`, of the latest human and computer moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LastMoves {
    pub human: Option<(usize, usize)>,
    pub computer: Option<(usize, usize)>,
}

/// Terminal presentation of a game.
pub trait BoardView: GameRules {
    fn name(&self) -> &'static str;

    fn intro(&self) -> &'static str;

    fn prompt(&self) -> &'static str;

    /// The cell `action` occupies right after it was applied to `game_state`.
    fn placed_cell(&self, game_state: &Self::State, action: &Self::Action) -> (usize, usize);

    fn render(&self, game_state: &Self::State, seats: &Seats, last_moves: &LastMoves) -> String;
}

struct Pieces {
    human: &'static str,
    computer: &'static str,
    empty: &'static str,
}

impl Pieces {
    fn paint(&self, cell: Cell, at: (usize, usize), seats: &Seats, last_moves: &LastMoves) -> ColoredString {
        match cell {
            Cell::Empty => self.empty.normal(),
            Cell::Occupied(player) if seats.is_human(player) => {
                let piece = self.human.red();
                if last_moves.human == Some(at) {
                    piece.bold().underline()
                } else {
                    piece
                }
            }
            Cell::Occupied(_) => {
                let piece = self.computer.yellow();
                if last_moves.computer == Some(at) {
                    piece.bold().underline()
                } else {
                    piece
                }
            }
        }
    }
}

const TIC_TAC_TOE_PIECES: Pieces = Pieces {
    human: "O",
    computer: "X",
    empty: " ",
};

const CONNECT_FOUR_PIECES: Pieces = Pieces {
    human: "R",
    computer: "Y",
    empty: ".",
};

impl BoardView for TicTacToeRules {
    fn name(&self) -> &'static str {
        "tic-tac-toe"
    }

    fn intro(&self) -> &'static str {
        "You are O. Computer is X."
    }

    fn prompt(&self) -> &'static str {
        "Enter row and col (e.g. 1 2) or q to quit: "
    }

    fn placed_cell(&self, _game_state: &Self::State, action: &Self::Action) -> (usize, usize) {
        (action.row, action.column)
    }

    fn render(&self, game_state: &Self::State, seats: &Seats, last_moves: &LastMoves) -> String {
        let mut lines = vec!["    0   1   2".to_string()];

        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|column| {
                    let cell = game_state.cell(row, column);
                    format!(
                        " {} ",
                        TIC_TAC_TOE_PIECES.paint(cell, (row, column), seats, last_moves)
                    )
                })
                .collect();
            lines.push(format!("{} |{}|", row, cells.join("|")));
        }

        lines.join("\n")
    }
}

impl BoardView for ConnectFourRules {
    fn name(&self) -> &'static str {
        "connect-four"
    }

    fn intro(&self) -> &'static str {
        "You are R. Computer is Y."
    }

    fn prompt(&self) -> &'static str {
        "Enter column (0-6) or q to quit: "
    }

    fn placed_cell(&self, game_state: &Self::State, action: &Self::Action) -> (usize, usize) {
        let column = action.column();
        (game_state.column_height(column).saturating_sub(1), column)
    }

    fn render(&self, game_state: &Self::State, seats: &Seats, last_moves: &LastMoves) -> String {
        let mut lines: Vec<String> = (0..6)
            .rev()
            .map(|row| {
                let cells: Vec<String> = (0..7)
                    .map(|column| {
                        let cell = game_state.cell(row, column);
                        CONNECT_FOUR_PIECES
                            .paint(cell, (row, column), seats, last_moves)
                            .to_string()
                    })
                    .collect();
                cells.join(" ")
            })
            .collect();

        lines.push("0 1 2 3 4 5 6".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::GameState as GameStateTrait;

    #[test]
    fn test_tic_tac_toe_pieces_follow_seats() {
        colored::control::set_override(false);
        let rules = TicTacToeRules::new();
        let mut state = tictactoe::GameState::initial();
        rules.apply(&mut state, &tictactoe::Action::new(1, 1)).unwrap();
        rules.apply(&mut state, &tictactoe::Action::new(0, 2)).unwrap();

        // Human moved first as P1
        let rendered = rules.render(&state, &Seats::new(Player::P1), &LastMoves::default());
        assert_eq!(
            rendered,
            "    0   1   2\n0 |   |   | X |\n1 |   | O |   |\n2 |   |   |   |"
        );

        let rendered = rules.render(&state, &Seats::new(Player::P2), &LastMoves::default());
        assert!(rendered.contains("1 |   | X |   |"));
    }

    #[test]
    fn test_connect_four_rows_from_top() {
        colored::control::set_override(false);
        let rules = ConnectFourRules::new();
        let mut state = connect4::GameState::initial();
        rules.apply(&mut state, &connect4::Action::DropPiece(3)).unwrap();
        rules.apply(&mut state, &connect4::Action::DropPiece(3)).unwrap();

        let rendered = rules.render(&state, &Seats::new(Player::P2), &LastMoves::default());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], ". . . . . . .");
        assert_eq!(lines[4], ". . . R . . .");
        assert_eq!(lines[5], ". . . Y . . .");
        assert_eq!(lines[6], "0 1 2 3 4 5 6");
    }

    #[test]
    fn test_placed_cell_follows_gravity() {
        let rules = ConnectFourRules::new();
        let mut state = connect4::GameState::initial();
        let action = connect4::Action::DropPiece(5);

        rules.apply(&mut state, &action).unwrap();
        assert_eq!(rules.placed_cell(&state, &action), (0, 5));

        rules.apply(&mut state, &action).unwrap();
        assert_eq!(rules.placed_cell(&state, &action), (1, 5));
    }

    #[test]
    fn test_last_moves_are_highlighted() {
        let seats = Seats::new(Player::P1);
        let last_moves = LastMoves {
            human: Some((0, 0)),
            computer: None,
        };
        let cell = Cell::Occupied(Player::P1);

        let highlighted = TIC_TAC_TOE_PIECES.paint(cell, (0, 0), &seats, &last_moves);
        let plain = TIC_TAC_TOE_PIECES.paint(cell, (2, 2), &seats, &last_moves);
        assert_ne!(highlighted, plain);
        assert_eq!(plain.fgcolor, Some(colored::Color::Red));
    }
}
