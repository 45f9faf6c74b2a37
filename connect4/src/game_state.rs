use std::fmt::{self, Display, Formatter};

use common::last_set_bit;
use engine::{Cell, GameResult, Player};

use super::{COLUMN_HEIGHT, COLUMN_MASK, NUM_COLUMNS, NUM_ROWS, TOP_ROW_MASK};

/// Two bitboards, one per player. Bit `7 * column + row` is the cell at
/// `column`, `row`, counting rows from the bottom:
///
/// 05  12  19  26  33  40  47
/// 04  11  18  25  32  39  46
/// 03  10  17  24  31  38  45
/// 02  09  16  23  30  37  44
/// 01  08  15  22  29  36  43
/// 00  07  14  21  28  35  42
///
/// Bits 6, 13, 20, ... stay empty.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct GameState {
    pub p1_turn_to_move: bool,
    pub p1_piece_board: u64,
    pub p2_piece_board: u64,
}

impl engine::GameState for GameState {
    fn initial() -> Self {
        GameState {
            p1_turn_to_move: true,
            p1_piece_board: 0,
            p2_piece_board: 0,
        }
    }
}

impl GameState {
    pub fn player_to_move(&self) -> Player {
        if self.p1_turn_to_move {
            Player::P1
        } else {
            Player::P2
        }
    }

    pub fn all_pieces(&self) -> u64 {
        self.p1_piece_board | self.p2_piece_board
    }

    pub fn piece_board(&self, player: Player) -> u64 {
        match player {
            Player::P1 => self.p1_piece_board,
            Player::P2 => self.p2_piece_board,
        }
    }

    /// `row` 0 is the bottom row.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        let bit = Self::cell_bit(row, column);
        if self.p1_piece_board & bit != 0 {
            Cell::Occupied(Player::P1)
        } else if self.p2_piece_board & bit != 0 {
            Cell::Occupied(Player::P2)
        } else {
            Cell::Empty
        }
    }

    pub fn cell_bit(row: usize, column: usize) -> u64 {
        1 << (COLUMN_HEIGHT * column + row)
    }

    pub fn column_mask(column: usize) -> u64 {
        COLUMN_MASK << (COLUMN_HEIGHT * column)
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.all_pieces() & Self::column_mask(column) & TOP_ROW_MASK != 0
    }

    /// Number of discs already in `column`, which is also the row the next disc lands on.
    pub fn column_height(&self, column: usize) -> usize {
        (self.all_pieces() & Self::column_mask(column)).count_ones() as usize
    }

    pub fn is_full(&self) -> bool {
        self.all_pieces() & TOP_ROW_MASK == TOP_ROW_MASK
    }

    pub fn number_of_pieces(&self) -> usize {
        self.all_pieces().count_ones() as usize
    }

    /// Drops a disc for the player to move. The column must not be full.
    pub(crate) fn drop_piece(&mut self, column: usize) {
        debug_assert!(!self.is_column_full(column));

        let column_adder = 1 << (COLUMN_HEIGHT * column);
        let all_pieces = self.all_pieces();
        let dropped_piece = (all_pieces + column_adder) & !all_pieces;

        if self.p1_turn_to_move {
            self.p1_piece_board |= dropped_piece;
        } else {
            self.p2_piece_board |= dropped_piece;
        }

        self.p1_turn_to_move = !self.p1_turn_to_move;
    }

    /// Lifts the top disc out of `column`, which must belong to the player who moved last.
    pub(crate) fn lift_piece(&mut self, column: usize) {
        let in_column = self.all_pieces() & Self::column_mask(column);
        assert!(in_column != 0, "undo of a drop into empty column {}", column);

        let top_piece = last_set_bit(in_column);
        let last_mover = self.player_to_move().other();
        assert!(
            self.piece_board(last_mover) & top_piece != 0,
            "undo of column {} whose top disc is not {}'s",
            column,
            last_mover
        );

        match last_mover {
            Player::P1 => self.p1_piece_board &= !top_piece,
            Player::P2 => self.p2_piece_board &= !top_piece,
        }

        self.p1_turn_to_move = !self.p1_turn_to_move;
    }

    pub fn winner(&self) -> Option<Player> {
        if Self::has_connected_4(self.p1_piece_board) {
            Some(Player::P1)
        } else if Self::has_connected_4(self.p2_piece_board) {
            Some(Player::P2)
        } else {
            None
        }
    }

    pub fn result(&self) -> GameResult {
        match self.winner() {
            Some(player) => GameResult::Win(player),
            None if self.is_full() => GameResult::Draw,
            None => GameResult::InProgress,
        }
    }

    fn has_connected_4(board: u64) -> bool {
        // Diagonal, down-right
        let c2 = board & (board << 6);
        if c2 & (c2 << (2 * 6)) != 0 {
            return true;
        }

        // Horizontal
        let c2 = board & (board << 7);
        if c2 & (c2 << (2 * 7)) != 0 {
            return true;
        }

        // Diagonal, up-right
        let c2 = board & (board << 8);
        if c2 & (c2 << (2 * 8)) != 0 {
            return true;
        }

        // Vertical
        let c2 = board & (board << 1);
        if c2 & (c2 << 2) != 0 {
            return true;
        }

        false
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "   +---+---+---+---+---+---+---+")?;

        for row in (0..NUM_ROWS).rev() {
            write!(f, "   |")?;
            for column in 0..NUM_COLUMNS {
                let p = match self.cell(row, column) {
                    Cell::Occupied(Player::P1) => "X",
                    Cell::Occupied(Player::P2) => "O",
                    Cell::Empty => " ",
                };
                write!(f, " {} |", p)?;
            }
            writeln!(f)?;
            if row != 0 {
                writeln!(f, "   |---+---+---+---+---+---+---|")?;
            }
        }

        writeln!(f, "   +---+---+---+---+---+---+---+")?;
        writeln!(f, "     0   1   2   3   4   5   6  ")?;

        Ok(())
    }
}
