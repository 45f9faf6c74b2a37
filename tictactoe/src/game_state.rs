use std::fmt::{self, Display, Formatter};

use common::SetBits;
use engine::{Cell, GameResult, Player};

use super::{Action, BOARD_SIZE, FULL_BOARD_MASK, LINE_MASKS};

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct GameState {
    pub p1_turn_to_move: bool,
    pub p1_piece_board: u16,
    pub p2_piece_board: u16,
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

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        let bit = Action::new(row, column).square_bit();
        if self.p1_piece_board & bit != 0 {
            Cell::Occupied(Player::P1)
        } else if self.p2_piece_board & bit != 0 {
            Cell::Occupied(Player::P2)
        } else {
            Cell::Empty
        }
    }

    pub fn all_pieces(&self) -> u16 {
        self.p1_piece_board | self.p2_piece_board
    }

    pub fn empty_squares(&self) -> u16 {
        !self.all_pieces() & FULL_BOARD_MASK
    }

    pub fn is_full(&self) -> bool {
        self.all_pieces() == FULL_BOARD_MASK
    }

    pub fn number_of_pieces(&self) -> usize {
        self.all_pieces().count_ones() as usize
    }

    pub fn piece_board(&self, player: Player) -> u16 {
        match player {
            Player::P1 => self.p1_piece_board,
            Player::P2 => self.p2_piece_board,
        }
    }

    /// Squares a move may target, in row-major order. None once decided.
    pub fn playable_squares(&self) -> SetBits {
        if self.winner().is_some() {
            SetBits(0)
        } else {
            SetBits(self.empty_squares() as u64)
        }
    }

    pub fn winner(&self) -> Option<Player> {
        if Self::has_line(self.p1_piece_board) {
            Some(Player::P1)
        } else if Self::has_line(self.p2_piece_board) {
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

    pub(crate) fn place_piece(&mut self, square_bit: u16) {
        debug_assert!(self.all_pieces() & square_bit == 0);

        if self.p1_turn_to_move {
            self.p1_piece_board |= square_bit;
        } else {
            self.p2_piece_board |= square_bit;
        }

        self.p1_turn_to_move = !self.p1_turn_to_move;
    }

    /// Removes the piece of the player who moved last from `square_bit`.
    pub(crate) fn remove_piece(&mut self, square_bit: u16) {
        let last_mover = self.player_to_move().other();
        assert!(
            self.piece_board(last_mover) & square_bit != 0,
            "undo of square {:#b} which {} does not hold",
            square_bit,
            last_mover
        );

        match last_mover {
            Player::P1 => self.p1_piece_board &= !square_bit,
            Player::P2 => self.p2_piece_board &= !square_bit,
        }

        self.p1_turn_to_move = !self.p1_turn_to_move;
    }

    fn has_line(board: u16) -> bool {
        LINE_MASKS.iter().any(|&line| board & line == line)
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for column in 0..BOARD_SIZE {
            write!(f, " {}  ", column)?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{} |", row)?;
            for column in 0..BOARD_SIZE {
                let p = match self.cell(row, column) {
                    Cell::Occupied(Player::P1) => "X",
                    Cell::Occupied(Player::P2) => "O",
                    Cell::Empty => " ",
                };
                write!(f, " {} |", p)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
