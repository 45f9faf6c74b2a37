pub const BOARD_SIZE: usize = 3;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Square index is `row * 3 + column`, bit `n` of a piece board is square `n`.
pub const FULL_BOARD_MASK: u16 = 0b111_111_111;

pub const LINE_MASKS: [u16; 8] = [
    // Rows
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    // Columns
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    // Diagonals
    0b100_010_001,
    0b001_010_100,
];
