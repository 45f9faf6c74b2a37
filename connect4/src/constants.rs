pub const NUM_COLUMNS: usize = 7;
pub const NUM_ROWS: usize = 6;
pub const LINE_LENGTH: usize = 4;

/// Bits per column on the piece boards: six rows plus an always-empty sentinel
/// bit that stops runs from wrapping into the next column.
pub const COLUMN_HEIGHT: usize = NUM_ROWS + 1;

pub const COLUMN_MASK: u64 = 0b0111111;
pub const TOP_ROW_MASK: u64 = 0b0100000_0100000_0100000_0100000_0100000_0100000_0100000;

/// Center columns first; better moves early make alpha-beta cut more.
pub const MOVE_ORDER: [usize; NUM_COLUMNS] = [3, 2, 4, 1, 5, 0, 6];

pub const CENTER_COLUMN: usize = NUM_COLUMNS / 2;
