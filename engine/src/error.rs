/// A move the rules refuse to play. Recoverable: the driver re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveError {
    #[error("cell ({row}, {column}) is already occupied")]
    Occupied { row: usize, column: usize },

    #[error("{0} is outside of the board")]
    OutOfBounds(String),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Rejected search or difficulty settings, reported before a game starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidConfigurationError {
    #[error("max depth must be at least 1")]
    ZeroDepth,

    #[error("unsupported difficulty level {0}, expected 1, 2 or 3")]
    UnsupportedDifficulty(u8),

    #[error("probability must be within [0, 1], got {0}")]
    InvalidProbability(f32),

    #[error("human first and computer first cannot both be set")]
    ConflictingFirstMover,
}
