/// Search and evaluation score, always relative to a perspective player.
pub type Score = i32;

/// Magnitude of a decided game. Heuristic scores must stay well below
/// `WIN_SCORE - MAX_PLY` so they are never mistaken for a forced result.
pub const WIN_SCORE: Score = 1_000_000;

pub const MAX_PLY: usize = 64;

/// True when the score can only have come from a decided position.
pub fn is_decisive(score: Score) -> bool {
    score.abs() > WIN_SCORE - MAX_PLY as Score
}
