pub mod error;
pub mod evaluator;
pub mod game_result;
pub mod game_rules;
pub mod game_state;
pub mod player;
pub mod score;

pub use crate::error::*;
pub use crate::evaluator::*;
pub use crate::game_result::*;
pub use crate::game_rules::*;
pub use crate::game_state::*;
pub use crate::player::*;
pub use crate::score::*;
