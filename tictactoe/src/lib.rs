pub mod action;
pub mod engine;
pub mod evaluator;
pub mod game_state;

mod constants;

use constants::*;

pub use action::*;
pub use engine::*;
pub use evaluator::*;
pub use game_state::*;
