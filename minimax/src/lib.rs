pub mod evaluation;
pub mod options;
pub mod policy;
pub mod scoped_move;
pub mod search;
pub mod transposition;
#[cfg(test)]
mod subtraction_game;

pub use evaluation::*;
pub use options::*;
pub use policy::*;
pub use scoped_move::*;
pub use search::*;
pub use transposition::*;
