pub mod bits;
pub mod config;
pub mod env;
pub mod rng;

pub use bits::*;
pub use config::*;
pub use env::*;
pub use rng::*;
