use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds the single RNG a game draws from. A fixed seed makes every random
/// decision of the run reproducible.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Seeding rng with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
