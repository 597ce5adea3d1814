use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;


/// Draws a single weight uniformly from `[-1, 1)`.
pub fn init_weight<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(-1f64..1f64)
}


/// Returns a deterministic generator for `Some(seed)` and an entropy-seeded one otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
