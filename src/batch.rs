//! Parallel generation of independent paths.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

use crate::error::Result;
use crate::generator::{GeneratorParams, Shape, generate};
use crate::GridPath;

/// Generates `count` independent walks in parallel.
///
/// Item `i` draws from its own `ChaCha20Rng` seeded with `seed` on stream
/// `i`, so the result depends only on the arguments and not on how work is
/// scheduled across threads.
pub fn generate_batch(
    n: usize,
    params: &GeneratorParams,
    shape: Shape,
    count: usize,
    seed: u64,
) -> Result<Vec<GridPath>> {
    params.validate(n, shape)?;
    let paths = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            rng.set_stream(i as u64);
            generate(n, params, shape, &mut rng)
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(n, count, ?shape, "batch generated");
    Ok(paths)
}
