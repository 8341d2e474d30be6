use crate::backbite::backbite;
use crate::error::{Error, Result, check_quality, check_size};
use crate::random::RandomSource;
use crate::GridPath;

/// Parameters for path and circuit generation.
#[derive(Debug, Clone)]
pub struct GeneratorParams {
    /// Quality factor `q`: scales the number of backbite moves relative to
    /// the lattice cover time. Must be finite and positive.
    ///
    /// The budget is `floor(q · 10 · n² · ln²(2 + n))` attempted moves. The
    /// constant 10 was chosen by inspecting generated paths; it is a
    /// conservative heuristic, not a proven mixing time. Smaller values run
    /// faster, larger ones trade time for confidence in randomness.
    pub quality: f64,
    /// Cap on extra moves spent bringing the endpoints together in circuit
    /// generation.
    ///
    /// If `None`, uses `100 × move_budget(n, 1.0)`, but at least 10 000.
    pub max_circuit_moves: Option<u64>,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            quality: 1.0,
            max_circuit_moves: None, // auto: 100 × budget at q = 1
        }
    }
}

impl GeneratorParams {
    /// The circuit cap only matters, and is only checked, for circuits.
    pub(crate) fn validate(&self, n: usize, shape: Shape) -> Result<()> {
        check_size(n)?;
        check_quality(self.quality)?;
        if shape == Shape::Circuit && self.max_circuit_moves == Some(0) {
            return Err(Error::InvalidArgument(
                "max_circuit_moves must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn circuit_cap(&self, n: usize) -> u64 {
        self.max_circuit_moves
            .unwrap_or_else(|| (100 * raw_budget(n, 1.0)).max(10_000))
    }
}

/// Which kind of Hamiltonian walk to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Path,
    /// A path whose endpoints are as close as parity allows, so that it can
    /// be closed into a cycle.
    Circuit,
}

/// Number of backbite moves attempted by [`generate_path`]:
/// `floor(q · 10 · n² · ln²(2 + n))`.
///
/// Relaxation towards equilibrium is governed by the cover time of the
/// `n x n` grid, which is O(n² log² n).
pub fn move_budget(n: usize, q: f64) -> Result<u64> {
    check_size(n)?;
    check_quality(q)?;
    Ok(raw_budget(n, q))
}

fn raw_budget(n: usize, q: f64) -> u64 {
    let n = n as f64;
    let ln = (2.0 + n).ln();
    (q * 10.0 * n * n * ln * ln).floor() as u64
}

/// Generates an approximately uniform Hamiltonian path on the `n x n` grid.
///
/// Starts from the snake path and attempts exactly [`move_budget`] backbite
/// moves. Rejected moves count towards the budget: stopping after a number
/// of successful moves would condition on the last move succeeding and bias
/// the result. The output is deterministic given the same seed.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `n < 2` or `q` is not a finite
/// positive number.
pub fn generate_path<R: RandomSource + ?Sized>(n: usize, q: f64, rng: &mut R) -> Result<GridPath> {
    let nmoves = move_budget(n, q)?;
    let mut path = GridPath::snake(n)?;
    relax(&mut path, nmoves, rng);
    Ok(path)
}

/// Generates a Hamiltonian circuit on the `n x n` grid, using default
/// parameters apart from the quality factor.
///
/// See [`generate_circuit_with`].
pub fn generate_circuit<R: RandomSource + ?Sized>(
    n: usize,
    q: f64,
    rng: &mut R,
) -> Result<GridPath> {
    let params = GeneratorParams {
        quality: q,
        ..Default::default()
    };
    generate_circuit_with(n, &params, rng)
}

/// Generates a Hamiltonian circuit on the `n x n` grid.
///
/// Runs [`generate_path`], then keeps applying backbite moves until the
/// endpoint separation is `1 + n mod 2`: adjacent for even `n`, Manhattan
/// distance 2 for odd `n` (where no Hamiltonian cycle exists).
///
/// Circuits obtained this way are a subsample of the path ensemble and are
/// **not** uniformly distributed over circuits.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] for bad parameters and
/// [`Error::NonConvergence`] if the endpoints have not met after
/// `max_circuit_moves` extra moves.
pub fn generate_circuit_with<R: RandomSource + ?Sized>(
    n: usize,
    params: &GeneratorParams,
    rng: &mut R,
) -> Result<GridPath> {
    params.validate(n, Shape::Circuit)?;
    let mut path = generate_path(n, params.quality, rng)?;
    close_circuit(&mut path, params.circuit_cap(n), rng)?;
    Ok(path)
}

/// Generates one walk of the given shape.
pub fn generate<R: RandomSource + ?Sized>(
    n: usize,
    params: &GeneratorParams,
    shape: Shape,
    rng: &mut R,
) -> Result<GridPath> {
    match shape {
        Shape::Path => {
            params.validate(n, Shape::Path)?;
            generate_path(n, params.quality, rng)
        }
        Shape::Circuit => generate_circuit_with(n, params, rng),
    }
}

fn relax<R: RandomSource + ?Sized>(path: &mut GridPath, nmoves: u64, rng: &mut R) {
    let mut accepted = 0u64;
    for _ in 0..nmoves {
        if backbite(path, rng) {
            accepted += 1;
        }
    }
    tracing::debug!(
        n = path.n(),
        nmoves,
        accepted,
        acceptance = accepted as f64 / nmoves.max(1) as f64,
        "path relaxed"
    );
}

fn close_circuit<R: RandomSource + ?Sized>(
    path: &mut GridPath,
    cap: u64,
    rng: &mut R,
) -> Result<()> {
    let mut attempts = 0u64;
    while !path.is_circuit() {
        if attempts == cap {
            tracing::warn!(n = path.n(), attempts, "circuit did not close");
            return Err(Error::NonConvergence { attempts });
        }
        backbite(path, rng);
        attempts += 1;
    }
    tracing::debug!(n = path.n(), attempts, "circuit closed");
    Ok(())
}

/// An iterator that produces independent Hamiltonian paths or circuits.
///
/// Every item is a fresh run of the generator from the snake path, drawing
/// from the sampler's own random source.
///
/// # Example
///
/// ```
/// use hamiltonian_sampler::{GeneratorParams, Sampler, Shape};
/// use rand_chacha::ChaCha20Rng;
/// use rand::SeedableRng;
///
/// let rng = ChaCha20Rng::seed_from_u64(0);
/// let sampler = Sampler::new(6, rng, GeneratorParams::default(), Shape::Circuit).unwrap();
///
/// for path in sampler.take(3) {
///     let path = path.unwrap();
///     assert!(path.is_circuit());
/// }
/// ```
pub struct Sampler<R> {
    n: usize,
    rng: R,
    params: GeneratorParams,
    shape: Shape,
}

impl<R: RandomSource> Sampler<R> {
    /// Create a new sampler for `n x n` grids.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `n < 2` or the parameters are
    /// unusable.
    pub fn new(n: usize, rng: R, params: GeneratorParams, shape: Shape) -> Result<Self> {
        params.validate(n, shape)?;
        Ok(Self {
            n,
            rng,
            params,
            shape,
        })
    }
}

impl<R: RandomSource> Iterator for Sampler<R> {
    type Item = Result<GridPath>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(generate(self.n, &self.params, self.shape, &mut self.rng))
    }
}
