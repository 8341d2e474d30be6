use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use wasm_bindgen::prelude::*;

use crate::{GeneratorParams, GridPath, Sampler, Shape, export_batch, generate};

fn shape_of(circuit: bool) -> Shape {
    if circuit { Shape::Circuit } else { Shape::Path }
}

fn params_of(q: f64) -> GeneratorParams {
    GeneratorParams {
        quality: q,
        ..Default::default()
    }
}

/// Convert a GridPath to a JsValue (array of `[x, y]` pairs).
fn path_to_js(path: &GridPath) -> Result<JsValue, JsError> {
    let cells: Vec<[usize; 2]> = path.cells().iter().map(|c| [c.x, c.y]).collect();
    serde_wasm_bindgen::to_value(&cells).map_err(|e| JsError::new(&e.to_string()))
}

/// Generate a path (or circuit) on an n x n grid with the given seed.
/// Returns an array of `[x, y]` pairs directly usable in JavaScript.
#[wasm_bindgen]
pub fn generate_walk(n: u32, q: f64, seed: u64, circuit: bool) -> Result<JsValue, JsError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let path = generate(n as usize, &params_of(q), shape_of(circuit), &mut rng)
        .map_err(|e| JsError::new(&e.to_string()))?;
    path_to_js(&path)
}

/// Generate `count` walks and return them in the two-line text format.
#[wasm_bindgen]
pub fn export(n: u32, q: f64, count: u32, seed: u64, circuit: bool) -> Result<String, JsError> {
    let sampler = Sampler::new(
        n as usize,
        ChaCha20Rng::seed_from_u64(seed),
        params_of(q),
        shape_of(circuit),
    )
    .map_err(|e| JsError::new(&e.to_string()))?;
    let paths = sampler
        .take(count as usize)
        .collect::<crate::Result<Vec<_>>>()
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(export_batch(&paths))
}

/// A stateful sampler producing independent paths or circuits.
#[wasm_bindgen]
pub struct WasmSampler {
    sampler: Sampler<ChaCha20Rng>,
}

#[wasm_bindgen]
impl WasmSampler {
    /// Create a new sampler for n x n grids.
    ///
    /// `n` must be at least 2 and `q` positive. The `seed` determines the
    /// random sequence.
    #[wasm_bindgen(constructor)]
    pub fn new(n: u32, q: f64, seed: u64, circuit: bool) -> Result<WasmSampler, JsError> {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        let sampler = Sampler::new(n as usize, rng, params_of(q), shape_of(circuit))
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmSampler { sampler })
    }

    /// Get the next walk as an array of `[x, y]` pairs.
    pub fn next(&mut self) -> Result<JsValue, JsError> {
        match self.sampler.next() {
            Some(Ok(path)) => path_to_js(&path),
            Some(Err(e)) => Err(JsError::new(&e.to_string())),
            None => Err(JsError::new("sampler exhausted")),
        }
    }
}
