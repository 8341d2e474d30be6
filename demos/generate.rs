//! Generate a random Hamiltonian path or circuit and print it.
//!
//! Usage: cargo run --release --example generate -- <n> [q] [seed] [--circuit] [--svg]
//!
//! Example:
//!   cargo run --release --example generate -- 8 1.0 42 --circuit

use hamiltonian_sampler::{
    GeneratorParams, RenderConfig, Renderer, Shape, SvgRenderer, generate, to_export_string,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let positional: Vec<&String> = args.iter().skip(1).filter(|s| !s.starts_with("--")).collect();

    let n: usize = positional.first().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        eprintln!("Usage: {} <n> [q] [seed] [--circuit] [--svg]", args[0]);
        std::process::exit(1);
    });
    let q: f64 = positional.get(1).and_then(|s| s.parse().ok()).unwrap_or(1.0);
    let seed: u64 = positional.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);
    let shape = if args.iter().any(|s| s == "--circuit") {
        Shape::Circuit
    } else {
        Shape::Path
    };

    let params = GeneratorParams {
        quality: q,
        ..Default::default()
    };
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let path = match generate(n, &params, shape, &mut rng) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if args.iter().any(|s| s == "--svg") {
        print!("{}", SvgRenderer.render(&path, &RenderConfig::default()));
        return;
    }

    // Grid picture: each cell shows its position along the path.
    let width = (n * n - 1).to_string().len();
    let mut order = vec![0usize; n * n];
    for (i, c) in path.cells().iter().enumerate() {
        order[c.y * n + c.x] = i;
    }
    for y in 0..n {
        for x in 0..n {
            print!("{:>width$} ", order[y * n + x]);
        }
        println!();
    }
    println!();
    print!("{}", to_export_string(&path));
}
