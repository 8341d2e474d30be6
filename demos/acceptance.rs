//! Report the empirical backbite acceptance ratio on relaxed paths.
//!
//! Corner endpoints accept 1/3 of moves, edge endpoints 2/3 and interior
//! endpoints all of them, so the overall ratio climbs towards 1 as n grows.
//!
//! Usage: cargo run --release --example acceptance -- [moves]

use hamiltonian_sampler::{backbite, generate_path};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let moves: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    println!("{:>5} {:>10} {:>10}", "n", "accepted", "ratio");
    for n in [2usize, 3, 4, 6, 8, 16, 32, 64] {
        let mut rng = ChaCha20Rng::seed_from_u64(n as u64);
        let Ok(mut path) = generate_path(n, 1.0, &mut rng) else {
            continue;
        };
        let accepted = (0..moves).filter(|_| backbite(&mut path, &mut rng)).count();
        println!(
            "{:>5} {:>10} {:>10.4}",
            n,
            accepted,
            accepted as f64 / moves as f64
        );
    }
}
