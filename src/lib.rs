#![doc = include_str!("../README.md")]

mod backbite;
mod batch;
mod error;
mod export;
mod generator;
mod path;
mod random;
mod render;
#[cfg(feature = "wasm")]
mod wasm;

pub use backbite::backbite;
pub use batch::generate_batch;
pub use error::{Error, Result};
pub use export::{export_batch, parse_export, to_export_string};
pub use generator::{
    GeneratorParams, Sampler, Shape, generate, generate_circuit, generate_circuit_with,
    generate_path, move_budget,
};
pub use path::{Coord, GridPath};
pub use random::RandomSource;
pub use render::{RenderConfig, Renderer, SvgRenderer, render_grid};
