//! Simulation core for the inkflow pipeline.
//!
//! Everything in this crate is platform-free: mesh generation, pointer
//! trajectory resampling, the per-vertex brightness/flow fields with their
//! global integrators, the stage-graph validation, and the error taxonomy.
//! The WGSL sources for the three render passes are embedded here so the
//! frontend only wires GPU resources around them.

pub mod constants;
pub mod controls;
pub mod error;
pub mod mesh;
pub mod path;
pub mod plan;
pub mod pointer;
pub mod sim;
pub mod viewport;

pub static DRAW_WGSL: &str = include_str!("../shaders/draw.wgsl");
pub static ASCII_WGSL: &str = include_str!("../shaders/ascii.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use constants::*;
pub use controls::*;
pub use error::*;
pub use mesh::*;
pub use path::*;
pub use plan::*;
pub use pointer::*;
pub use sim::*;
pub use viewport::*;
