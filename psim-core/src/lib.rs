pub mod error;
pub mod particle;
pub mod system;
pub mod vector;

pub use error::{Error, Result};
pub use particle::{Particle, ANCHOR_MASS, ANCHOR_TAG, MOVER_TAG};
pub use system::{DrawInfo, System};
pub use vector::{normalize, DVec2};
