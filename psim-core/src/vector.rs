//! Double-precision 2D vector support.
//!
//! The engine works in `f64` throughout, so [`glam::DVec2`] is the working
//! vector type: arithmetic operators, `length`, `distance` and `dot` all come
//! from glam, copy by value and never mutate the receiver. This module adds
//! the one operation the engine needs a different contract for: a fallible
//! `normalize` that fails only on an exactly-zero magnitude.

use crate::error::{Error, Result};

pub use glam::DVec2;

/// Returns the unit vector pointing along `v`.
///
/// Fails with [`Error::ZeroMagnitude`] iff `v.length() == 0.0` exactly, with
/// no epsilon tolerance. glam's `try_normalize` is not used here: the engine
/// contract is an error, not an `Option`, and the quotient form `v / mag`
/// keeps the arithmetic identical to the rest of the engine.
pub fn normalize(v: DVec2) -> Result<DVec2> {
    let mag = v.length();
    if mag == 0.0 {
        return Err(Error::ZeroMagnitude);
    }
    Ok(v / mag)
}
