use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the particle engine.
///
/// The engine deliberately raises only one kind of error: asking for the
/// direction of a zero-length vector. Every other numeric degeneracy
/// (coincident centers in a collision, division by a zero scalar or mass)
/// propagates as IEEE-754 inf/NaN through the affected particle's state
/// rather than aborting the frame.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A zero-magnitude vector has no direction to normalize.
    #[error("zero magnitude vector")]
    ZeroMagnitude,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_magnitude_display() {
        assert_eq!(Error::ZeroMagnitude.to_string(), "zero magnitude vector");
    }
}
