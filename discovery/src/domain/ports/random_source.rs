//! Port for the uniform samples used by mock data generators.

/// Supplies independent samples from `[0, 1)`.
pub trait RandomSource: Send + Sync {
    /// Draw the next sample.
    fn next_unit(&self) -> f64;
}
