//! Random number capability.

use super::Program;

/// A source of random integers in some execution context.
pub trait Random: Program {
    /// Produces an integer in `[0, bound)`.
    ///
    /// `bound` is an exclusive upper limit and must be positive.
    fn random_int(&self, bound: u32) -> Self::Effect<u32>;
}
