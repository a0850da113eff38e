//! The effect algebra.
//!
//! Business logic depends only on these traits; an interpreter supplies the
//! concrete execution strategy.
//!
//! - [`Program`]: `finish`, `map`, `chain`, `chain_first`, `tail_rec_m`
//! - [`Console`]: `put_line`, `get_line`
//! - [`Random`]: `random_int`
//! - [`Main`]: all of the above
//!
//! # Example
//!
//! ```rust
//! use guessing_game::typeclass::{Console, Program};
//!
//! fn greet<P: Console>(program: &P, name: &str) -> P::Effect<()> {
//!     program.put_line(format!("Hello, {name}!"))
//! }
//! ```

mod console;
mod program;
mod random;

pub use console::Console;
pub use program::Program;
pub use random::Random;

/// Every capability the game needs, bundled.
///
/// Implemented automatically for any type providing the three capabilities.
pub trait Main: Program + Console + Random {}

impl<T> Main for T where T: Program + Console + Random {}
