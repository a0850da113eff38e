//! Concrete bindings of the effect algebra.
//!
//! - [`FixtureInterpreter`]: pure state transitions over a scripted [`Fixture`]
//! - [`ConsoleInterpreter`]: asynchronous line I/O and a seeded or OS-seeded
//!   random source (requires the `async` feature)
//!
//! Business logic takes either one through the [`Main`](crate::typeclass::Main)
//! bound and never names it.

#[cfg(feature = "async")]
mod console;
mod fixture;

#[cfg(feature = "async")]
pub use console::{ConsoleConfig, ConsoleInterpreter, Live};
pub use fixture::{Fixture, FixtureInterpreter, Scripted};
