//! # guessing-game
//!
//! A console number-guessing game whose logic is written once, against an
//! abstract effect algebra, and run by interchangeable interpreters.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Program`](typeclass::Program) for sequencing,
//!   [`Console`](typeclass::Console) for line I/O,
//!   [`Random`](typeclass::Random) for random integers
//! - **Effects**: [`State`](effect::State) with early halt and the
//!   re-executable async [`Task`](effect::Task)
//! - **Interpreters**: a deterministic fixture interpreter for tests and a
//!   real console interpreter
//! - **Game**: [`game::main`], [`game::game_loop`], [`game::check_continue`]
//!
//! ## Feature Flags
//!
//! - `typeclass`: The effect algebra traits
//! - `compose`: The `pipe!` macro
//! - `effect`: State, the fixture interpreter and the game
//! - `async`: Task, the console interpreter and the `guessing-game` binary
//!
//! ## Example
//!
//! ```rust
//! use guessing_game::game;
//! use guessing_game::interpreter::{Fixture, FixtureInterpreter};
//!
//! let fixture = Fixture::new(["bob", "3", "n"], [4]);
//! let (result, fixture) = game::main(&FixtureInterpreter).run(fixture);
//!
//! assert_eq!(result, Ok(()));
//! assert_eq!(
//!     fixture.outputs,
//!     vec![
//!         "What is your name?",
//!         "Hello, bob, welcome to the game!",
//!         "Dear bob, please guess a number from 1 to 5:",
//!         "You guessed wrong, bob! The number was: 5",
//!         "Do you want to continue, bob?",
//!     ]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use guessing_game::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "effect")]
    pub use crate::interpreter::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "effect")]
pub mod interpreter;

#[cfg(feature = "effect")]
pub mod game;
