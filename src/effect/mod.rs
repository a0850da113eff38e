//! Effect types the interpreters are built from.
//!
//! - [`State`]: a pure state transition with early halt, the carrier of the
//!   fixture interpreter
//! - [`Task`]: a deferred, re-executable async computation, the carrier of
//!   the console interpreter (requires the `async` feature)
//! - [`FixtureError`], [`ConsoleError`]: the failures those interpreters report

mod error;
mod state;
#[cfg(feature = "async")]
mod task;

pub use error::{ConsoleError, FixtureError};
pub use state::State;
#[cfg(feature = "async")]
pub use task::Task;
