//! Line-oriented console capability.

use super::Program;

/// Line input and output in some execution context.
///
/// # Examples
///
/// ```rust
/// use guessing_game::interpreter::{Fixture, FixtureInterpreter};
/// use guessing_game::typeclass::{Console, Program};
///
/// let console = FixtureInterpreter;
/// let echo = console.chain(console.get_line(), move |line| console.put_line(line));
/// let (_, fixture) = echo.run(Fixture::with_inputs(["hello"]));
/// assert_eq!(fixture.outputs, vec!["hello".to_string()]);
/// ```
pub trait Console: Program {
    /// Emits one line.
    fn put_line(&self, line: String) -> Self::Effect<()>;

    /// Reads one line, exactly as the source supplied it.
    fn get_line(&self) -> Self::Effect<String>;
}
