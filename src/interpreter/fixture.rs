//! Deterministic interpreter over scripted fixtures.
//!
//! Every effect is a pure [`State`] transition over a [`Fixture`]: console
//! input comes from a queue of lines, random draws from a queue of numbers,
//! and output lines are appended to a log. Running the same computation on
//! equal fixtures always yields equal logs, so tests can assert on exact
//! output.
//!
//! When a queue runs dry the computation halts with a [`FixtureError`]; the
//! fixture handed back still holds every line printed up to that point.

use std::collections::VecDeque;
use std::ops::ControlFlow;

use crate::effect::{FixtureError, State};
use crate::typeclass::{Console, Program, Random};

/// The effect type of [`FixtureInterpreter`].
pub type Scripted<A> = State<Fixture, FixtureError, A>;

/// Scripted inputs, scripted random draws and the output log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixture {
    /// Lines returned by successive `get_line` calls, front first.
    pub inputs: VecDeque<String>,
    /// Values returned by successive `random_int` calls, front first.
    pub rng: VecDeque<u32>,
    /// Every line passed to `put_line`, in order.
    pub outputs: Vec<String>,
}

impl Fixture {
    /// Creates a fixture with the given inputs and draws and an empty log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guessing_game::interpreter::Fixture;
    ///
    /// let fixture = Fixture::new(["alice", "3", "n"], [2]);
    /// assert_eq!(fixture.inputs.len(), 3);
    /// assert_eq!(fixture.rng.front(), Some(&2));
    /// assert!(fixture.outputs.is_empty());
    /// ```
    pub fn new<I, L, R>(inputs: I, rng: R) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
        R: IntoIterator<Item = u32>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            rng: rng.into_iter().collect(),
            outputs: Vec::new(),
        }
    }

    /// Creates a fixture with inputs only.
    pub fn with_inputs<I, L>(inputs: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self::new(inputs, std::iter::empty())
    }
}

/// Interprets the effect algebra as pure transitions over a [`Fixture`].
///
/// The interpreter holds no data; all state lives in the fixture threaded
/// through the computation.
///
/// # Examples
///
/// ```rust
/// use guessing_game::interpreter::{Fixture, FixtureInterpreter};
/// use guessing_game::typeclass::{Console, Program};
///
/// let app = FixtureInterpreter;
/// let shout = app.map(app.get_line(), |line: String| line.to_uppercase());
/// let (result, fixture) = shout.run(Fixture::with_inputs(["hi"]));
/// assert_eq!(result, Ok("HI".to_string()));
/// assert!(fixture.inputs.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureInterpreter;

impl Program for FixtureInterpreter {
    type Effect<A> = Scripted<A>;

    fn finish<A>(&self, value: A) -> Scripted<A>
    where
        A: Clone + 'static,
    {
        State::pure(value)
    }

    fn map<A, B, F>(&self, effect: Scripted<A>, function: F) -> Scripted<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        effect.fmap(function)
    }

    fn chain<A, B, F>(&self, effect: Scripted<A>, function: F) -> Scripted<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Scripted<B> + 'static,
    {
        effect.flat_map(function)
    }

    fn chain_first<A, B, F>(&self, effect: Scripted<A>, function: F) -> Scripted<A>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> Scripted<B> + 'static,
    {
        effect.chain_first(function)
    }

    fn tail_rec_m<S, B, F>(&self, seed: S, step: F) -> Scripted<B>
    where
        S: Clone + 'static,
        B: 'static,
        F: Fn(S) -> Scripted<ControlFlow<B, S>> + 'static,
    {
        State::tail_rec_m(seed, step)
    }
}

impl Console for FixtureInterpreter {
    fn put_line(&self, line: String) -> Scripted<()> {
        State::modify(move |mut fixture: Fixture| {
            tracing::trace!(line = %line, "fixture output");
            fixture.outputs.push(line.clone());
            fixture
        })
    }

    fn get_line(&self) -> Scripted<String> {
        State::new(|mut fixture: Fixture| match fixture.inputs.pop_front() {
            Some(line) => {
                tracing::trace!(line = %line, "fixture input");
                (Ok(line), fixture)
            }
            None => {
                tracing::warn!("fixture has no input line left");
                (Err(FixtureError::InputExhausted), fixture)
            }
        })
    }
}

impl Random for FixtureInterpreter {
    /// Pops the next scripted draw. The draw is not checked against `bound`.
    fn random_int(&self, bound: u32) -> Scripted<u32> {
        State::new(move |mut fixture: Fixture| match fixture.rng.pop_front() {
            Some(drawn) => {
                tracing::trace!(drawn, bound, "fixture draw");
                (Ok(drawn), fixture)
            }
            None => {
                tracing::warn!(bound, "fixture has no random draw left");
                (Err(FixtureError::RandomExhausted { bound }), fixture)
            }
        })
    }
}
