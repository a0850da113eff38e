//! Sequencing for an execution context.
//!
//! `Program` is the monadic core of the effect algebra. Rust has no native
//! higher-kinded types, so the context's type constructor is exposed as the
//! generic associated type [`Program::Effect`]: `Effect<A>` is "a computation
//! in this context that eventually yields an `A`".
//!
//! Every combinator takes `Fn` closures rather than `FnOnce`: effect values
//! may be run more than once (a `Task` is re-executable and a state
//! transition is a plain function), so a continuation must be callable again
//! on each run.
//!
//! # Laws
//!
//! For any implementation `p`:
//!
//! 1. **Left Identity**: `p.chain(p.finish(a), f) == f(a)`
//! 2. **Right Identity**: `p.chain(m, |a| p.finish(a)) == m`
//! 3. **Associativity**: `p.chain(p.chain(m, f), g) == p.chain(m, |x| p.chain(f(x), g))`
//! 4. **Functor Identity**: `p.map(m, |x| x) == m`

use std::ops::ControlFlow;

/// The sequencing capability of an execution context.
///
/// # Examples
///
/// ```rust
/// use guessing_game::interpreter::{Fixture, FixtureInterpreter};
/// use guessing_game::typeclass::Program;
///
/// let program = FixtureInterpreter;
/// let doubled = program.map(program.finish(21), |value| value * 2);
/// let (result, _) = doubled.run(Fixture::default());
/// assert_eq!(result, Ok(42));
/// ```
pub trait Program {
    /// A computation in this context producing a value of type `A`.
    type Effect<A>;

    /// Lifts a value into the context without performing any effect.
    fn finish<A>(&self, value: A) -> Self::Effect<A>
    where
        A: Clone + 'static;

    /// Transforms the eventual result of `effect`.
    fn map<A, B, F>(&self, effect: Self::Effect<A>, function: F) -> Self::Effect<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static;

    /// Runs `effect`, then the computation `function` builds from its result.
    ///
    /// The second effect never starts before the first has resolved.
    fn chain<A, B, F>(&self, effect: Self::Effect<A>, function: F) -> Self::Effect<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Self::Effect<B> + 'static;

    /// Like [`Program::chain`], but discards the second result and keeps the first.
    fn chain_first<A, B, F>(&self, effect: Self::Effect<A>, function: F) -> Self::Effect<A>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> Self::Effect<B> + 'static;

    /// Repeats `step` until it breaks, without growing the stack.
    ///
    /// Starting from `seed`, each run of the loop performs the effect built
    /// by `step`: `Continue(next)` goes round again with `next`, `Break(b)`
    /// ends the loop with `b`. Use this instead of a recursive `chain` for
    /// loops with no fixed bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use guessing_game::interpreter::{Fixture, FixtureInterpreter};
    /// use guessing_game::typeclass::{Console, Program};
    ///
    /// let app = FixtureInterpreter;
    /// let count_until_stop = app.tail_rec_m(0_usize, move |seen: usize| {
    ///     app.map(app.get_line(), move |line: String| {
    ///         if line == "stop" {
    ///             ControlFlow::Break(seen)
    ///         } else {
    ///             ControlFlow::Continue(seen + 1)
    ///         }
    ///     })
    /// });
    /// let (result, _) = count_until_stop.run(Fixture::with_inputs(["a", "b", "stop"]));
    /// assert_eq!(result, Ok(2));
    /// ```
    fn tail_rec_m<S, B, F>(&self, seed: S, step: F) -> Self::Effect<B>
    where
        S: Clone + 'static,
        B: 'static,
        F: Fn(S) -> Self::Effect<ControlFlow<B, S>> + 'static;
}
