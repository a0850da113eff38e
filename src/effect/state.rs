//! State Monad with early halt.
//!
//! A `State<S, E, A>` encapsulates a function `S -> (Result<A, E>, S)`: given
//! the current state it produces either a result or a halting error, and
//! always hands back the state as it stood at that point. Once a step halts,
//! every later step in the chain is skipped and the error travels to the end
//! together with the state.
//!
//! # Laws
//!
//! For non-halting computations, State satisfies the Functor and Monad laws:
//!
//! - Left Identity: `State::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(State::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! A halt is absorbing: once a step yields `Err(e)`, `flat_map` never calls
//! its continuation and the chain ends with `Err(e)`.
//!
//! # Examples
//!
//! ```rust
//! use guessing_game::effect::State;
//!
//! let pop: State<Vec<i32>, &str, i32> = State::new(|mut stack: Vec<i32>| {
//!     let popped = stack.pop().ok_or("empty");
//!     (popped, stack)
//! });
//!
//! let sum = pop.clone().flat_map(move |first| pop.clone().fmap(move |second| first + second));
//!
//! assert_eq!(sum.run(vec![1, 2, 3]), (Ok(5), vec![1]));
//! assert_eq!(sum.run(vec![1]), (Err("empty"), vec![]));
//! ```

use std::ops::ControlFlow;
use std::rc::Rc;

/// A state transition that yields `A` or halts with `E`.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `E`: The halting error type
/// - `A`: The result type
pub struct State<S, E, A> {
    /// The wrapped state transition function.
    /// Uses Rc so the same transition can be run any number of times.
    run_function: Rc<dyn Fn(S) -> (Result<A, E>, S)>,
}

impl<S, E, A> Clone for State<S, E, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, E, A> State<S, E, A>
where
    S: 'static,
    E: 'static,
    A: 'static,
{
    /// Creates a new State from a state transition function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (Result<A, E>, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Creates a State that returns `value` and leaves the state untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guessing_game::effect::State;
    ///
    /// let state: State<i32, (), &str> = State::pure("constant");
    /// assert_eq!(state.run(42), (Ok("constant"), 42));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (Ok(value.clone()), state))
    }

    /// Runs the computation from `initial_state`.
    ///
    /// Returns the outcome together with the final state. On a halt the state
    /// is the one observed by the halting step.
    pub fn run(&self, initial_state: S) -> (Result<A, E>, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and returns only the outcome.
    pub fn eval(&self, initial_state: S) -> Result<A, E> {
        let (result, _) = self.run(initial_state);
        result
    }

    /// Runs the computation and returns only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        let (_, final_state) = self.run(initial_state);
        final_state
    }

    /// Maps a function over the result of this State.
    pub fn fmap<B, F>(self, function: F) -> State<S, E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, new_state) = (original_function)(state);
            (result.map(&function), new_state)
        })
    }

    /// Chains this State with a function that produces the next State.
    ///
    /// The next State runs against the state this one left behind. If this
    /// one halts, `function` is never called.
    pub fn flat_map<B, F>(self, function: F) -> State<S, E, B>
    where
        F: Fn(A) -> State<S, E, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, intermediate_state) = (original_function)(state);
            match result {
                Ok(value) => function(value).run(intermediate_state),
                Err(error) => (Err(error), intermediate_state),
            }
        })
    }

    /// Runs the State built by `function` for its effect on the state only,
    /// keeping this State's result.
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        F: Fn(A) -> State<S, E, B> + 'static,
        A: Clone,
        B: 'static,
    {
        self.flat_map(move |value: A| {
            let kept = value.clone();
            function(value).fmap(move |_| kept.clone())
        })
    }

    /// Runs `step` in a loop, threading the state, until it breaks or halts.
    ///
    /// Each iteration runs to completion before the next one starts, so the
    /// number of iterations is not limited by the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use guessing_game::effect::State;
    ///
    /// let drain: State<Vec<i32>, (), i32> = State::tail_rec_m(0, |total: i32| {
    ///     State::new(move |mut stack: Vec<i32>| {
    ///         let next = stack
    ///             .pop()
    ///             .map_or(ControlFlow::Break(total), |top| ControlFlow::Continue(total + top));
    ///         (Ok(next), stack)
    ///     })
    /// });
    /// assert_eq!(drain.run(vec![1, 2, 3]), (Ok(6), vec![]));
    /// ```
    pub fn tail_rec_m<T, F>(seed: T, step: F) -> Self
    where
        T: Clone + 'static,
        F: Fn(T) -> State<S, E, ControlFlow<A, T>> + 'static,
    {
        Self::new(move |initial_state| {
            let mut current = seed.clone();
            let mut state = initial_state;
            loop {
                let (result, next_state) = step(current).run(state);
                state = next_state;
                match result {
                    Ok(ControlFlow::Continue(next)) => current = next,
                    Ok(ControlFlow::Break(value)) => return (Ok(value), state),
                    Err(error) => return (Err(error), state),
                }
            }
        })
    }
}

impl<S, E> State<S, E, ()>
where
    S: 'static,
    E: 'static,
{
    /// Creates a State that applies `function` to the state and yields `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guessing_game::effect::State;
    ///
    /// let push: State<Vec<i32>, (), ()> = State::modify(|mut stack: Vec<i32>| {
    ///     stack.push(7);
    ///     stack
    /// });
    /// assert_eq!(push.run(vec![]), (Ok(()), vec![7]));
    /// ```
    pub fn modify<F>(function: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| (Ok(()), function(state)))
    }
}

impl<S, E, A> std::fmt::Display for State<S, E, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pop() -> State<Vec<i32>, String, i32> {
        State::new(|mut stack: Vec<i32>| {
            let popped = stack.pop().ok_or_else(|| "empty".to_string());
            (popped, stack)
        })
    }

    #[rstest]
    fn flat_map_threads_state_between_steps() {
        let computation = pop().flat_map(|first| pop().fmap(move |second| (first, second)));
        assert_eq!(computation.run(vec![1, 2, 3]), (Ok((3, 2)), vec![1]));
    }

    #[rstest]
    fn halt_skips_the_rest_of_the_chain() {
        let computation = pop().flat_map(|_| State::modify(|_: Vec<i32>| vec![99]));
        assert_eq!(computation.run(vec![]), (Err("empty".to_string()), vec![]));
    }

    #[rstest]
    fn halt_keeps_state_observed_by_failing_step() {
        let computation = pop().flat_map(|_| pop()).flat_map(|_| pop());
        assert_eq!(computation.run(vec![5, 6]), (Err("empty".to_string()), vec![]));
    }

    #[rstest]
    fn chain_first_keeps_original_value() {
        let computation = State::<Vec<i32>, String, i32>::pure(10).chain_first(|value| {
            State::<Vec<i32>, String, ()>::modify(move |mut stack: Vec<i32>| {
                stack.push(value);
                stack
            })
        });
        assert_eq!(computation.run(vec![]), (Ok(10), vec![10]));
    }

    #[rstest]
    fn same_state_value_runs_repeatedly() {
        let computation = pop();
        assert_eq!(computation.eval(vec![1, 2]), Ok(2));
        assert_eq!(computation.eval(vec![4]), Ok(4));
        assert_eq!(computation.exec(vec![4]), Vec::<i32>::new());
    }

    fn count_down() -> State<u64, String, u64> {
        State::tail_rec_m(0_u64, |steps: u64| {
            State::new(move |remaining: u64| {
                if remaining == 0 {
                    (Ok(ControlFlow::Break(steps)), remaining)
                } else {
                    (Ok(ControlFlow::Continue(steps + 1)), remaining - 1)
                }
            })
        })
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(1_000_000, 1_000_000)]
    fn tail_rec_m_loops_without_growing_the_stack(#[case] start: u64, #[case] expected: u64) {
        assert_eq!(count_down().run(start), (Ok(expected), 0));
    }

    #[rstest]
    fn tail_rec_m_stops_at_the_first_halt() {
        let computation: State<Vec<i32>, String, ()> =
            State::tail_rec_m((), |()| pop().fmap(|_| ControlFlow::Continue(())));
        assert_eq!(computation.run(vec![1, 2]), (Err("empty".to_string()), vec![]));
    }

    #[rstest]
    fn tail_rec_m_restarts_from_the_seed_on_every_run() {
        let computation = count_down();
        assert_eq!(computation.eval(2), Ok(2));
        assert_eq!(computation.eval(5), Ok(5));
    }

    #[rstest]
    fn display_is_opaque() {
        assert_eq!(format!("{}", pop()), "<State>");
    }
}
