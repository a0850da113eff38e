//! Task - a deferred, re-executable asynchronous computation.
//!
//! A `Task<A>` describes an asynchronous side effect without performing it.
//! Calling [`Task::run`] starts a fresh execution and returns the future for
//! it; calling it again performs the effect again. Nothing is cached between
//! runs.
//!
//! Sequencing is strict: in `task.flat_map(f)` the task built by `f` is not
//! created, let alone started, until `task` has resolved.
//!
//! # Monad Laws
//!
//! 1. **Left Identity**: `Task::pure(a).flat_map(f) == f(a)`
//! 2. **Right Identity**: `m.flat_map(Task::pure) == m`
//! 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! # Examples
//!
//! ```rust
//! use guessing_game::effect::Task;
//!
//! # futures::executor::block_on(async {
//! let task = Task::pure(10)
//!     .fmap(|value| value * 2)
//!     .flat_map(|value| Task::pure(value + 1));
//! assert_eq!(task.run().await, 21);
//! // A Task can be awaited directly, too.
//! assert_eq!(task.await, 21);
//! # });
//! ```

use std::future::{Future, IntoFuture};
use std::ops::ControlFlow;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{self, LocalBoxFuture};

/// A deferred asynchronous computation producing one `A` per run.
///
/// Tasks are single-threaded: they hold `Rc` internally and their futures are
/// not `Send`. Drive them with a current-thread runtime or a local executor.
pub struct Task<A> {
    /// Builds a new future each time the task is run.
    thunk: Rc<dyn Fn() -> LocalBoxFuture<'static, A>>,
}

impl<A> Clone for Task<A> {
    fn clone(&self) -> Self {
        Self {
            thunk: Rc::clone(&self.thunk),
        }
    }
}

impl<A: 'static> Task<A> {
    /// Creates a task from a closure that starts the computation.
    ///
    /// The closure is called once per run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use guessing_game::effect::Task;
    ///
    /// let runs = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&runs);
    /// let task = Task::new(move || {
    ///     let counter = Rc::clone(&counter);
    ///     async move {
    ///         counter.set(counter.get() + 1);
    ///         counter.get()
    ///     }
    /// });
    ///
    /// // Not executed yet
    /// assert_eq!(runs.get(), 0);
    /// futures::executor::block_on(async {
    ///     assert_eq!(task.run().await, 1);
    ///     assert_eq!(task.run().await, 2);
    /// });
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = A> + 'static,
    {
        Self {
            thunk: Rc::new(move || action().boxed_local()),
        }
    }

    /// Wraps a pure value; every run resolves immediately with a clone of it.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || future::ready(value.clone()))
    }

    /// Starts a new execution of the task.
    pub fn run(&self) -> LocalBoxFuture<'static, A> {
        (self.thunk)()
    }

    /// Transforms the result of the task.
    pub fn fmap<B, F>(self, function: F) -> Task<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        Task::new(move || {
            let pending = self.run();
            let function = Rc::clone(&function);
            async move { function(pending.await) }
        })
    }

    /// Runs the task, then the task `function` builds from its result.
    pub fn flat_map<B, F>(self, function: F) -> Task<B>
    where
        F: Fn(A) -> Task<B> + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        Task::new(move || {
            let pending = self.run();
            let function = Rc::clone(&function);
            async move {
                let next = function(pending.await);
                next.run().await
            }
        })
    }

    /// Runs the task built by `function` for its effect, keeping this task's result.
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        F: Fn(A) -> Task<B> + 'static,
        A: Clone,
        B: 'static,
    {
        let function = Rc::new(function);
        Self::new(move || {
            let pending = self.run();
            let function = Rc::clone(&function);
            async move {
                let value = pending.await;
                function(value.clone()).run().await;
                value
            }
        })
    }

    /// Runs the task built by `step` in a loop until it breaks.
    ///
    /// Each iteration's future is awaited and dropped before the next one is
    /// built, so neither the stack nor the future grows with the number of
    /// iterations. Every run starts again from `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use guessing_game::effect::Task;
    ///
    /// let sum_to_ten = Task::tail_rec_m((0, 0), |(index, total): (u32, u32)| {
    ///     Task::pure(if index > 10 {
    ///         ControlFlow::Break(total)
    ///     } else {
    ///         ControlFlow::Continue((index + 1, total + index))
    ///     })
    /// });
    /// assert_eq!(futures::executor::block_on(sum_to_ten.run()), 55);
    /// ```
    pub fn tail_rec_m<S, F>(seed: S, step: F) -> Self
    where
        S: Clone + 'static,
        F: Fn(S) -> Task<ControlFlow<A, S>> + 'static,
    {
        let step = Rc::new(step);
        Self::new(move || {
            let step = Rc::clone(&step);
            let mut current = seed.clone();
            async move {
                loop {
                    match step(current).run().await {
                        ControlFlow::Continue(next) => current = next,
                        ControlFlow::Break(value) => return value,
                    }
                }
            }
        })
    }
}

impl<A: 'static> IntoFuture for Task<A> {
    type Output = A;
    type IntoFuture = LocalBoxFuture<'static, A>;

    fn into_future(self) -> Self::IntoFuture {
        self.run()
    }
}

impl<A> std::fmt::Display for Task<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Task>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;

    fn recording(log: &Rc<RefCell<Vec<&'static str>>>, entry: &'static str) -> Task<()> {
        let log = Rc::clone(log);
        Task::new(move || {
            log.borrow_mut().push(entry);
            future::ready(())
        })
    }

    #[rstest]
    #[tokio::test]
    async fn nothing_runs_before_run_is_called() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let task = recording(&log, "effect").fmap(|()| 1);
        assert!(log.borrow().is_empty());
        assert_eq!(task.run().await, 1);
        assert_eq!(*log.borrow(), vec!["effect"]);
    }

    #[rstest]
    #[tokio::test]
    async fn flat_map_runs_effects_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let second_log = Rc::clone(&log);
        let task = recording(&log, "first").flat_map(move |()| recording(&second_log, "second"));
        task.await;
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[rstest]
    #[tokio::test]
    async fn chain_first_keeps_value_and_runs_side_effect() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let side_log = Rc::clone(&log);
        let task = Task::pure("kept").chain_first(move |_| recording(&side_log, "side"));
        assert_eq!(task.run().await, "kept");
        assert_eq!(*log.borrow(), vec!["side"]);
    }

    #[rstest]
    #[tokio::test]
    async fn each_run_repeats_the_effect() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let task = recording(&log, "tick");
        task.run().await;
        task.clone().await;
        task.run().await;
        assert_eq!(log.borrow().len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn tail_rec_m_runs_many_iterations_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let step_log = Rc::clone(&log);
        let task = Task::tail_rec_m(0_u32, move |count: u32| {
            recording(&step_log, "step").fmap(move |()| {
                if count == 199_999 {
                    ControlFlow::Break(count)
                } else {
                    ControlFlow::Continue(count + 1)
                }
            })
        });
        assert!(log.borrow().is_empty());
        assert_eq!(task.run().await, 199_999);
        assert_eq!(log.borrow().len(), 200_000);
    }

    #[rstest]
    #[tokio::test]
    async fn tail_rec_m_restarts_from_the_seed() {
        let task = Task::tail_rec_m(3_u32, |left: u32| {
            Task::pure(if left == 0 {
                ControlFlow::Break("done")
            } else {
                ControlFlow::Continue(left - 1)
            })
        });
        assert_eq!(task.run().await, "done");
        assert_eq!(task.await, "done");
    }

    #[rstest]
    fn display_is_opaque() {
        assert_eq!(format!("{}", Task::pure(1)), "<Task>");
    }
}
