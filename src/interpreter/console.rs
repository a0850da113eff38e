//! Interpreter performing real console I/O.
//!
//! Effects are [`Task`]s yielding `Result<A, ConsoleError>`. Output lines are
//! written and flushed one at a time; input is read one line per `get_line`,
//! after writing the prompt marker. Random draws come from a [`StdRng`],
//! seeded from the operating system unless [`ConsoleConfig::seed`] is set.
//!
//! Any read or write failure short-circuits the rest of the computation and
//! is returned as the task's result.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use futures::future;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::Mutex;

use crate::effect::{ConsoleError, Task};
use crate::typeclass::{Console, Program, Random};

/// The effect type of [`ConsoleInterpreter`].
pub type Live<A> = Task<Result<A, ConsoleError>>;

/// Settings for a [`ConsoleInterpreter`].
///
/// # Examples
///
/// ```rust
/// use guessing_game::interpreter::ConsoleConfig;
///
/// let config = ConsoleConfig::default().with_seed(7);
/// assert_eq!(config.prompt, "> ");
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Written before every read.
    pub prompt: String,
    /// Fixed seed for random draws; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_owned(),
            seed: None,
        }
    }
}

impl ConsoleConfig {
    /// Replaces the prompt marker.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Makes random draws reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

struct Shared<R, W> {
    reader: Mutex<R>,
    writer: Mutex<W>,
    rng: RefCell<StdRng>,
    prompt: String,
}

/// Interprets the effect algebra as asynchronous line I/O.
///
/// Clones share the same reader, writer and random source. The reader and
/// writer are each behind a lock, so at most one read and one write are in
/// flight; `chain` already guarantees no two effects overlap.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use guessing_game::interpreter::{ConsoleConfig, ConsoleInterpreter};
/// use guessing_game::typeclass::{Console, Program};
///
/// # futures::executor::block_on(async {
/// let app = ConsoleInterpreter::new(Cursor::new(b"bob\n".to_vec()), Vec::new(), ConsoleConfig::default());
/// let greet = app.chain(app.get_line(), {
///     let app = app.clone();
///     move |name: String| app.put_line(format!("hi {name}"))
/// });
/// assert!(greet.run().await.is_ok());
/// drop(greet);
/// let written = app.into_writer().ok().unwrap();
/// assert_eq!(String::from_utf8(written).unwrap(), "> hi bob\n");
/// # });
/// ```
pub struct ConsoleInterpreter<R, W> {
    shared: Rc<Shared<R, W>>,
}

impl<R, W> Clone for ConsoleInterpreter<R, W> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl ConsoleInterpreter<BufReader<Stdin>, Stdout> {
    /// Binds the interpreter to the process's standard input and output.
    pub fn stdio(config: ConsoleConfig) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), config)
    }
}

impl<R, W> ConsoleInterpreter<R, W>
where
    R: AsyncBufRead + Unpin + 'static,
    W: AsyncWrite + Unpin + 'static,
{
    /// Binds the interpreter to any line reader and writer.
    pub fn new(reader: R, writer: W, config: ConsoleConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            shared: Rc::new(Shared {
                reader: Mutex::new(reader),
                writer: Mutex::new(writer),
                rng: RefCell::new(rng),
                prompt: config.prompt,
            }),
        }
    }

    /// Recovers the writer once every clone of the interpreter is gone.
    ///
    /// Effects built from the interpreter hold clones of it, so they must be
    /// dropped first.
    ///
    /// # Errors
    ///
    /// Returns the interpreter back if other clones are still alive.
    pub fn into_writer(self) -> Result<W, Self> {
        Rc::try_unwrap(self.shared)
            .map(|shared| shared.writer.into_inner())
            .map_err(|shared| Self { shared })
    }
}

fn halted<A: 'static>(error: ConsoleError) -> Live<A> {
    Task::new(move || future::ready(Err(error.clone())))
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

impl<R, W> Program for ConsoleInterpreter<R, W> {
    type Effect<A> = Live<A>;

    fn finish<A>(&self, value: A) -> Live<A>
    where
        A: Clone + 'static,
    {
        Task::pure(Ok(value))
    }

    fn map<A, B, F>(&self, effect: Live<A>, function: F) -> Live<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        effect.fmap(move |result| result.map(&function))
    }

    fn chain<A, B, F>(&self, effect: Live<A>, function: F) -> Live<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Live<B> + 'static,
    {
        effect.flat_map(move |result| match result {
            Ok(value) => function(value),
            Err(error) => halted(error),
        })
    }

    fn chain_first<A, B, F>(&self, effect: Live<A>, function: F) -> Live<A>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> Live<B> + 'static,
    {
        effect.flat_map(move |result| match result {
            Ok(value) => {
                let kept = value.clone();
                function(value).fmap(move |outcome| outcome.map(|_| kept.clone()))
            }
            Err(error) => halted(error),
        })
    }

    fn tail_rec_m<S, B, F>(&self, seed: S, step: F) -> Live<B>
    where
        S: Clone + 'static,
        B: 'static,
        F: Fn(S) -> Live<ControlFlow<B, S>> + 'static,
    {
        Task::tail_rec_m(seed, move |current: S| {
            step(current).fmap(|outcome| match outcome {
                Ok(ControlFlow::Continue(next)) => ControlFlow::Continue(next),
                Ok(ControlFlow::Break(value)) => ControlFlow::Break(Ok(value)),
                Err(error) => ControlFlow::Break(Err(error)),
            })
        })
    }
}

impl<R, W> Console for ConsoleInterpreter<R, W>
where
    R: AsyncBufRead + Unpin + 'static,
    W: AsyncWrite + Unpin + 'static,
{
    fn put_line(&self, line: String) -> Live<()> {
        let shared = Rc::clone(&self.shared);
        Task::new(move || {
            let shared = Rc::clone(&shared);
            let line = line.clone();
            async move {
                tracing::debug!(line = %line, "console output");
                let mut writer = shared.writer.lock().await;
                writer.write_all(line.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
                Ok::<(), ConsoleError>(())
            }
        })
    }

    fn get_line(&self) -> Live<String> {
        let shared = Rc::clone(&self.shared);
        Task::new(move || {
            let shared = Rc::clone(&shared);
            async move {
                {
                    let mut writer = shared.writer.lock().await;
                    writer.write_all(shared.prompt.as_bytes()).await?;
                    writer.flush().await?;
                }
                let mut line = String::new();
                let read = shared.reader.lock().await.read_line(&mut line).await?;
                if read == 0 {
                    tracing::debug!("console input closed");
                    return Err(ConsoleError::InputClosed);
                }
                strip_line_ending(&mut line);
                tracing::debug!(line = %line, "console input");
                Ok::<String, ConsoleError>(line)
            }
        })
    }
}

impl<R, W> Random for ConsoleInterpreter<R, W>
where
    R: AsyncBufRead + Unpin + 'static,
    W: AsyncWrite + Unpin + 'static,
{
    fn random_int(&self, bound: u32) -> Live<u32> {
        let shared = Rc::clone(&self.shared);
        Task::new(move || {
            // [0, 0) is empty; draw from [0, 1) instead.
            let drawn = shared.rng.borrow_mut().random_range(0..bound.max(1));
            tracing::debug!(drawn, bound, "random draw");
            future::ready(Ok(drawn))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    type InMemory = ConsoleInterpreter<Cursor<Vec<u8>>, Vec<u8>>;

    fn in_memory(input: &str) -> InMemory {
        ConsoleInterpreter::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            ConsoleConfig::default().with_seed(11),
        )
    }

    fn written(app: InMemory) -> String {
        let bytes = app.into_writer().ok().expect("no clones left");
        String::from_utf8(bytes).expect("utf-8 output")
    }

    #[rstest]
    #[case("alice\n", "alice")]
    #[case("alice\r\n", "alice")]
    #[case("  alice \n", "  alice ")]
    #[case("last line without newline", "last line without newline")]
    #[case("\n", "")]
    #[tokio::test]
    async fn get_line_removes_only_the_terminator(#[case] input: &str, #[case] expected: &str) {
        let app = in_memory(input);
        let line = app.get_line().run().await;
        assert_eq!(line, Ok(expected.to_owned()));
        assert_eq!(written(app), "> ");
    }

    #[rstest]
    #[tokio::test]
    async fn get_line_at_end_of_input_is_an_error() {
        let app = in_memory("");
        assert_eq!(app.get_line().run().await, Err(ConsoleError::InputClosed));
    }

    #[rstest]
    #[tokio::test]
    async fn failure_skips_the_rest_of_the_chain() {
        let app = in_memory("");
        let program = app.chain(app.get_line(), {
            let app = app.clone();
            move |line: String| app.put_line(line)
        });
        assert_eq!(program.run().await, Err(ConsoleError::InputClosed));
        drop(program);
        assert_eq!(written(app), "> ");
    }

    #[rstest]
    #[tokio::test]
    async fn custom_prompt_is_written_before_each_read() {
        let app = ConsoleInterpreter::new(
            Cursor::new(b"a\nb\n".to_vec()),
            Vec::new(),
            ConsoleConfig::default().with_prompt("? "),
        );
        let program = app.chain(app.get_line(), {
            let app = app.clone();
            move |_: String| app.get_line()
        });
        assert_eq!(program.run().await, Ok("b".to_owned()));
        drop(program);
        let bytes = app.into_writer().ok().expect("no clones left");
        assert_eq!(bytes, b"? ? ");
    }

    #[rstest]
    #[tokio::test]
    async fn tail_rec_m_stops_on_a_failure() {
        let app = in_memory("a\nb\n");
        let program = app.tail_rec_m(0_u32, {
            let app = app.clone();
            move |seen: u32| app.map(app.get_line(), move |_: String| ControlFlow::<u32, u32>::Continue(seen + 1))
        });
        assert_eq!(program.run().await, Err(ConsoleError::InputClosed));
        drop(program);
        assert_eq!(written(app), "> > > ");
    }

    #[rstest]
    #[tokio::test]
    async fn random_int_stays_below_the_bound() {
        let app = in_memory("");
        let draw = app.random_int(5);
        for _ in 0..200 {
            let drawn = draw.run().await.expect("draws never fail");
            assert!(drawn < 5);
        }
    }

    #[rstest]
    #[tokio::test]
    async fn seeded_draws_are_reproducible() {
        let first = in_memory("");
        let second = in_memory("");
        for _ in 0..20 {
            assert_eq!(first.random_int(5).run().await, second.random_int(5).run().await);
        }
    }

    #[rstest]
    #[tokio::test]
    async fn into_writer_refuses_while_clones_are_alive() {
        let app = in_memory("");
        let clone = app.clone();
        let app = app.into_writer().err().expect("clone still alive");
        drop(clone);
        assert!(app.into_writer().is_ok());
    }
}
