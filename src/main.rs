//! guessing-game
//!
//! Plays the number-guessing game on standard input and output.
//!
//! Logs go to standard error and are filtered with `RUST_LOG`
//! (default `warn`), e.g. `RUST_LOG=guessing_game=debug`.

use std::process::ExitCode;

use guessing_game::game;
use guessing_game::interpreter::{ConsoleConfig, ConsoleInterpreter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let app = ConsoleInterpreter::stdio(ConsoleConfig::default());
    match game::main(&app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "game aborted");
            ExitCode::FAILURE
        }
    }
}
