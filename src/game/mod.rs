//! The number-guessing game, written once against the effect algebra.
//!
//! Nothing in here knows how effects are performed. Each function builds a
//! description of the game in the context chosen by the caller:
//!
//! ```text
//! AskName -> Greet -> GuessRound -> AskContinue -> GuessRound | Done
//! ```
//!
//! # Example
//!
//! ```rust
//! use guessing_game::game;
//! use guessing_game::interpreter::{Fixture, FixtureInterpreter};
//!
//! let (result, fixture) = game::main(&FixtureInterpreter).run(Fixture::new(["alice", "3", "n"], [2]));
//! assert_eq!(result, Ok(()));
//! assert!(fixture.outputs.contains(&"You guessed right, alice!".to_string()));
//! ```

pub mod messages;
mod parse;

pub use parse::parse_int;

use std::ops::ControlFlow;

use crate::pipe;
use crate::typeclass::{Console, Main, Program};

/// Upper end of the secret number's range, inclusive.
pub const MAX_NUMBER: u32 = 5;

/// Asks the player's name, greets them and starts the first round.
pub fn main<M>(app: &M) -> M::Effect<()>
where
    M: Main + Clone + 'static,
{
    let name = app.chain(app.put_line(messages::NAME_PROMPT.to_owned()), {
        let app = app.clone();
        move |(): ()| app.get_line()
    });
    let greeted = app.chain_first(name, {
        let app = app.clone();
        move |name: String| app.put_line(messages::welcome(&name))
    });
    app.chain(greeted, {
        let app = app.clone();
        move |name: String| game_loop(&app, name)
    })
}

/// Plays rounds until the player answers `n` to the continue prompt.
///
/// A guess that is not a whole number ends the round like a wrong guess
/// would; it is never asked again. Rounds repeat in a loop, so any number
/// of them can be played.
pub fn game_loop<M>(app: &M, name: String) -> M::Effect<()>
where
    M: Main + Clone + 'static,
{
    let round_app = app.clone();
    app.tail_rec_m((), move |(): ()| {
        let app = round_app.clone();
        app.map(round(&app, name.clone()), |again: bool| {
            if again {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
    })
}

/// One round: draw, prompt, judge the guess, then ask whether to go on.
fn round<M>(app: &M, name: String) -> M::Effect<bool>
where
    M: Main + Clone + 'static,
{
    let target = app.map(app.random_int(MAX_NUMBER), |drawn: u32| drawn.saturating_add(1));
    let prompted = app.chain_first(target, {
        let (app, name) = (app.clone(), name.clone());
        move |_: u32| app.put_line(messages::guess_prompt(&name))
    });
    let judged = app.chain(prompted, {
        let (app, name) = (app.clone(), name.clone());
        move |target: u32| {
            let name = name.clone();
            let verdict = app.map(app.get_line(), move |line: String| {
                pipe!(line.as_str(), parse_int, |guess| messages::outcome(
                    &name, target, guess
                ))
            });
            app.chain(verdict, {
                let app = app.clone();
                move |verdict: String| app.put_line(verdict)
            })
        }
    });
    let asked = app.chain(judged, {
        let app = app.clone();
        move |(): ()| app.put_line(messages::continue_prompt(&name))
    });
    app.chain(asked, {
        let app = app.clone();
        move |(): ()| check_continue(&app)
    })
}

/// Reads answers until one is `y` (true) or `n` (false), ignoring case.
///
/// Every other answer costs one line of input and is asked again, as many
/// times as it takes.
pub fn check_continue<M>(app: &M) -> M::Effect<bool>
where
    M: Program + Console + Clone + 'static,
{
    let answer_app = app.clone();
    app.tail_rec_m((), move |(): ()| {
        answer_app.map(answer_app.get_line(), |line: String| {
            match line.to_lowercase().as_str() {
                "y" => ControlFlow::Break(true),
                "n" => ControlFlow::Break(false),
                _ => ControlFlow::Continue(()),
            }
        })
    })
}
