//! Lines the game prints.

use super::MAX_NUMBER;

/// Printed when the guess is not a whole number.
pub const NOT_A_NUMBER: &str = "You did not enter a number";

/// Printed before the player's name is read.
pub const NAME_PROMPT: &str = "What is your name?";

/// Greets the player once their name is known.
pub fn welcome(name: &str) -> String {
    format!("Hello, {name}, welcome to the game!")
}

/// Opens a round.
pub fn guess_prompt(name: &str) -> String {
    format!("Dear {name}, please guess a number from 1 to {MAX_NUMBER}:")
}

/// Asks whether to play another round.
pub fn continue_prompt(name: &str) -> String {
    format!("Do you want to continue, {name}?")
}

/// The verdict on one round.
pub fn outcome(name: &str, target: u32, guess: Option<i64>) -> String {
    guess.map_or_else(
        || NOT_A_NUMBER.to_owned(),
        |guess| {
            if guess == i64::from(target) {
                format!("You guessed right, {name}!")
            } else {
                format!("You guessed wrong, {name}! The number was: {target}")
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, "You did not enter a number")]
    #[case(Some(3), "You guessed right, alice!")]
    #[case(Some(4), "You guessed wrong, alice! The number was: 3")]
    #[case(Some(-3), "You guessed wrong, alice! The number was: 3")]
    fn outcome_folds_the_guess(#[case] guess: Option<i64>, #[case] expected: &str) {
        assert_eq!(outcome("alice", 3, guess), expected);
    }

    #[rstest]
    fn prompts_name_the_player() {
        assert_eq!(welcome("bob"), "Hello, bob, welcome to the game!");
        assert_eq!(guess_prompt("bob"), "Dear bob, please guess a number from 1 to 5:");
        assert_eq!(continue_prompt("bob"), "Do you want to continue, bob?");
    }
}
