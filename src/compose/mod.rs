//! Function composition utilities.
//!
//! - [`pipe!`]: apply functions left to right (data flow style)
//!
//! # Example
//!
//! ```
//! use guessing_game::pipe;
//!
//! fn draw_to_target(drawn: u32) -> u32 { drawn + 1 }
//! fn describe(target: u32) -> String { format!("The number was: {target}") }
//!
//! assert_eq!(pipe!(4, draw_to_target, describe), "The number was: 5");
//! ```

mod pipe_macro;
