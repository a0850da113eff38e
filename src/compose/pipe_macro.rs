//! Left-to-right function application.
//!
//! `pipe!(value, f, g, h)` evaluates to `h(g(f(value)))`. It reads in the
//! order the data flows, which is how the game's effect pipelines are laid
//! out: start from one effect, then feed it through algebra calls.

/// Applies functions to a value from left to right.
///
/// # Syntax
///
/// ```text
/// pipe!(value)                 // value
/// pipe!(value, f)              // f(value)
/// pipe!(value, f, g, ...)      // ...(g(f(value)))
/// ```
///
/// # Examples
///
/// ```
/// use guessing_game::pipe;
///
/// let greeting = pipe!(
///     "  alice ",
///     str::trim,
///     |name: &str| format!("Hello, {name}!"),
/// );
/// assert_eq!(greeting, "Hello, alice!");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
