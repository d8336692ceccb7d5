//! Prompt text helpers.

use std::fmt::Display;

/// Greeting shown once per session.
pub const WELCOME: &str = "Welcome to Tic Tac Toe!";

/// Farewell shown when the player quits.
pub const GOODBYE: &str = "Thanks for playing Tic Tac Toe! Goodbye!";

/// Shown when a square cannot be taken.
pub const INVALID_CHOICE: &str = "Sorry, that's not a valid choice.";

/// Joins choices for a prompt: `1, 2, or 3`.
///
/// Two items are joined by the word alone (`1 or 2`); the delimiter is used
/// between the others and before the word.
pub fn join_or<T: Display>(choices: &[T], delimiter: &str, word: &str) -> String {
    match choices {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} {word} {second}"),
        [head @ .., last] => {
            let head: Vec<String> = head.iter().map(ToString::to_string).collect();
            format!("{}{delimiter}{word} {last}", head.join(delimiter))
        }
    }
}
