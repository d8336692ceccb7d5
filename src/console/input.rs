//! Line-based keyboard input.

use super::prompt::{INVALID_CHOICE, join_or};
use std::io::{BufRead, Write};
use tictactoe_engine::{BoardError, HumanInput, InputError, Position};
use tracing::{debug, instrument, warn};

/// Reads answers line by line and writes prompts to `output`.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates console input over a reader and a prompt writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks a yes/no question until the answer is `y` or `n`.
    #[instrument(skip(self))]
    pub fn confirm(&mut self, question: &str) -> Result<bool, InputError> {
        loop {
            let answer = self.ask(&format!("{question} (y or n): "))?;
            match answer.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.output, "Invalid input!")?,
            }
        }
    }

    /// Writes the prompt and returns the trimmed answer.
    fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::new("Input closed"));
        }
        let answer = line.trim().to_string();
        debug!(%answer, "Read answer");
        Ok(answer)
    }
}

impl<R: BufRead, W: Write> HumanInput for ConsoleInput<R, W> {
    fn request_position(&mut self, valid: &[Position]) -> Result<usize, InputError> {
        let prompt = format!("Choose a square ({}): ", join_or(valid, ", ", "or"));
        loop {
            let answer = self.ask(&prompt)?;
            match answer.parse::<usize>() {
                Ok(number) => return Ok(number),
                Err(_) => writeln!(self.output, "{INVALID_CHOICE}\n")?,
            }
        }
    }

    fn reject(&mut self, _requested: usize, _reason: &BoardError) {
        if let Err(e) = writeln!(self.output, "{INVALID_CHOICE}\n") {
            warn!(error = %e, "Failed to write rejection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(script: &str) -> ConsoleInput<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleInput::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_lists_valid_squares() {
        let mut input = console("3\n");
        let valid = [Position::TopLeft, Position::TopCenter, Position::TopRight];
        assert_eq!(input.request_position(&valid).unwrap(), 3);
        let shown = String::from_utf8(input.output).unwrap();
        assert_eq!(shown, "Choose a square (1, 2, or 3): ");
    }

    #[test]
    fn test_non_numeric_answer_reprompts() {
        let mut input = console("abc\n 7 \n");
        assert_eq!(input.request_position(&[Position::BottomLeft]).unwrap(), 7);
        let shown = String::from_utf8(input.output).unwrap();
        assert!(shown.contains(INVALID_CHOICE));
        assert_eq!(shown.matches("Choose a square (7): ").count(), 2);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_reject_writes_invalid_choice() {
        let mut input = console("");
        input.reject(5, &BoardError::CellOccupied(Position::Center));
        let shown = String::from_utf8(input.output).unwrap();
        assert_eq!(shown, format!("{INVALID_CHOICE}\n\n"));
    }

    #[test]
    fn test_reject_survives_write_failure() {
        let mut input = ConsoleInput::new(Cursor::new(Vec::new()), BrokenPipe);
        input.reject(10, &BoardError::InvalidPosition(10));
        assert!(input.request_position(&[Position::Center]).is_err());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut input = console("");
        assert!(input.request_position(&[Position::Center]).is_err());
    }

    #[test]
    fn test_confirm() {
        let mut input = console("maybe\nY\n");
        assert!(input.confirm("Play again?").unwrap());
        let shown = String::from_utf8(input.output).unwrap();
        assert!(shown.contains("Invalid input!"));

        let mut input = console("n\n");
        assert!(!input.confirm("Play again?").unwrap());
    }
}
