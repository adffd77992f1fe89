use std::io::{BufRead, IsTerminal, Write};

use inquire::{InquireError, Text, error::InquireResult};

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Ask `message` and return the answer with surrounding whitespace removed.
    fn text(&mut self, message: &str) -> InquireResult<String>;
}

/// Prompts on the controlling terminal.
///
/// When stdin is not a terminal the prompt is printed to stdout and one line is read from stdin
/// per question, so answers can be piped in.
pub struct TerminalPrompter {
    interactive: bool,
}

impl TerminalPrompter {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, message: &str) -> InquireResult<String> {
        let answer = if self.interactive {
            Text::new(message).prompt()?
        } else {
            read_line(message)?
        };

        Ok(answer.trim().to_owned())
    }
}

fn read_line(message: &str) -> InquireResult<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{message} ")?;
    stdout.flush()?;

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(InquireError::IO(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "unexpected end of input",
        )));
    }

    Ok(line)
}

/// Interpret a single-character confirmation. Only `y` (any case) means yes.
pub fn parse_yes_no(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
