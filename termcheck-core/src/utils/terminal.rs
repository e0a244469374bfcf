//! # Terminal Input Helper
//!
//! [`Terminal`] binds an input source, the normal output channel and the
//! error channel together, and exposes the age and full name loops as
//! methods.
//!
//! Prompts go to the output channel; full name diagnostics go to the error
//! channel so they stay distinguishable when both end up on one screen.
//!
//! ## Usage
//!
//! ### Example 1: Real terminal
//! ```rust,no_run
//! use termcheck_core::{AgeStrategy, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let age = terminal.ask_age(AgeStrategy::Token)?;
//! println!("Age: {}", age);
//! # Ok::<(), termcheck_core::InputError>(())
//! ```
//!
//! ### Example 2: Scripted input
//! ```rust
//! use std::io::Cursor;
//! use termcheck_core::{LineScanner, Terminal};
//!
//! let input = LineScanner::new(Cursor::new("John\nJohn Smith\n"));
//! let mut terminal = Terminal::new(input, Vec::new(), Vec::new());
//!
//! let name = terminal.ask_full_name().unwrap();
//! assert_eq!(name.as_str(), "John Smith");
//!
//! let (_, _, err) = terminal.into_parts();
//! assert_eq!(err, b"\tError: Name must include a space.\n");
//! ```

use crate::utils::{
    age::{Age, AgeStrategy, read_age},
    input::{InputError, InputSource, LineScanner},
    name::{FullName, read_full_name},
};
use std::io::{self, Stderr, StdinLock, Stdout, Write};

/// Repeatedly asks the user for input until it passes validation.
#[derive(Debug)]
pub struct Terminal<I, O, E> {
    input: I,
    out: O,
    err: E,
}

impl Terminal<LineScanner<StdinLock<'static>>, Stdout, Stderr> {
    /// A terminal on the process' stdin, stdout and stderr.
    ///
    /// Holds the stdin lock for as long as it lives.
    pub fn stdio() -> Self {
        Terminal::new(
            LineScanner::new(io::stdin().lock()),
            io::stdout(),
            io::stderr(),
        )
    }
}

impl<I, O, E> Terminal<I, O, E>
where
    I: InputSource,
    O: Write,
    E: Write,
{
    pub fn new(input: I, out: O, err: E) -> Self {
        Terminal { input, out, err }
    }

    /// Prompts until a positive age is entered, using `strategy` to read it.
    pub fn ask_age(&mut self, strategy: AgeStrategy) -> Result<Age, InputError> {
        read_age(strategy, &mut self.input, &mut self.out)
    }

    /// Prompts until a valid `First Last` name is entered, reporting every
    /// rejected line on the error channel.
    pub fn ask_full_name(&mut self) -> Result<FullName, InputError> {
        read_full_name(&mut self.input, &mut self.out, &mut self.err)
    }

    pub fn into_parts(self) -> (I, O, E) {
        (self.input, self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_terminal_keeps_channels_apart() {
        let input = LineScanner::new(Cursor::new("x\n5\nSmith\nAda Lovelace\n"));
        let mut terminal = Terminal::new(input, Vec::new(), Vec::new());

        assert_eq!(terminal.ask_age(AgeStrategy::Strict).unwrap().get(), 5);
        assert_eq!(terminal.ask_full_name().unwrap().as_str(), "Ada Lovelace");

        let (_, out, err) = terminal.into_parts();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter your age: Enter your age: Enter name: Enter name: "
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "\tError: Name must include a space.\n"
        );
    }
}
