//! # Input Channel
//!
//! Line and token oriented reading on top of any [`BufRead`].
//!
//! The readers in this crate never touch stdin directly. They talk to an
//! [`InputSource`], which hands out numbers, whitespace separated tokens or
//! whole lines, and can throw away the rest of the current line while
//! reporting how much it threw away.
//!
//! [`LineScanner`] is the implementation used everywhere: it buffers one line
//! at a time, so anything left after a number or a token stays pending for
//! the next read, exactly like a terminal stream does.
//!
//! ## Example
//! ```rust
//! use std::io::Cursor;
//! use termcheck_core::{InputSource, LineScanner};
//!
//! let mut input = LineScanner::new(Cursor::new("27xyz\nJohn Smith\n"));
//!
//! assert_eq!(input.extract_int().unwrap(), Some(27));
//! assert_eq!(input.discard_line().unwrap(), 4); // "xyz\n"
//! assert_eq!(input.read_line().unwrap(), "John Smith");
//! ```
use std::io::{self, BufRead};
use thiserror::Error;

/// Stream failures. Validation problems are never reported through this type.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("couldn't read from the terminal: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before a valid value was entered")]
    Closed,
}

/// A line-oriented source of user input.
pub trait InputSource {
    /// Skips leading whitespace and extracts a signed integer prefix.
    ///
    /// Returns `Ok(None)` if no digits follow (or the value does not fit an
    /// `i32`). Whatever follows the number stays unread.
    fn extract_int(&mut self) -> Result<Option<i32>, InputError>;

    /// Skips leading whitespace and returns the next run of non-whitespace
    /// characters.
    fn next_token(&mut self) -> Result<String, InputError>;

    /// Returns the rest of the current line without its terminator.
    fn read_line(&mut self) -> Result<String, InputError>;

    /// Throws away the rest of the current line, terminator included, and
    /// returns how many characters were thrown away.
    fn discard_line(&mut self) -> Result<usize, InputError>;
}

/// [`InputSource`] over a buffered reader, one line at a time.
#[derive(Debug)]
pub struct LineScanner<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn pending(&self) -> &str {
        &self.line[self.pos..]
    }

    /// Makes sure something is pending, reading a new line if needed.
    /// `false` means the reader is exhausted.
    fn fill(&mut self) -> Result<bool, InputError> {
        if self.pos < self.line.len() {
            return Ok(true);
        }

        self.line.clear();
        self.pos = 0;
        let read = self.reader.read_line(&mut self.line)?;
        Ok(read > 0)
    }

    fn skip_whitespace(&mut self) -> Result<(), InputError> {
        loop {
            if !self.fill()? {
                return Err(InputError::Closed);
            }

            let pending = self.pending();
            let skipped = pending.len()
                - pending
                    .trim_start_matches(|c: char| c.is_ascii_whitespace())
                    .len();
            self.pos += skipped;

            if self.pos < self.line.len() {
                return Ok(());
            }
        }
    }
}

impl<R: BufRead> InputSource for LineScanner<R> {
    fn extract_int(&mut self) -> Result<Option<i32>, InputError> {
        self.skip_whitespace()?;

        let pending = self.pending();
        let sign = usize::from(pending.starts_with(['+', '-']));
        let digits = pending[sign..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();

        if digits == 0 {
            self.pos += sign;
            return Ok(None);
        }

        let end = sign + digits;
        let value = pending[..end].parse::<i32>().ok();
        self.pos += end;
        Ok(value)
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        self.skip_whitespace()?;

        let pending = self.pending();
        let len = pending
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(pending.len());
        let token = pending[..len].to_owned();
        self.pos += len;
        Ok(token)
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        if !self.fill()? {
            return Err(InputError::Closed);
        }

        let pending = self.pending();
        let content = match pending.strip_suffix('\n') {
            Some(l) => l.strip_suffix('\r').unwrap_or(l),
            None => pending,
        };
        let line = content.to_owned();
        self.pos = self.line.len();
        Ok(line)
    }

    fn discard_line(&mut self) -> Result<usize, InputError> {
        // An exhausted reader has nothing left to discard.
        if !self.fill()? {
            return Ok(0);
        }

        let pending = self.pending();
        let mut discarded = pending.chars().count();
        // "\r\n" is one terminator
        if pending.ends_with("\r\n") {
            discarded -= 1;
        }
        self.pos = self.line.len();
        Ok(discarded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scanner(input: &str) -> LineScanner<Cursor<&str>> {
        LineScanner::new(Cursor::new(input))
    }

    #[test]
    fn test_extract_int_leaves_suffix_pending() {
        let mut input = scanner("  27xyz\n");
        assert_eq!(input.extract_int().unwrap(), Some(27));
        assert_eq!(input.next_token().unwrap(), "xyz");
    }

    #[test]
    fn test_extract_int_signs() {
        let mut input = scanner("-5 +8\n");
        assert_eq!(input.extract_int().unwrap(), Some(-5));
        assert_eq!(input.extract_int().unwrap(), Some(8));
    }

    #[test]
    fn test_extract_int_skips_blank_lines() {
        let mut input = scanner("\n   \n\t42\n");
        assert_eq!(input.extract_int().unwrap(), Some(42));
    }

    #[test]
    fn test_extract_int_malformed() {
        let mut input = scanner("abc\n");
        assert_eq!(input.extract_int().unwrap(), None);
        // Nothing but the sign is consumed on failure
        assert_eq!(input.discard_line().unwrap(), 4);

        let mut input = scanner("-x\n");
        assert_eq!(input.extract_int().unwrap(), None);
        assert_eq!(input.discard_line().unwrap(), 2);
    }

    #[test]
    fn test_extract_int_overflow() {
        let mut input = scanner("2147483648\n2147483647\n");
        assert_eq!(input.extract_int().unwrap(), None);
        assert_eq!(input.discard_line().unwrap(), 1);
        assert_eq!(input.extract_int().unwrap(), Some(i32::MAX));
    }

    #[test]
    fn test_discard_line_counts_terminator() {
        let mut input = scanner("12\n12a\n");
        assert_eq!(input.extract_int().unwrap(), Some(12));
        assert_eq!(input.discard_line().unwrap(), 1);
        assert_eq!(input.extract_int().unwrap(), Some(12));
        assert_eq!(input.discard_line().unwrap(), 2);
    }

    #[test]
    fn test_discard_line_counts_crlf_once() {
        let mut input = scanner("12\r\n12a\r\n");
        assert_eq!(input.extract_int().unwrap(), Some(12));
        assert_eq!(input.discard_line().unwrap(), 1);
        assert_eq!(input.extract_int().unwrap(), Some(12));
        assert_eq!(input.discard_line().unwrap(), 2);
    }

    #[test]
    fn test_discard_line_at_end_of_input() {
        let mut input = scanner("27");
        assert_eq!(input.extract_int().unwrap(), Some(27));
        assert_eq!(input.discard_line().unwrap(), 0);
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut input = scanner("John Smith\r\n Jane  Doe \n");
        assert_eq!(input.read_line().unwrap(), "John Smith");
        assert_eq!(input.read_line().unwrap(), " Jane  Doe ");
    }

    #[test]
    fn test_read_line_returns_pending_remainder() {
        let mut input = scanner("27\nJohn Smith\n");
        assert_eq!(input.extract_int().unwrap(), Some(27));
        assert_eq!(input.read_line().unwrap(), "");
        assert_eq!(input.read_line().unwrap(), "John Smith");
    }

    #[test]
    fn test_closed_input() {
        let mut input = scanner("   \n");
        assert!(matches!(input.extract_int(), Err(InputError::Closed)));
        assert!(matches!(input.next_token(), Err(InputError::Closed)));
        assert!(matches!(input.read_line(), Err(InputError::Closed)));
    }
}
