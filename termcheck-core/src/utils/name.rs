//! # Full Name Validation
//!
//! Reads a `First Last` name and keeps asking until it is well formed.
//!
//! A name is checked by three [`NameRule`]s, in order. The first rule that
//! fails decides the single [`NameError`] reported for that attempt, so a
//! line like `"John3"` is reported as missing a space rather than as
//! containing a digit.
//!
//! 1. [`NameRule::HasSeparator`]: there is at least one space.
//! 2. [`NameRule::HasBothParts`]: something comes before and after the first
//!    space.
//! 3. [`NameRule::LettersWithSingleSeparator`]: only ASCII letters and
//!    exactly one space.
//!
//! ## Example
//! ```rust
//! use termcheck_core::{FullName, NameError, validate_full_name};
//!
//! let name = validate_full_name("John Smith").unwrap();
//! assert_eq!(name.first(), "John");
//! assert_eq!(name.last(), "Smith");
//!
//! assert_eq!(
//!     "John Van Smith".parse::<FullName>(),
//!     Err(NameError::TooManySeparators)
//! );
//! ```
use crate::utils::input::{InputError, InputSource};
use std::{error::Error, fmt::Display, io::Write, str::FromStr};
use tracing::{debug, trace};

/// Prompt written before every attempt.
pub const NAME_PROMPT: &str = "Enter name: ";

const SEPARATOR: char = ' ';

/// The one reason a full name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NameError {
    NoSeparator,
    NoLastName,
    NoFirstName,
    IllegalCharacters,
    TooManySeparators,
}

impl NameError {
    pub const ALL: [NameError; 5] = [
        Self::NoSeparator,
        Self::NoLastName,
        Self::NoFirstName,
        Self::IllegalCharacters,
        Self::TooManySeparators,
    ];

    /// The fixed message shown to the user for this error.
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoSeparator => "Name must include a space.",
            Self::NoLastName => "Please enter a last name.",
            Self::NoFirstName => "Please enter a first name",
            Self::IllegalCharacters => "Name must contain only letters.",
            Self::TooManySeparators => "Name must contain one space character.",
        }
    }
}

impl Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for NameError {}

/// A validation stage applied to a full name line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    HasSeparator,
    HasBothParts,
    LettersWithSingleSeparator,
}

/// Implemented by anything that can accept or reject a raw line.
trait Validate {
    fn validate(&self, input: &str) -> Result<(), NameError>;
}

impl NameRule {
    /// The order the rules run in.
    pub const ORDERED: [NameRule; 3] = [
        Self::HasSeparator,
        Self::HasBothParts,
        Self::LettersWithSingleSeparator,
    ];

    /// Runs `rules` in order and stops at the first failure.
    pub(crate) fn execute(input: &str, rules: &[NameRule]) -> Result<(), NameError> {
        for rule in rules {
            rule.validate(input)?;
        }
        Ok(())
    }
}

impl Validate for NameRule {
    fn validate(&self, input: &str) -> Result<(), NameError> {
        match self {
            NameRule::HasSeparator => {
                if input.contains(SEPARATOR) {
                    Ok(())
                } else {
                    Err(NameError::NoSeparator)
                }
            }
            NameRule::HasBothParts => match input.find(SEPARATOR) {
                // The space is the last character
                Some(pos) if pos + SEPARATOR.len_utf8() == input.len() => {
                    Err(NameError::NoLastName)
                }
                Some(0) => Err(NameError::NoFirstName),
                Some(_) => Ok(()),
                None => Err(NameError::NoSeparator),
            },
            NameRule::LettersWithSingleSeparator => {
                let mut separators = 0usize;

                for c in input.chars() {
                    if c == SEPARATOR {
                        separators += 1;
                    } else if !c.is_ascii_alphabetic() {
                        return Err(NameError::IllegalCharacters);
                    }
                }

                if separators == 1 {
                    Ok(())
                } else {
                    Err(NameError::TooManySeparators)
                }
            }
        }
    }
}

/// A validated `First Last` name, kept exactly as it was typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FullName {
    line: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    separator: usize,
}

impl FullName {
    pub fn first(&self) -> &str {
        &self.line[..self.separator]
    }

    pub fn last(&self) -> &str {
        &self.line[self.separator + SEPARATOR.len_utf8()..]
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }

    pub fn into_inner(self) -> String {
        self.line
    }
}

impl Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line)
    }
}

impl FromStr for FullName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_full_name(s)
    }
}

impl TryFrom<String> for FullName {
    type Error = NameError;

    fn try_from(line: String) -> Result<Self, Self::Error> {
        NameRule::execute(&line, &NameRule::ORDERED)?;
        let separator = line.find(SEPARATOR).ok_or(NameError::NoSeparator)?;
        Ok(FullName { line, separator })
    }
}

/// Checks `line` against every [`NameRule`] and returns the first failure.
pub fn validate_full_name(line: &str) -> Result<FullName, NameError> {
    FullName::try_from(line.to_owned())
}

/// Prompts on `out` until `input` yields a valid full name.
///
/// Every rejected line produces exactly one `\tError: <message>` line on
/// `err`. Only stream failures are returned as errors.
pub fn read_full_name<I, O, E>(
    input: &mut I,
    out: &mut O,
    err: &mut E,
) -> Result<FullName, InputError>
where
    I: InputSource + ?Sized,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        out.write_all(NAME_PROMPT.as_bytes())?;
        out.flush()?;

        let line = input.read_line()?;
        match FullName::try_from(line) {
            Ok(name) => {
                trace!(attempt, name = %name, "full name accepted");
                return Ok(name);
            }
            Err(e) => {
                debug!(attempt, reason = ?e, "full name rejected, asking again");
                writeln!(err, "\tError: {}", e)?;
                err.flush()?;
            }
        }
    }
}
