//! # Age Reader
//!
//! Keeps prompting until the user types a strictly positive whole number.
//!
//! There are three ways of reading the number, picked with [`AgeStrategy`].
//! They differ only in how the raw input is tokenized, but the difference is
//! observable, so each has its own function:
//!
//! | Strategy             | Reads                   | `"27xyz"`            |
//! |----------------------|-------------------------|----------------------|
//! | [`AgeStrategy::Direct`] | numeric prefix       | 27 (suffix left unread) |
//! | [`AgeStrategy::Token`]  | whole token, digits only | rejected          |
//! | [`AgeStrategy::Strict`] | numeric prefix, nothing else on the line | rejected |
//!
//! Rejected attempts are retried silently: the user only sees the same
//! prompt again.
//!
//! ## Example
//! ```rust
//! use std::io::Cursor;
//! use termcheck_core::{AgeStrategy, LineScanner, read_age};
//!
//! let mut input = LineScanner::new(Cursor::new("abc\n0\n-5\n27\n"));
//! let mut out = Vec::new();
//!
//! let age = read_age(AgeStrategy::Direct, &mut input, &mut out).unwrap();
//! assert_eq!(age.get(), 27);
//! ```
use crate::utils::input::{InputError, InputSource};
use std::{
    error::Error,
    fmt::Display,
    io::Write,
    num::NonZeroU32,
    str::FromStr,
};
use tracing::{debug, trace};

/// Prompt shared by [`AgeStrategy::Direct`] and [`AgeStrategy::Token`].
pub const AGE_PROMPT: &str = "Enter an age: ";

/// Prompt used by [`AgeStrategy::Strict`].
pub const STRICT_AGE_PROMPT: &str = "Enter your age: ";

/// A strictly positive age, at most `i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Age(NonZeroU32);

impl Age {
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<i32> for Age {
    type Error = AgeRejection;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Age)
            .ok_or(AgeRejection::NotPositive)
    }
}

impl Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a single attempt was thrown away. Only ever logged, never shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRejection {
    /// Not an integer, or too large for one.
    Malformed,
    NotPositive,
    /// A number followed by something else on the same line.
    TrailingInput,
}

impl Display for AgeRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed => write!(f, "not a whole number"),
            Self::NotPositive => write!(f, "not a positive number"),
            Self::TrailingInput => write!(f, "extra characters after the number"),
        }
    }
}

impl Error for AgeRejection {}

/// How the age is pulled out of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeStrategy {
    /// Extract a number directly; a malformed line is discarded.
    #[default]
    Direct,
    /// Read a whitespace-delimited token and require it to be all digits.
    Token,
    /// Like `Direct`, but the number must be the only thing on its line.
    Strict,
}

impl AgeStrategy {
    pub const ALL: [AgeStrategy; 3] = [Self::Direct, Self::Token, Self::Strict];

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Direct | Self::Token => AGE_PROMPT,
            Self::Strict => STRICT_AGE_PROMPT,
        }
    }
}

impl Display for AgeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Token => write!(f, "token"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for AgeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "token" => Ok(Self::Token),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown age strategy '{}', expected direct, token or strict",
                other
            )),
        }
    }
}

/// Reads a positive age from `input` with the given strategy, writing the
/// prompt to `out` before every attempt.
///
/// Only returns an error if the streams fail or the input runs out.
pub fn read_age<I, W>(
    strategy: AgeStrategy,
    input: &mut I,
    out: &mut W,
) -> Result<Age, InputError>
where
    I: InputSource + ?Sized,
    W: Write + ?Sized,
{
    match strategy {
        AgeStrategy::Direct => read_age_direct(input, out),
        AgeStrategy::Token => read_age_token(input, out),
        AgeStrategy::Strict => read_age_strict(input, out),
    }
}

/// Strategy A: numeric extraction straight from the stream.
///
/// A failed extraction discards the rest of the line. A non-positive value
/// is retried without consuming anything else.
pub fn read_age_direct<I, W>(input: &mut I, out: &mut W) -> Result<Age, InputError>
where
    I: InputSource + ?Sized,
    W: Write + ?Sized,
{
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        prompt(out, AGE_PROMPT)?;

        let Some(value) = input.extract_int()? else {
            input.discard_line()?;
            rejected(AgeStrategy::Direct, attempt, AgeRejection::Malformed);
            continue;
        };

        match Age::try_from(value) {
            Ok(age) => return Ok(accepted(AgeStrategy::Direct, attempt, age)),
            Err(reason) => rejected(AgeStrategy::Direct, attempt, reason),
        }
    }
}

/// Strategy B: read a token as text and convert it only if every character
/// is a decimal digit.
pub fn read_age_token<I, W>(input: &mut I, out: &mut W) -> Result<Age, InputError>
where
    I: InputSource + ?Sized,
    W: Write + ?Sized,
{
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        prompt(out, AGE_PROMPT)?;

        let token = input.next_token()?;
        match parse_age_token(&token) {
            Ok(age) => return Ok(accepted(AgeStrategy::Token, attempt, age)),
            Err(reason) => rejected(AgeStrategy::Token, attempt, reason),
        }
    }
}

/// Strategy C: numeric extraction, then the rest of the line is discarded
/// and must have been nothing but the line terminator.
pub fn read_age_strict<I, W>(input: &mut I, out: &mut W) -> Result<Age, InputError>
where
    I: InputSource + ?Sized,
    W: Write + ?Sized,
{
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        prompt(out, STRICT_AGE_PROMPT)?;

        let Some(value) = input.extract_int()? else {
            input.discard_line()?;
            rejected(AgeStrategy::Strict, attempt, AgeRejection::Malformed);
            continue;
        };

        if input.discard_line()? > 1 {
            rejected(AgeStrategy::Strict, attempt, AgeRejection::TrailingInput);
            continue;
        }

        match Age::try_from(value) {
            Ok(age) => return Ok(accepted(AgeStrategy::Strict, attempt, age)),
            Err(reason) => rejected(AgeStrategy::Strict, attempt, reason),
        }
    }
}

/// Converts a whitespace-free token into an [`Age`].
///
/// The token must consist of ASCII digits only, so signs are rejected as
/// [`AgeRejection::Malformed`].
///
/// ```rust
/// use termcheck_core::{AgeRejection, utils::parse_age_token};
///
/// assert_eq!(parse_age_token("27").unwrap().get(), 27);
/// assert_eq!(parse_age_token("0"), Err(AgeRejection::NotPositive));
/// assert_eq!(parse_age_token("-5"), Err(AgeRejection::Malformed));
/// ```
pub fn parse_age_token(token: &str) -> Result<Age, AgeRejection> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AgeRejection::Malformed);
    }

    let value = token.parse::<i32>().map_err(|_| AgeRejection::Malformed)?;
    Age::try_from(value)
}

fn prompt<W: Write + ?Sized>(out: &mut W, text: &str) -> Result<(), InputError> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn rejected(strategy: AgeStrategy, attempt: u32, reason: AgeRejection) {
    debug!(%strategy, attempt, %reason, "age rejected, asking again");
}

fn accepted(strategy: AgeStrategy, attempt: u32, age: Age) -> Age {
    trace!(%strategy, attempt, %age, "age accepted");
    age
}
