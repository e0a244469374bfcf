//! # termcheck Core
//!
//! This crate provides a handful of interactive console routines that keep
//! asking the user for input until it is valid.
//!
//! Every routine owns its own read-validate-retry loop and only ever returns
//! a value that passed validation. Rejected attempts are either retried
//! silently (ages) or reported on the error channel (full names).
//!
//! ## Features
//! - Positive age input with three parsing strategies ([`AgeStrategy`]).
//! - Full name input (`First Last`) with one specific message per failure
//!   ([`NameError`]).
//! - A pluggable [`InputSource`] so every loop can be driven by in-memory
//!   input in tests.
//!
//! ## Example
//! ```rust,no_run
//! use termcheck_core::{AgeStrategy, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//!
//! let age = terminal.ask_age(AgeStrategy::Strict)?;
//! let name = terminal.ask_full_name()?;
//!
//! println!("{} is {} years old", name, age);
//! # Ok::<(), termcheck_core::InputError>(())
//! ```
//!
//! ## Error Handling
//!
//! Validation failures never reach the caller. The only errors returned are
//! stream failures, see [`InputError`].

pub mod utils;

pub use utils::{
    AGE_PROMPT, Age, AgeRejection, AgeStrategy, FullName, InputError, InputSource, LineScanner,
    NAME_PROMPT, NameError, NameRule, STRICT_AGE_PROMPT, Terminal, read_age, read_full_name,
    validate_full_name,
};
