//! The validated lookup key.

use std::fmt;

use crate::error::LookupError;

/// A single ASCII letter, stored uppercase.
///
/// The only way to get one is [`Letter::parse`], so holding a `Letter` means
/// the input was already checked.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Letter(char);

impl Letter {
    /// Accepts exactly one character in `[a-zA-Z]`.
    pub fn parse(input: &str) -> Result<Self, LookupError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self(c.to_ascii_uppercase())),
            _ => Err(LookupError::InvalidInput),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Case-sensitive prefix test against the uppercase letter. Proper names
    /// are capitalised, so `"auden"` does not match `A`.
    pub fn starts(self, name: &str) -> bool {
        name.starts_with(self.0)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
