//! The value stored in every node of a [`Tree`][crate::tree::Tree].
//!
//! A [`Payload`] wraps a single totally-ordered value. Its equality and
//! ordering are exactly those of the wrapped value, which is what the tree
//! uses to place and find nodes.
//!
//! # Examples
//!
//! ```
//! use bintree::Payload;
//!
//! let a = Payload::from("and");
//! let m = Payload::from("m");
//!
//! assert!(a < m);
//! assert_eq!(a, Payload::new(String::from("and")));
//!
//! // The default payload is the empty string, which is still comparable.
//! assert!(Payload::<String>::default() < a);
//! ```

use std::fmt;
use std::io::{self, BufRead};

/// A comparable value held by a tree node. Defaults to wrapping a `String`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Payload<T = String> {
    value: T,
}

impl<T> Payload<T> {
    /// Wraps `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the payload, returning the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl From<String> for Payload<String> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Payload<String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_owned())
    }
}

impl Payload<String> {
    /// Replaces the wrapped string with the next line from `input`.
    ///
    /// Returns `Ok(false)` at end of input, in which case the payload is left
    /// untouched. The line terminator (`\n` or `\r\n`) is not kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Payload;
    ///
    /// let mut input = "first\nsecond".as_bytes();
    /// let mut payload = Payload::default();
    ///
    /// assert!(payload.populate_from(&mut input).unwrap());
    /// assert_eq!(payload.value(), "first");
    /// assert!(payload.populate_from(&mut input).unwrap());
    /// assert_eq!(payload.value(), "second");
    /// assert!(!payload.populate_from(&mut input).unwrap());
    /// assert_eq!(payload.value(), "second");
    /// ```
    pub fn populate_from<R: BufRead>(&mut self, input: &mut R) -> io::Result<bool> {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        self.value = line;
        Ok(true)
    }
}

impl<T: fmt::Display> fmt::Display for Payload<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
