//! Core types for natural ordering.
//!
//! This module defines:
//! - [`CaseMode`]: How non-numeric text is compared.
//! - [`Run`] / [`runs`]: The digit/text run tokenizer.
//! - [`StrAccessor`]: The main trait users implement to sort their custom types.

use std::collections::VecDeque;

/// Selects how non-numeric runs (and whole strings in the empty-operand
/// fallback) are compared.
///
/// The mode is fixed at comparer construction and never changes afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaseMode {
    /// Ordinal comparison: code points compare as-is, so `"A" < "a"`.
    #[default]
    Sensitive,
    /// Ordinal comparison after Unicode simple case folding
    /// (`char::to_lowercase`), so `"A"` and `"a"` compare equal.
    Insensitive,
}

/// A maximal substring that is either all ASCII decimal digits or digit-free.
///
/// Runs partition their source string: they appear in input order, never
/// overlap, and concatenating them reproduces the source exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run<'a> {
    /// The run substring.
    pub text: &'a str,
    /// Byte offset of the run within the source string.
    pub start: usize,
    /// `true` if the run consists of ASCII decimal digits.
    pub numeric: bool,
}

/// Splits a string into its digit/text [`Run`]s.
///
/// The empty string yields no runs; any other input yields at least one.
///
/// # Examples
///
/// ```
/// use natorder::core::runs;
///
/// let parts: Vec<_> = runs("A10b").map(|r| (r.text, r.numeric)).collect();
/// assert_eq!(parts, vec![("A", false), ("10", true), ("b", false)]);
/// ```
pub fn runs(source: &str) -> Runs<'_> {
    Runs { source, pos: 0 }
}

/// Iterator over the [`Run`]s of a string. Created by [`runs`].
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let rest = &self.source.as_bytes()[self.pos..];
        let numeric = rest.first()?.is_ascii_digit();
        let len = rest
            .iter()
            .position(|b| b.is_ascii_digit() != numeric)
            .unwrap_or(rest.len());

        let start = self.pos;
        self.pos += len;
        // ASCII digits never occur inside a multi-byte UTF-8 sequence, so
        // both ends of the range are character boundaries.
        Some(Run {
            text: &self.source[start..start + len],
            start,
            numeric,
        })
    }
}

/// Conversion from a stored element to its optional sort key.
///
/// `None` models a null element; it orders before every non-null key.
pub trait AsKey {
    /// Returns the element's key, or `None` for a null element.
    fn as_key(&self) -> Option<&str>;
}

impl AsKey for str {
    fn as_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsKey for &str {
    fn as_key(&self) -> Option<&str> {
        Some(*self)
    }
}

impl AsKey for String {
    fn as_key(&self) -> Option<&str> {
        Some(self)
    }
}

// Null elements propagate as missing keys.
impl<T: AsKey> AsKey for Option<T> {
    fn as_key(&self) -> Option<&str> {
        self.as_ref().and_then(T::as_key)
    }
}

/// A trait for reading sort keys from a collection without copying.
///
/// This trait allows [`natsort`](crate::natsort) to order any collection
/// whose elements can be viewed as optional string keys (e.g. `Vec<String>`,
/// `Vec<Option<String>>`, or custom columnar types).
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use natorder::core::StrAccessor;
///
/// struct Playlist {
///     titles: Vec<String>,
/// }
///
/// impl StrAccessor for Playlist {
///     fn get_str(&self, index: usize) -> Option<&str> {
///         Some(&self.titles[index])
///     }
///
///     fn len(&self) -> usize {
///         self.titles.len()
///     }
/// }
/// ```
pub trait StrAccessor {
    /// Returns the key at `index`, or `None` for a null element.
    fn get_str(&self, index: usize) -> Option<&str>;

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Blanket implementation for indexable slices of key-bearing elements.
impl<T: AsKey> StrAccessor for [T] {
    fn get_str(&self, index: usize) -> Option<&str> {
        self[index].as_key()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T: AsKey> StrAccessor for Vec<T> {
    fn get_str(&self, index: usize) -> Option<&str> {
        self[index].as_key()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Implementation for VecDeque.
// Provides O(1) random access, so index sorting stays cheap.
impl<T: AsKey> StrAccessor for VecDeque<T> {
    fn get_str(&self, index: usize) -> Option<&str> {
        self[index].as_key()
    }

    fn len(&self) -> usize {
        self.len()
    }
}
