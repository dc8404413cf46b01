//! The natural-order comparer and its sorting entry points.
//!
//! This module implements run-by-run alphanumeric comparison:
//! - [`NaturalOrder`]: The three-way comparer over optional strings.
//! - [`natsort`] / [`natsort_mut`]: Index-based and in-place sorting built on it.
//!
//! Both input strings are tokenized in lock-step into maximal digit/text
//! runs; digit runs compare as numbers, text runs compare under the
//! configured [`CaseMode`], and the first unequal run decides the result.

use crate::core::{AsKey, CaseMode, StrAccessor, runs};
use std::cmp::Ordering;
use std::fmt::Display;

/// Three-way natural-order comparison of strings.
///
/// Digit runs embedded in the operands compare as non-negative integers, so
/// `"A9" < "A10"` even though `'9' > '1'`. The comparer holds nothing but its
/// immutable [`CaseMode`]; it is `Copy` and safe to share across threads.
///
/// # Examples
///
/// ```
/// use natorder::NaturalOrder;
/// use std::cmp::Ordering;
///
/// let order = NaturalOrder::DEFAULT;
/// assert_eq!(order.cmp_str("A9", "A10"), Ordering::Less);
/// assert_eq!(order.cmp_str("007", "7"), Ordering::Equal);
///
/// let folded = NaturalOrder::case_insensitive();
/// assert_eq!(folded.cmp_str("A1A2A3", "a1a2a3"), Ordering::Equal);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder {
    mode: CaseMode,
}

impl NaturalOrder {
    /// The shared default comparer: case-sensitive, ordinal.
    pub const DEFAULT: NaturalOrder = NaturalOrder::new(CaseMode::Sensitive);

    /// Creates a comparer with the given case mode.
    pub const fn new(mode: CaseMode) -> Self {
        NaturalOrder { mode }
    }

    /// Shorthand for `NaturalOrder::new(CaseMode::Insensitive)`.
    pub const fn case_insensitive() -> Self {
        NaturalOrder::new(CaseMode::Insensitive)
    }

    /// Returns the configured case mode.
    pub const fn mode(&self) -> CaseMode {
        self.mode
    }

    /// Compares two optional strings in natural order.
    ///
    /// `None` models a null operand and orders before every `Some`,
    /// including `Some("")`.
    ///
    /// # Examples
    ///
    /// ```
    /// use natorder::NaturalOrder;
    /// use std::cmp::Ordering;
    ///
    /// let order = NaturalOrder::DEFAULT;
    /// assert_eq!(order.compare(None, Some("")), Ordering::Less);
    /// assert_eq!(order.compare(Some(""), Some("a")), Ordering::Less);
    /// assert_eq!(order.compare(None, None), Ordering::Equal);
    /// ```
    pub fn compare(&self, x: Option<&str>, y: Option<&str>) -> Ordering {
        match (x, y) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.cmp_str(a, b),
        }
    }

    /// Compares two strings in natural order.
    ///
    /// Usable directly as a `sort_by` callback:
    ///
    /// ```
    /// use natorder::NaturalOrder;
    ///
    /// let order = NaturalOrder::DEFAULT;
    /// let mut data = vec!["file-10", "file-9", "file-1"];
    /// data.sort_by(|a, b| order.cmp_str(a, b));
    ///
    /// assert_eq!(data, vec!["file-1", "file-9", "file-10"]);
    /// ```
    pub fn cmp_str(&self, x: &str, y: &str) -> Ordering {
        // The tokenizer needs at least one character to classify a run, so
        // an empty operand falls back to plain text comparison.
        if x.is_empty() || y.is_empty() {
            return self.cmp_text(x, y);
        }

        let mut xs = runs(x);
        let mut ys = runs(y);
        loop {
            match (xs.next(), ys.next()) {
                (Some(a), Some(b)) => {
                    // Runs of different kind at the same position (e.g. "1A"
                    // vs "AA") have no numeric meaning; they compare as text.
                    let ord = if a.numeric && b.numeric {
                        cmp_digits(a.text, b.text)
                    } else {
                        self.cmp_text(a.text, b.text)
                    };
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                // A strict run-sequence prefix sorts first.
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (None, None) => return Ordering::Equal,
            }
        }
    }

    /// Compares two values by their `Display` form.
    ///
    /// The escape hatch for heterogeneous collections: anything that renders
    /// to a string can be ordered naturally, with `None` propagated as a null
    /// operand. Each call renders both operands, so keep this off hot paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use natorder::NaturalOrder;
    /// use std::cmp::Ordering;
    ///
    /// let order = NaturalOrder::DEFAULT;
    /// assert_eq!(order.compare_display(Some(&9), Some(&10)), Ordering::Less);
    /// assert_eq!(order.compare_display(None, Some(&10)), Ordering::Less);
    /// ```
    pub fn compare_display<T: Display>(&self, x: Option<&T>, y: Option<&T>) -> Ordering {
        let x = x.map(ToString::to_string);
        let y = y.map(ToString::to_string);
        self.compare(x.as_deref(), y.as_deref())
    }

    fn cmp_text(&self, x: &str, y: &str) -> Ordering {
        match self.mode {
            CaseMode::Sensitive => x.cmp(y),
            CaseMode::Insensitive => {
                let fx = x.chars().flat_map(char::to_lowercase);
                let fy = y.chars().flat_map(char::to_lowercase);
                fx.cmp(fy)
            }
        }
    }
}

/// Compares two all-digit runs as non-negative integers.
///
/// Leading zeros are insignificant, so `"007"` equals `"7"`. The comparison
/// is positional (significant digit count, then digit order) rather than a
/// machine-integer parse, so runs of any length compare exactly.
fn cmp_digits(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

/// Performs an index-based natural sort on the provided collection.
///
/// This function does not modify the input collection. Instead, it returns a
/// `Vec<usize>` containing the indices that would order the collection under
/// [`NaturalOrder::DEFAULT`], null keys first.
///
/// The input collection must implement the [`StrAccessor`] trait, which
/// abstracts optional-string key access.
///
/// # Examples
///
/// ```
/// use natorder::natsort;
///
/// let data = vec!["img-12", "img-2", "img-1"];
/// let indices = natsort(&data);
///
/// assert_eq!(indices, vec![2, 1, 0]); // img-1, img-2, img-12
/// ```
pub fn natsort<T: StrAccessor + ?Sized>(provider: &T) -> Vec<usize> {
    natsort_with(provider, &NaturalOrder::DEFAULT)
}

/// Like [`natsort`], with an explicit comparer.
///
/// # Examples
///
/// ```
/// use natorder::{natsort_with, NaturalOrder};
///
/// let data = vec!["Track 10", "track 9"];
/// let indices = natsort_with(&data, &NaturalOrder::case_insensitive());
///
/// assert_eq!(indices, vec![1, 0]); // track 9, Track 10
/// ```
pub fn natsort_with<T: StrAccessor + ?Sized>(provider: &T, order: &NaturalOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..provider.len()).collect();
    // Stable: keys with distinct spellings can compare equal ("007" vs "7"),
    // and those keep their input order.
    indices.sort_by(|&a, &b| order.compare(provider.get_str(a), provider.get_str(b)));
    indices
}

/// Sorts a mutable slice in-place in natural order.
///
/// This is a convenience wrapper for [`natsort`] which computes the sorted
/// indices and then applies the permutation to the slice.
///
/// # Examples
///
/// ```
/// use natorder::natsort_mut;
///
/// let mut data = vec!["file-10.txt", "file-2.txt", "file-1.txt"];
/// natsort_mut(&mut data);
///
/// assert_eq!(data, vec!["file-1.txt", "file-2.txt", "file-10.txt"]);
/// ```
pub fn natsort_mut<T: AsKey>(data: &mut [T]) {
    natsort_mut_with(data, &NaturalOrder::DEFAULT);
}

/// Like [`natsort_mut`], with an explicit comparer.
pub fn natsort_mut_with<T: AsKey>(data: &mut [T], order: &NaturalOrder) {
    let indices = natsort_with(data, order);
    apply_permutation(data, indices);
}

// Cycle-walking permutation application; `indices` doubles as the
// visited marker.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current;
            current = next;
        }
        indices[current] = current;
    }
}
