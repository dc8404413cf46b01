//! # Natorder
//!
//! `natorder` is a natural (alphanumeric) ordering library for strings: runs of
//! decimal digits embedded in a string compare as numbers rather than as
//! character sequences, so `"A9"` sorts before `"A10"` and `"file-2"` before
//! `"file-10"`.
//!
//! ## Key Features
//!
//! - **Run-based comparison**: Each operand splits into maximal digit/text
//!   runs compared in lock-step; the first unequal run decides the result.
//! - **Arbitrary-length digit runs**: Numeric runs compare positionally, never
//!   through a machine-integer parse, so a 40-digit serial number is as
//!   well-defined as a 2-digit one and leading zeros are insignificant
//!   (`"007"` equals `"7"`).
//! - **Configurable case handling**: [`CaseMode`] selects ordinal or
//!   case-folded comparison for the text runs, fixed at construction.
//! - **Null-aware**: [`NaturalOrder::compare`] takes `Option<&str>` operands;
//!   `None` orders before every string, including the empty one.
//! - **Zero-copy sorting**: The [`StrAccessor`] trait lets [`natsort`] order
//!   arbitrary collections (e.g. columnar buffers) without copying keys, and
//!   [`natsort_mut`] sorts slices in-place.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use natorder::natsort_mut;
//!
//! let mut data = vec!["file-10.txt", "file-2.txt", "file-1.txt"];
//! natsort_mut(&mut data);
//!
//! assert_eq!(data, vec!["file-1.txt", "file-2.txt", "file-10.txt"]);
//! ```
//!
//! ### Comparing directly
//!
//! ```rust
//! use natorder::NaturalOrder;
//! use std::cmp::Ordering;
//!
//! let order = NaturalOrder::DEFAULT;
//! assert_eq!(order.cmp_str("A9", "A10"), Ordering::Less);
//! assert_eq!(order.compare(None, Some("")), Ordering::Less);
//!
//! let folded = NaturalOrder::case_insensitive();
//! assert_eq!(folded.cmp_str("Chapter 2", "chapter 10"), Ordering::Less);
//! ```
//!
//! ### Custom Types
//!
//! To sort custom types or columnar data without creating intermediate
//! strings, implement the [`StrAccessor`] trait.
//!
//! ```rust
//! use natorder::{natsort, StrAccessor};
//!
//! struct Tracks {
//!     titles: Vec<String>,
//! }
//!
//! impl StrAccessor for Tracks {
//!     fn get_str(&self, index: usize) -> Option<&str> {
//!         Some(&self.titles[index])
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.titles.len()
//!     }
//! }
//!
//! let tracks = Tracks {
//!     titles: vec!["Track 12".to_string(), "Track 3".to_string()],
//! };
//!
//! // Returns indices: [1, 0] (Track 3, Track 12)
//! let indices = natsort(&tracks);
//! ```
//!
//! ## Performance Characteristics
//!
//! - A comparison runs in O(n + m) over the operand lengths and
//!   short-circuits at the first deciding run.
//! - `compare` / `cmp_str` allocate nothing; only the `Display`-based
//!   wrapper renders its operands to temporary strings.
//! - The comparer is `Copy`, holds no mutable state, and may be shared
//!   across threads without synchronization.

pub mod algo;
pub mod core;
pub use algo::{NaturalOrder, natsort, natsort_mut, natsort_mut_with, natsort_with};
pub use core::{CaseMode, StrAccessor};

pub mod prelude {
    pub use crate::algo::{NaturalOrder, natsort, natsort_mut, natsort_mut_with, natsort_with};
    pub use crate::core::{CaseMode, StrAccessor};
}
