//! linemerge core - positional line diff and merge
//!
//! This crate provides:
//! - [`Document`]: text split into lines on `'\n'`, nothing trimmed
//! - [`diff`]: index-aligned classification of every line position,
//!   visual rendering and summaries
//! - [`merge`]: collapsing a diff into one document under a
//!   [`MergeStrategy`]
//! - The error and logging facilities shared with the command-line shell
//!
//! The diff and merge operations are pure, total and stateless. They never
//! perform I/O and may run concurrently on any inputs.
//!
//! ```
//! use linemerge_core::{compute_diff, merge, Document, MergeStrategy};
//!
//! let left = Document::parse("a\nb");
//! let right = Document::parse("a");
//! let diff = compute_diff(&left, &right);
//! let merged = merge(&diff, &left, &right, MergeStrategy::AutoMerge);
//! assert_eq!(merged.as_str(), "a\nb");
//! ```

pub mod diff;
pub mod document;
pub mod errors;
pub mod logging_facility;
pub mod merge;

// Used by the logging macros
pub use linemerge_core_types;

pub use diff::{compute_diff, diff_texts, DiffResult, DiffSummary, LineRelation, RelationKind};
pub use document::{swap_sides, Document};
pub use errors::{ExError, ExErrorKind, LineMergeError, Result};
pub use merge::{merge, merge_texts, MergeStrategy, MergedDocument};
