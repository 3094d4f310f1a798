//! Line diff engine.
//!
//! Compares two documents index by index and classifies every position as
//! `Equal`, `Added`, `Deleted` or `Changed`.
//!
//! ## Entry point
//!
//! ```
//! use linemerge_core::diff::{compute_diff, render_diff};
//! use linemerge_core::Document;
//!
//! let diff = compute_diff(&Document::parse("a\nb"), &Document::parse("a\nc"));
//! assert_eq!(render_diff(&diff), "  a\n± b → c\n");
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: a pure function of the two documents.
//! - **Positional alignment**: one relation per index in
//!   `0..max(left.len(), right.len())`, in ascending order.
//! - **Total**: every input, including the empty string, has a diff.

pub mod engine;
pub mod human_summary;
pub mod model;
pub mod render;

pub use engine::{compute_diff, diff_texts};
pub use human_summary::render_human_summary;
pub use model::{DiffResult, DiffSummary, LineRelation, RelationKind};
pub use render::{render_diff, render_line, style_of, PresentationStyle};
