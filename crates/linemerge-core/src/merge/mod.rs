//! Merge engine.
//!
//! Turns a line diff into a single document. Three strategies exist:
//! per-line auto-merge, and verbatim acceptance of either side.

pub mod engine;
pub mod strategy;

pub use engine::{diff_for, merge, merge_texts, resolve_auto, MergedDocument};
pub use strategy::MergeStrategy;
