//! Index-aligned line diff.
//!
//! The core entry point is [`compute_diff`], which compares two documents
//! position by position and produces a [`DiffResult`]. Lines are never
//! re-aligned: an insertion near the top shows up as a run of `Changed`
//! relations below it.

use crate::diff::model::{DiffResult, LineRelation};
use crate::document::Document;

/// Compare `left` and `right` line by line.
///
/// Produces exactly `max(left.len(), right.len())` relations in ascending
/// index order. Never fails.
pub fn compute_diff(left: &Document, right: &Document) -> DiffResult {
    let width = left.len().max(right.len());
    let relations: Vec<LineRelation> = (0..width)
        .filter_map(|i| LineRelation::classify(left.line(i), right.line(i)))
        .collect();

    tracing::debug!(
        left_lines = left.len(),
        right_lines = right.len(),
        relations = relations.len(),
        "computed line diff"
    );

    DiffResult::from_relations(relations)
}

/// Split both texts on `'\n'` and diff them.
pub fn diff_texts(left: &str, right: &str) -> DiffResult {
    compute_diff(&Document::parse(left), &Document::parse(right))
}
