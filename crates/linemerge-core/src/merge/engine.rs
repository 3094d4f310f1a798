//! Merge computation.
//!
//! The entry point is [`merge`], which collapses a [`DiffResult`] (or one of
//! the raw documents) into a [`MergedDocument`] under a [`MergeStrategy`].

use crate::diff::model::{DiffResult, LineRelation};
use crate::document::Document;
use crate::merge::strategy::MergeStrategy;
use std::fmt;

/// Output of a merge: resolved lines joined with `"\n"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MergedDocument(String);

impl MergedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of lines under the same `'\n'` split rule used for input.
    pub fn line_count(&self) -> usize {
        self.0.split('\n').count()
    }
}

impl fmt::Display for MergedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MergedDocument> for String {
    fn from(doc: MergedDocument) -> Self {
        doc.0
    }
}

impl PartialEq<str> for MergedDocument {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MergedDocument {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Line chosen by auto-merge for one relation.
///
/// Deletions keep the left line and conflicts take the right line.
pub fn resolve_auto(relation: &LineRelation) -> &str {
    match relation {
        LineRelation::Equal { text }
        | LineRelation::Added { text }
        | LineRelation::Deleted { text } => text,
        LineRelation::Changed { right_text, .. } => right_text,
    }
}

/// Merge two documents.
///
/// `AcceptLeft` and `AcceptRight` ignore `diff` and return the chosen
/// document unchanged. `AutoMerge` ignores the documents and emits one line
/// per relation, so an empty diff gives an empty string.
pub fn merge(
    diff: &DiffResult,
    left: &Document,
    right: &Document,
    strategy: MergeStrategy,
) -> MergedDocument {
    let merged = match strategy {
        MergeStrategy::AcceptLeft => left.to_text(),
        MergeStrategy::AcceptRight => right.to_text(),
        MergeStrategy::AutoMerge => diff
            .iter()
            .map(resolve_auto)
            .collect::<Vec<&str>>()
            .join("\n"),
    };

    tracing::debug!(
        strategy = strategy.as_str(),
        relations = diff.len(),
        merged_bytes = merged.len(),
        "merged documents"
    );

    MergedDocument(merged)
}

/// Diff that `strategy` needs: the full diff for auto-merge, nothing for
/// whole-document strategies.
pub fn diff_for(left: &Document, right: &Document, strategy: MergeStrategy) -> DiffResult {
    if strategy.is_whole_document() {
        DiffResult::default()
    } else {
        crate::diff::engine::compute_diff(left, right)
    }
}

/// Diff and merge two texts in one step.
pub fn merge_texts(left: &str, right: &str, strategy: MergeStrategy) -> MergedDocument {
    let left = Document::parse(left);
    let right = Document::parse(right);
    let diff = diff_for(&left, &right, strategy);
    merge(&diff, &left, &right, strategy)
}
