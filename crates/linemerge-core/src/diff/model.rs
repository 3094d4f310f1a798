//! Line diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Relations serialize internally tagged by `kind`.

use serde::{Deserialize, Serialize};

/// Relationship of one aligned line index between left and right.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineRelation {
    /// Both sides present and identical
    Equal { text: String },
    /// Index lies past the end of left; the line exists only on the right
    Added { text: String },
    /// Index lies past the end of right; the line exists only on the left
    Deleted { text: String },
    /// Both sides present and different
    Changed {
        left_text: String,
        right_text: String,
    },
}

impl LineRelation {
    /// Classify one aligned index. Both sides absent is not a relation.
    pub fn classify(left: Option<&str>, right: Option<&str>) -> Option<Self> {
        match (left, right) {
            (Some(l), Some(r)) if l == r => Some(LineRelation::Equal { text: l.to_owned() }),
            (Some(l), Some(r)) => Some(LineRelation::Changed {
                left_text: l.to_owned(),
                right_text: r.to_owned(),
            }),
            (None, Some(r)) => Some(LineRelation::Added { text: r.to_owned() }),
            (Some(l), None) => Some(LineRelation::Deleted { text: l.to_owned() }),
            (None, None) => None,
        }
    }

    pub fn kind(&self) -> RelationKind {
        match self {
            LineRelation::Equal { .. } => RelationKind::Equal,
            LineRelation::Added { .. } => RelationKind::Added,
            LineRelation::Deleted { .. } => RelationKind::Deleted,
            LineRelation::Changed { .. } => RelationKind::Changed,
        }
    }

    /// Left-side text at this index, if the left document reaches it.
    pub fn left(&self) -> Option<&str> {
        match self {
            LineRelation::Equal { text } | LineRelation::Deleted { text } => Some(text),
            LineRelation::Changed { left_text, .. } => Some(left_text),
            LineRelation::Added { .. } => None,
        }
    }

    /// Right-side text at this index, if the right document reaches it.
    pub fn right(&self) -> Option<&str> {
        match self {
            LineRelation::Equal { text } | LineRelation::Added { text } => Some(text),
            LineRelation::Changed { right_text, .. } => Some(right_text),
            LineRelation::Deleted { .. } => None,
        }
    }
}

/// Fieldless discriminant of [`LineRelation`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Equal,
    Added,
    Deleted,
    Changed,
}

/// Ordered, index-aligned diff between two documents.
///
/// Holds exactly one relation per index in `0..max(left.len(), right.len())`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffResult {
    relations: Vec<LineRelation>,
}

impl DiffResult {
    /// Wrap an already-ordered relation sequence.
    pub fn from_relations(relations: Vec<LineRelation>) -> Self {
        Self { relations }
    }

    pub fn relations(&self) -> &[LineRelation] {
        &self.relations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineRelation> {
        self.relations.iter()
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// True when every relation is `Equal`.
    pub fn is_identical(&self) -> bool {
        self.relations
            .iter()
            .all(|r| matches!(r, LineRelation::Equal { .. }))
    }

    /// Per-kind relation counts.
    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary {
            total: self.relations.len(),
            ..DiffSummary::default()
        };
        for relation in &self.relations {
            match relation.kind() {
                RelationKind::Equal => summary.equal += 1,
                RelationKind::Added => summary.added += 1,
                RelationKind::Deleted => summary.deleted += 1,
                RelationKind::Changed => summary.changed += 1,
            }
        }
        summary
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a LineRelation;
    type IntoIter = std::slice::Iter<'a, LineRelation>;

    fn into_iter(self) -> Self::IntoIter {
        self.relations.iter()
    }
}

impl IntoIterator for DiffResult {
    type Item = LineRelation;
    type IntoIter = std::vec::IntoIter<LineRelation>;

    fn into_iter(self) -> Self::IntoIter {
        self.relations.into_iter()
    }
}

/// Relation counts for a [`DiffResult`].
///
/// `total` always equals `equal + added + deleted + changed`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffSummary {
    pub total: usize,
    pub equal: usize,
    pub added: usize,
    pub deleted: usize,
    pub changed: usize,
}
