//! Visual rendering of a line diff.
//!
//! Each relation maps to a presentation style and a single display line:
//!
//! | Relation | Style      | Line                 |
//! |----------|------------|----------------------|
//! | Added    | `addition` | `+ {text}`           |
//! | Deleted  | `deletion` | `- {text}`           |
//! | Changed  | `change`   | `± {left} → {right}` |
//! | Equal    | `equal`    | `  {text}`           |

use crate::diff::model::{DiffResult, LineRelation, RelationKind};
use serde::{Deserialize, Serialize};

/// How a shell should present one relation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PresentationStyle {
    Addition,
    Deletion,
    Change,
    Equal,
}

impl PresentationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationStyle::Addition => "addition",
            PresentationStyle::Deletion => "deletion",
            PresentationStyle::Change => "change",
            PresentationStyle::Equal => "equal",
        }
    }

    /// Two-character prefix of the display line.
    pub fn marker(&self) -> &'static str {
        match self {
            PresentationStyle::Addition => "+ ",
            PresentationStyle::Deletion => "- ",
            PresentationStyle::Change => "± ",
            PresentationStyle::Equal => "  ",
        }
    }
}

impl From<RelationKind> for PresentationStyle {
    fn from(kind: RelationKind) -> Self {
        match kind {
            RelationKind::Added => PresentationStyle::Addition,
            RelationKind::Deleted => PresentationStyle::Deletion,
            RelationKind::Changed => PresentationStyle::Change,
            RelationKind::Equal => PresentationStyle::Equal,
        }
    }
}

/// Presentation style of a single relation.
pub fn style_of(relation: &LineRelation) -> PresentationStyle {
    PresentationStyle::from(relation.kind())
}

/// Display line for a single relation, without a trailing newline.
pub fn render_line(relation: &LineRelation) -> String {
    let marker = style_of(relation).marker();
    match relation {
        LineRelation::Changed {
            left_text,
            right_text,
        } => format!("{marker}{left_text} → {right_text}"),
        LineRelation::Added { text }
        | LineRelation::Deleted { text }
        | LineRelation::Equal { text } => format!("{marker}{text}"),
    }
}

/// Render the whole diff, one newline-terminated display line per relation.
pub fn render_diff(diff: &DiffResult) -> String {
    let mut out = String::new();
    for relation in diff {
        out.push_str(&render_line(relation));
        out.push('\n');
    }
    out
}
