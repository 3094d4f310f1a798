//! Human-readable summary renderer for line diffs.

use crate::diff::model::DiffResult;

/// Render a Markdown summary of a [`DiffResult`].
///
/// Informational only: counts per relation kind and an overall
/// classification. The structured diff is unaffected.
pub fn render_human_summary(diff: &DiffResult) -> String {
    let summary = diff.summary();
    let mut out = String::new();

    out.push_str("## Line Diff\n\n");

    let class_label = if diff.is_identical() {
        "Identical"
    } else {
        "Changed"
    };
    out.push_str(&format!(
        "**Classification**: {class_label}  \n**Lines compared**: {}\n\n",
        summary.total
    ));

    if diff.is_identical() {
        out.push_str("_No differences detected._\n");
        return out;
    }

    out.push_str("| Relation | Lines |\n|---|---|\n");
    out.push_str(&format!("| Equal | {} |\n", summary.equal));
    out.push_str(&format!("| Added | {} |\n", summary.added));
    out.push_str(&format!("| Deleted | {} |\n", summary.deleted));
    out.push_str(&format!("| Changed | {} |\n", summary.changed));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::engine::diff_texts;

    #[test]
    fn test_summary_identical() {
        let s = render_human_summary(&diff_texts("a\nb", "a\nb"));
        assert!(s.contains("**Classification**: Identical"));
        assert!(s.contains("**Lines compared**: 2"));
        assert!(s.contains("No differences detected"));
        assert!(!s.contains("| Relation |"));
    }

    #[test]
    fn test_summary_changed_counts() {
        let s = render_human_summary(&diff_texts("a\nb\nc", "a\nx"));
        assert!(s.contains("**Classification**: Changed"));
        assert!(s.contains("| Equal | 1 |"));
        assert!(s.contains("| Changed | 1 |"));
        assert!(s.contains("| Deleted | 1 |"));
        assert!(s.contains("| Added | 0 |"));
    }

    #[test]
    fn test_summary_empty_input_counts_one_line() {
        let s = render_human_summary(&diff_texts("", ""));
        assert!(s.contains("**Lines compared**: 1"));
    }
}
