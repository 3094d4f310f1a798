//! Universal properties of the positional diff and merge.

use linemerge_core::diff::{diff_texts, LineRelation};
use linemerge_core::merge::{merge, resolve_auto, MergeStrategy};
use linemerge_core::{compute_diff, Document};
use proptest::prelude::*;

/// Text built from a small alphabet so that equal lines actually occur.
fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!["", "a", "b", "ab", "\r", "é"]), 0..12)
        .prop_map(|parts| parts.join("\n"))
}

fn line_count(s: &str) -> usize {
    s.split('\n').count()
}

proptest! {
    #[test]
    fn self_diff_is_all_equal(s in text()) {
        let diff = diff_texts(&s, &s);
        prop_assert_eq!(diff.len(), line_count(&s));
        let all_equal = diff.iter().all(|r| matches!(r, LineRelation::Equal { .. }));
        prop_assert!(all_equal);
    }

    #[test]
    fn diff_length_is_max_line_count(l in text(), r in text()) {
        let diff = diff_texts(&l, &r);
        prop_assert_eq!(diff.len(), line_count(&l).max(line_count(&r)));
    }

    #[test]
    fn relation_sides_match_documents(l in text(), r in text()) {
        let left = Document::parse(&l);
        let right = Document::parse(&r);
        let diff = compute_diff(&left, &right);
        for (i, rel) in diff.iter().enumerate() {
            prop_assert_eq!(rel.left(), left.line(i));
            prop_assert_eq!(rel.right(), right.line(i));
        }
    }

    #[test]
    fn accept_strategies_return_inputs(l in text(), r in text(), other in text()) {
        let left = Document::parse(&l);
        let right = Document::parse(&r);
        // Any diff will do; whole-document strategies never read it.
        let unrelated = diff_texts(&other, &l);
        let merged_left = merge(&unrelated, &left, &right, MergeStrategy::AcceptLeft);
        let merged_right = merge(&unrelated, &left, &right, MergeStrategy::AcceptRight);
        prop_assert_eq!(merged_left.as_str(), l.as_str());
        prop_assert_eq!(merged_right.as_str(), r.as_str());
    }

    #[test]
    fn auto_merge_of_equal_inputs_is_identity(s in text()) {
        let doc = Document::parse(&s);
        let diff = compute_diff(&doc, &doc);
        let merged = merge(&diff, &doc, &doc, MergeStrategy::AutoMerge);
        prop_assert_eq!(merged.as_str(), s.as_str());
    }

    #[test]
    fn auto_merge_lines_follow_resolution_table(l in text(), r in text()) {
        let left = Document::parse(&l);
        let right = Document::parse(&r);
        let diff = compute_diff(&left, &right);
        let merged = merge(&diff, &left, &right, MergeStrategy::AutoMerge);
        let lines: Vec<&str> = merged.as_str().split('\n').collect();
        prop_assert_eq!(lines.len(), diff.len());
        for (line, rel) in lines.iter().zip(diff.iter()) {
            prop_assert_eq!(*line, resolve_auto(rel));
        }
    }

    #[test]
    fn auto_merge_prefers_right_where_right_exists(l in text(), r in text()) {
        let merged = linemerge_core::merge_texts(&l, &r, MergeStrategy::AutoMerge);
        let merged_lines: Vec<&str> = merged.as_str().split('\n').collect();
        let right_lines: Vec<&str> = r.split('\n').collect();
        prop_assert_eq!(&merged_lines[..right_lines.len()], &right_lines[..]);
    }
}
