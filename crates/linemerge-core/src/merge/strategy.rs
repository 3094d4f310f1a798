use crate::errors::LineMergeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a diff collapses into one merged document.
///
/// There is no default: the caller always picks one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MergeStrategy {
    /// Resolve each relation in turn; right wins on `Changed`
    #[serde(rename = "auto", alias = "auto-merge")]
    AutoMerge,
    /// Left document verbatim
    #[serde(rename = "left", alias = "accept-left")]
    AcceptLeft,
    /// Right document verbatim
    #[serde(rename = "right", alias = "accept-right")]
    AcceptRight,
}

impl MergeStrategy {
    /// Canonical short name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeStrategy::AutoMerge => "auto",
            MergeStrategy::AcceptLeft => "left",
            MergeStrategy::AcceptRight => "right",
        }
    }

    /// True for strategies that never look at the diff.
    pub fn is_whole_document(&self) -> bool {
        !matches!(self, MergeStrategy::AutoMerge)
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeStrategy {
    type Err = LineMergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "auto-merge" | "automerge" => Ok(MergeStrategy::AutoMerge),
            "left" | "accept-left" => Ok(MergeStrategy::AcceptLeft),
            "right" | "accept-right" => Ok(MergeStrategy::AcceptRight),
            _ => Err(LineMergeError::UnknownStrategy { name: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_and_aliases() {
        assert_eq!("auto".parse::<MergeStrategy>(), Ok(MergeStrategy::AutoMerge));
        assert_eq!("Auto-Merge".parse::<MergeStrategy>(), Ok(MergeStrategy::AutoMerge));
        assert_eq!("accept-left".parse::<MergeStrategy>(), Ok(MergeStrategy::AcceptLeft));
        assert_eq!(" RIGHT ".parse::<MergeStrategy>(), Ok(MergeStrategy::AcceptRight));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "theirs".parse::<MergeStrategy>(),
            Err(LineMergeError::UnknownStrategy {
                name: "theirs".to_string()
            })
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for strategy in [
            MergeStrategy::AutoMerge,
            MergeStrategy::AcceptLeft,
            MergeStrategy::AcceptRight,
        ] {
            assert_eq!(strategy.to_string().parse::<MergeStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_serde_names_and_aliases() {
        assert_eq!(
            serde_json::to_string(&MergeStrategy::AcceptLeft).unwrap(),
            "\"left\""
        );
        let parsed: MergeStrategy = serde_json::from_str("\"accept-right\"").unwrap();
        assert_eq!(parsed, MergeStrategy::AcceptRight);
    }

    #[test]
    fn test_whole_document_strategies() {
        assert!(!MergeStrategy::AutoMerge.is_whole_document());
        assert!(MergeStrategy::AcceptLeft.is_whole_document());
        assert!(MergeStrategy::AcceptRight.is_whole_document());
    }
}
