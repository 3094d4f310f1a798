//! Line-split text documents.

use std::fmt;

/// An immutable text document viewed as an ordered sequence of lines.
///
/// Lines are produced by splitting on `'\n'` with no trimming, so an empty
/// input is one empty line and a trailing newline yields a trailing empty
/// line. Joining the lines back with `"\n"` reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split `text` into a document.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Build a document from already-split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at `index`, or `None` past the end of the document.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True only for a document built from zero lines; a parsed document
    /// always has at least one line.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Re-join the lines with `"\n"`.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Exchange the two sides of a comparison.
pub fn swap_sides<T>(left: T, right: T) -> (T, T) {
    (right, left)
}
