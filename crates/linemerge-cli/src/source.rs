//! Reading sources and writing results.
//!
//! `-` names stdin. Bytes are decoded lossily: the engine treats every
//! string as valid, so invalid UTF-8 is not an error here either.

use linemerge_core::{LineMergeError, Result};
use std::io::{Read, Write};
use std::path::Path;

pub const STDIN_MARKER: &str = "-";

fn is_stdin(path: &Path) -> bool {
    path == Path::new(STDIN_MARKER)
}

/// Read one side of the comparison.
pub fn read_source(path: &Path) -> Result<String> {
    let unreadable = |e: std::io::Error| LineMergeError::SourceUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let bytes = if is_stdin(path) {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map_err(unreadable)?;
        buf
    } else {
        std::fs::read(path).map_err(unreadable)?
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read both sides, optionally swapped.
pub fn read_sides(left: &Path, right: &Path, swap: bool) -> Result<(String, String)> {
    if is_stdin(left) && is_stdin(right) {
        return Err(LineMergeError::StdinUsedTwice);
    }
    let left_text = read_source(left)?;
    let right_text = read_source(right)?;
    Ok(if swap {
        linemerge_core::swap_sides(left_text, right_text)
    } else {
        (left_text, right_text)
    })
}

/// Write `contents` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, contents).map_err(|e| LineMergeError::ExportFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| LineMergeError::ExportFailed {
                    path: "<stdout>".to_string(),
                    reason: e.to_string(),
                })
        }
    }
}
