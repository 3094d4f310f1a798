//! Merge command
//!
//! Usage: linemerge merge <LEFT> <RIGHT> --strategy <auto|left|right> [--swap] [--output <FILE> | --export]

use clap::Args;
use linemerge_core::merge::diff_for;
use linemerge_core::{log_op_end, log_op_error, log_op_start, merge, Document, MergeStrategy};
use linemerge_core_types::RequestContext;
use std::path::{Path, PathBuf};

use crate::source;

/// File name used by `--export`
pub const DEFAULT_EXPORT_NAME: &str = "merged.txt";

#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Left document path ("-" for stdin)
    pub left: PathBuf,

    /// Right document path ("-" for stdin)
    pub right: PathBuf,

    /// Merge strategy: auto, left or right
    #[arg(short, long)]
    pub strategy: String,

    /// Exchange left and right before merging
    #[arg(long)]
    pub swap: bool,

    /// Output file path (default: stdout)
    #[arg(short, long, conflicts_with = "export")]
    pub output: Option<PathBuf>,

    /// Write the merged document to merged.txt in the current directory
    #[arg(long)]
    pub export: bool,
}

impl MergeArgs {
    fn target(&self) -> Option<&Path> {
        match (&self.output, self.export) {
            (Some(path), _) => Some(path.as_path()),
            (None, true) => Some(Path::new(DEFAULT_EXPORT_NAME)),
            (None, false) => None,
        }
    }
}

/// Execute merge command
pub fn execute(args: MergeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();
    log_op_start!(
        "merge",
        request_id = ctx.request_id.as_str(),
        strategy = args.strategy.as_str(),
        swap = args.swap
    );
    let start = std::time::Instant::now();

    let merged_lines = execute_impl(&args).map_err(|e| {
        log_op_error!(
            "merge",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = ctx.request_id.as_str()
        );
        e
    })?;

    log_op_end!(
        "merge",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = ctx.request_id.as_str(),
        merged_lines = merged_lines as u64
    );

    if let Some(path) = args.target() {
        println!("✓ Merged to {}", path.display());
    }

    Ok(())
}

fn execute_impl(args: &MergeArgs) -> linemerge_core::Result<usize> {
    let strategy: MergeStrategy = args.strategy.parse()?;
    let (left_text, right_text) = source::read_sides(&args.left, &args.right, args.swap)?;

    let left = Document::parse(&left_text);
    let right = Document::parse(&right_text);
    let diff = diff_for(&left, &right, strategy);
    let merged = merge(&diff, &left, &right, strategy);

    source::write_output(args.target(), merged.as_str())?;
    Ok(merged.line_count())
}
