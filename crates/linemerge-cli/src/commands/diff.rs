//! Diff command
//!
//! Usage: linemerge diff <LEFT> <RIGHT> [--swap] [--format <FORMAT>] [--output <FILE>]

use clap::Args;
use linemerge_core::diff::{
    render_diff, render_human_summary, style_of, DiffResult, DiffSummary, LineRelation,
    PresentationStyle,
};
use linemerge_core::{diff_texts, log_op_end, log_op_error, log_op_start, LineMergeError};
use linemerge_core_types::RequestContext;
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

use crate::source;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Left document path ("-" for stdin)
    pub left: PathBuf,

    /// Right document path ("-" for stdin)
    pub right: PathBuf,

    /// Exchange left and right before comparing
    #[arg(long)]
    pub swap: bool,

    /// Output format: text, json or summary
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Summary,
}

impl FromStr for OutputFormat {
    type Err = LineMergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "summary" => Ok(OutputFormat::Summary),
            _ => Err(LineMergeError::UnknownFormat { name: s.to_owned() }),
        }
    }
}

#[derive(Serialize)]
struct DiffReport<'a> {
    summary: DiffSummary,
    relations: Vec<ReportedRelation<'a>>,
}

#[derive(Serialize)]
struct ReportedRelation<'a> {
    style: PresentationStyle,
    #[serde(flatten)]
    relation: &'a LineRelation,
}

impl<'a> DiffReport<'a> {
    fn new(diff: &'a DiffResult) -> Self {
        DiffReport {
            summary: diff.summary(),
            relations: diff
                .iter()
                .map(|relation| ReportedRelation {
                    style: style_of(relation),
                    relation,
                })
                .collect(),
        }
    }
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();
    log_op_start!(
        "diff",
        request_id = ctx.request_id.as_str(),
        swap = args.swap
    );
    let start = std::time::Instant::now();

    let summary = execute_impl(&args).map_err(|e| {
        log_op_error!(
            "diff",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = ctx.request_id.as_str()
        );
        e
    })?;

    log_op_end!(
        "diff",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = ctx.request_id.as_str(),
        relations = summary.total as u64,
        changed = summary.changed as u64
    );

    Ok(())
}

fn execute_impl(args: &DiffArgs) -> linemerge_core::Result<DiffSummary> {
    let format: OutputFormat = args.format.parse()?;
    let (left, right) = source::read_sides(&args.left, &args.right, args.swap)?;

    let diff = diff_texts(&left, &right);
    let summary = diff.summary();

    let rendered = match format {
        OutputFormat::Text => render_diff(&diff),
        OutputFormat::Summary => render_human_summary(&diff),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&DiffReport::new(&diff))?;
            json.push('\n');
            json
        }
    };

    source::write_output(args.output.as_deref(), &rendered)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("summary".parse::<OutputFormat>(), Ok(OutputFormat::Summary));
        assert_eq!(
            "html".parse::<OutputFormat>(),
            Err(LineMergeError::UnknownFormat {
                name: "html".to_string()
            })
        );
    }

    #[test]
    fn test_report_carries_style_beside_relation() {
        let diff = linemerge_core::diff_texts("a\nb", "a\nc\nd");
        let json = serde_json::to_value(DiffReport::new(&diff)).unwrap();

        assert_eq!(json["summary"]["total"], 3);
        assert_eq!(json["relations"][0]["style"], "equal");
        assert_eq!(json["relations"][0]["kind"], "equal");
        assert_eq!(json["relations"][1]["style"], "change");
        assert_eq!(json["relations"][1]["left_text"], "b");
        assert_eq!(json["relations"][1]["right_text"], "c");
        assert_eq!(json["relations"][2]["style"], "addition");
        assert_eq!(json["relations"][2]["text"], "d");
    }
}
