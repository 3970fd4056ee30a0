//! Rendering of parse results for the terminal

use standoff_config::OutputFormat;
use standoff_parser::standoff::ast::{AnnotationRecord, RecordKind};
use standoff_parser::standoff::error::LineError;
use standoff_parser::standoff::loader::ParseReport;

/// Render the records of a report in the requested format.
pub fn render_records(report: &ParseReport, format: OutputFormat) -> Result<String, String> {
    let records = &report.records;
    let rendered = match format {
        OutputFormat::Debug => lines(records, |record| format!("{:?}", record)),
        OutputFormat::Ann => lines(records, |record| record.to_string()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records)
                .map_err(|e| format!("Error formatting records: {}", e))?;
            json.push('\n');
            json
        }
        OutputFormat::Summary => summary(report),
    };
    Ok(rendered)
}

fn lines(records: &[AnnotationRecord], render: impl Fn(&AnnotationRecord) -> String) -> String {
    records.iter().map(|record| render(record) + "\n").collect()
}

fn summary(report: &ParseReport) -> String {
    let mut out = String::new();
    for kind in RecordKind::ALL {
        let count = report
            .records
            .iter()
            .filter(|record| record.kind() == kind)
            .count();
        out.push_str(&format!("{:<14} {}\n", kind, count));
    }
    out.push_str(&format!("{:<14} {}\n", "skipped", report.skipped));
    out.push_str(&format!("{:<14} {}\n", "errors", report.errors.len()));
    out
}

/// Format a malformed line for stderr: the violation, then the raw line.
pub fn render_diagnostic(error: &LineError) -> String {
    format!("error: {}\n  | {}\n", error, error.error.raw())
}
