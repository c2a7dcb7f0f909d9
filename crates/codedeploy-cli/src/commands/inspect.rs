//! `cdshape inspect` and `cdshape validate`: offline payload checks.

use std::fmt::Write;

use serde::Serialize;
use tabled::Tabled;

use codedeploy_model::{Inspection, Violations, operation};

use crate::cli::{GlobalOpts, OutputFormat, PayloadArgs};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Report shapes ───────────────────────────────────────────────────

#[derive(Debug, Serialize, Tabled)]
pub(crate) struct ViolationRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Problem")]
    message: String,
}

pub(crate) fn violation_rows(violations: Option<&Violations>) -> Vec<ViolationRow> {
    violations
        .map(|v| {
            v.iter()
                .map(|violation| ViolationRow {
                    path: violation.path.clone(),
                    message: violation.message.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    operation: &'static str,
    shape: &'static str,
    rendered: &'a str,
    canonical: &'a serde_json::Value,
    violations: Vec<ViolationRow>,
}

#[derive(Debug, Serialize)]
struct ValidateReport {
    operation: &'static str,
    shape: &'static str,
    valid: bool,
    violations: Vec<ViolationRow>,
}

// ── Shared ──────────────────────────────────────────────────────────

fn load(args: &PayloadArgs) -> Result<(&'static str, Inspection), CliError> {
    let info = operation::find(&args.operation)?;
    let json = util::read_payload(args.file.as_deref())?;
    let inspection = if args.response {
        (info.inspect_output)(&json)?
    } else {
        (info.inspect_input)(&json)?
    };
    Ok((info.name, inspection))
}

fn shape_label(args: &PayloadArgs) -> &'static str {
    if args.response { "response" } else { "request" }
}

fn violations_text(rows: &[ViolationRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "  - {}: {}", row.path, row.message);
    }
    out.trim_end().to_owned()
}

// ── Handlers ────────────────────────────────────────────────────────

pub fn handle_inspect(args: &PayloadArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let (name, inspection) = load(args)?;
    let report = InspectReport {
        operation: name,
        shape: shape_label(args),
        rendered: &inspection.rendered,
        canonical: &inspection.canonical,
        violations: violation_rows(inspection.violations.as_ref()),
    };

    let rendered = output::render_single(global.output_format(), &report, |r| {
        let mut out = String::new();
        let _ = writeln!(out, "{} {}", r.operation, r.shape);
        let _ = writeln!(out, "rendered:   {}", r.rendered);
        let _ = writeln!(out, "canonical:  {}", r.canonical);
        if r.violations.is_empty() {
            let _ = write!(out, "violations: none");
        } else {
            let _ = writeln!(out, "violations: {}", r.violations.len());
            let _ = write!(out, "{}", violations_text(&r.violations));
        }
        out
    })?;
    output::print_output(&rendered, global.quiet);
    Ok(())
}

pub fn handle_validate(args: &PayloadArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let (name, inspection) = load(args)?;
    let report = ValidateReport {
        operation: name,
        shape: shape_label(args),
        valid: inspection.violations.is_none(),
        violations: violation_rows(inspection.violations.as_ref()),
    };

    let rendered = match global.output_format() {
        OutputFormat::Table if !report.valid => output::render_table(&report.violations),
        format => output::render_single(format, &report, |r| {
            if r.valid {
                format!("{} {}: ok", r.operation, r.shape)
            } else {
                format!(
                    "{} {}: {} violation(s)\n{}",
                    r.operation,
                    r.shape,
                    r.violations.len(),
                    violations_text(&r.violations)
                )
            }
        })?,
    };
    output::print_output(&rendered, global.quiet);

    match inspection.violations {
        Some(violations) => Err(CliError::ConstraintViolations {
            operation: name.to_owned(),
            count: violations.len(),
            details: violations.to_string(),
        }),
        None => Ok(()),
    }
}
