//! Validation command handler.

use phosphor_error::{JsonError, PhosphorResult};
use phosphor_narrative::{ContentDocument, ContentParser};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::ValidationOutputFormat;

/// What parsing a content document produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Validated file
    pub path: PathBuf,
    /// Screens that survived parsing
    pub screens: usize,
    /// Dialogs that survived parsing
    pub dialogs: usize,
    /// Elements across all screens
    pub elements: usize,
    /// Elements waiting for an external load
    pub pending_loads: usize,
    /// Why records were dropped
    pub issues: Vec<String>,
}

impl ValidationReport {
    /// Process exit code for this report.
    ///
    /// `1` when nothing playable survived, `2` in strict mode when any record
    /// was dropped, `0` otherwise.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if self.screens == 0 {
            1
        } else if strict && !self.issues.is_empty() {
            2
        } else {
            0
        }
    }
}

/// Loads and parses a content document.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn validate_document(path: &Path) -> PhosphorResult<ValidationReport> {
    let document = ContentDocument::from_file(path)?;
    let parsed = ContentParser::parse(&document);
    let registry = parsed.registry();

    Ok(ValidationReport {
        path: path.to_path_buf(),
        screens: registry.screens().len(),
        dialogs: registry.dialogs().len(),
        elements: registry.screens().iter().map(|s| s.content().len()).sum(),
        pending_loads: parsed.loading().len(),
        issues: parsed
            .issues()
            .iter()
            .map(|issue| issue.kind().to_string())
            .collect(),
    })
}

/// Handles the validate command, returning the process exit code.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn handle_validate_command(
    path: PathBuf,
    format: ValidationOutputFormat,
    strict: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    tracing::info!("Starting validation");

    let report = match validate_document(&path) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "Content document is unreadable");
            match format {
                ValidationOutputFormat::Human => {
                    println!("\n❌ {}", path.display());
                    println!("{}", "─".repeat(80));
                    println!("\n  {}", e);
                }
                ValidationOutputFormat::Json => {
                    let output = serde_json::json!({
                        "path": path,
                        "error": e.to_string(),
                    });
                    println!("{}", to_json(&output)?);
                }
            }
            return Ok(1);
        }
    };

    match format {
        ValidationOutputFormat::Human => output_human(&report, strict),
        ValidationOutputFormat::Json => println!("{}", to_json(&report)?),
    }

    Ok(report.exit_code(strict))
}

/// Pretty-printed JSON for command output.
pub fn to_json<T: Serialize>(value: &T) -> PhosphorResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| JsonError::new(format!("Failed to serialize output: {}", e)).into())
}

/// Outputs a report in human-readable format.
fn output_human(report: &ValidationReport, strict: bool) {
    let status_icon = match report.exit_code(strict) {
        0 if report.issues.is_empty() => "✅",
        0 => "⚠️",
        _ => "❌",
    };

    println!("\n{} {}", status_icon, report.path.display());
    println!("{}", "─".repeat(80));
    println!(
        "\n  Screens: {}  Dialogs: {}  Elements: {}  Pending loads: {}",
        report.screens, report.dialogs, report.elements, report.pending_loads
    );

    if report.screens == 0 {
        println!("\n  No playable screens");
    }

    if report.issues.is_empty() {
        println!("\n  No issues found");
    } else {
        println!("\nDropped records:");
        for (i, issue) in report.issues.iter().enumerate() {
            println!("\n  {}. {}", i + 1, issue);
        }
    }
}
