use std::fmt::Write;
use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use serde::Serialize;

use crate::validation::{Finding, Severity};

pub struct Report {
    findings: Vec<Finding>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    errors: usize,
    warnings: usize,
    files: Vec<JsonFile<'a>>,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    file: String,
    findings: Vec<JsonFinding<'a>>,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    severity: Severity,
    message: &'a str,
}

impl Report {
    pub fn new(findings: Vec<Finding>) -> Report {
        Report { findings }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings.len() - self.error_count()
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.is_error())
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.has_errors() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    /// Findings per file, files in the order they were first seen
    pub fn group_by_file(&self) -> Vec<(&Path, Vec<&Finding>)> {
        let mut groups: Vec<(&Path, Vec<&Finding>)> = vec![];
        for finding in &self.findings {
            match groups.iter().position(|(file, _)| *file == finding.file.as_path()) {
                Some(idx) => groups[idx].1.push(finding),
                None => groups.push((finding.file.as_path(), vec![finding])),
            }
        }
        groups
    }

    pub fn render_text(&self, use_colors: bool) -> String {
        let mut buf = String::new();

        if self.findings.is_empty() {
            let msg = "✓ All posts are valid!";
            let _ = writeln!(&mut buf, "{}", if use_colors { msg.green().bold().to_string() } else { msg.to_string() });
            return buf;
        }

        let _ = writeln!(&mut buf, "Found {} error(s) and {} warning(s)", self.error_count(), self.warning_count());

        for (file, findings) in self.group_by_file() {
            let file = file.display().to_string();
            let _ = writeln!(&mut buf);
            let _ = writeln!(&mut buf, "{}", if use_colors { file.bold().underline().to_string() } else { file });

            for finding in findings {
                let line = match finding.severity {
                    Severity::Error => format!("  ✗ {}", finding.message),
                    Severity::Warning => format!("  ⚠ {}", finding.message),
                };
                let line = match (use_colors, finding.severity) {
                    (false, _) => line,
                    (true, Severity::Error) => line.red().to_string(),
                    (true, Severity::Warning) => line.yellow().to_string(),
                };
                let _ = writeln!(&mut buf, "{}", line);
            }
        }

        buf
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        let files = self.group_by_file().into_iter()
            .map(|(file, findings)| JsonFile {
                file: file.display().to_string(),
                findings: findings.into_iter()
                    .map(|f| JsonFinding { severity: f.severity, message: &f.message })
                    .collect(),
            })
            .collect();

        let report = JsonReport {
            errors: self.error_count(),
            warnings: self.warning_count(),
            files,
        };
        serde_json::to_string_pretty(&report)
    }
}
