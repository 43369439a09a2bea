//! Console presentation of load progress and results.
//!
//! Text output prints status lines and section results as they arrive. JSON
//! output writes one object per event so it can be streamed.

use std::io::Write;
use std::sync::Mutex;

use raidexplorer_core::load_cycle::{CycleReport, LoadProgressReporter, StatusMode};
use raidexplorer_core::permissions::ScopeStatus;
use raidexplorer_core::sections::{SectionKind, SectionResult};
use serde_json::json;

use crate::cli::OutputFormat;

pub struct ConsoleReporter<W: Write + Send> {
    format: OutputFormat,
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self {
            format,
            out: Mutex::new(out),
        }
    }

    fn emit_text(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            if let Err(e) = writeln!(out, "{}", text) {
                tracing::warn!("Failed to write output: {}", e);
            }
        }
    }

    fn emit_json(&self, value: serde_json::Value) {
        self.emit_text(&value.to_string());
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> LoadProgressReporter for ConsoleReporter<W> {
    fn report_status(&self, mode: StatusMode, message: &str) {
        match self.format {
            OutputFormat::Text => self.emit_text(&format!("[{}] {}", mode, message)),
            OutputFormat::Json => self.emit_json(json!({
                "event": "status",
                "mode": mode,
                "message": message,
            })),
        }
    }

    fn report_section(&self, section: SectionKind, result: &SectionResult) {
        match self.format {
            OutputFormat::Text => self.emit_text(&format_section(section, result)),
            OutputFormat::Json => self.emit_json(json!({
                "event": "section",
                "section": section,
                "result": result,
            })),
        }
    }

    fn report_cleared(&self) {
        match self.format {
            OutputFormat::Text => self.emit_text("Results cleared."),
            OutputFormat::Json => self.emit_json(json!({ "event": "cleared" })),
        }
    }

    fn report_cycle_complete(&self, report: &CycleReport) {
        if self.format == OutputFormat::Json {
            self.emit_json(json!({
                "event": "complete",
                "success": report.is_success(),
                "summary": report.summary(),
                "report": report,
            }));
        }
    }
}

/// Renders one section result as an indented block.
pub fn format_section(section: SectionKind, result: &SectionResult) -> String {
    let mut lines = Vec::new();
    match result {
        SectionResult::Flags(flags) => {
            let done = flags.iter().filter(|flag| flag.done).count();
            lines.push(format!("{} ({}/{})", section.title(), done, flags.len()));
            for flag in flags {
                let mark = if flag.done { "x" } else { " " };
                lines.push(format!("  [{}] {}", mark, flag.slot));
            }
        }
        SectionResult::Currency(totals) => {
            lines.push(section.title().to_string());
            for total in totals {
                let value = total
                    .value
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string());
                lines.push(format!("  {:<24} {}", total.slot, value));
            }
        }
        SectionResult::Disabled => {
            lines.push(format!("{} (disabled)", section.title()));
        }
        SectionResult::MissingPermission(denial) => {
            lines.push(format!("{} (skipped)", section.title()));
            lines.push(format!("  {}", denial.message));
        }
    }
    lines.join("\n")
}

/// Renders the granted/not granted listing of every scope.
pub fn format_scopes(statuses: &[ScopeStatus]) -> String {
    statuses
        .iter()
        .map(|status| {
            let state = if status.granted { "granted" } else { "not granted" };
            format!("  {:<12} {}", status.scope.label(), state)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
