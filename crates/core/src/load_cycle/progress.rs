//! Progress reporting for load cycles.
//!
//! The orchestrator reports status lines and per-section results through a
//! [`LoadProgressReporter`], so front ends can render them as they arrive.

use serde::Serialize;

use super::load_cycle_model::CycleReport;
use crate::sections::{SectionKind, SectionResult};

/// Kind of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusMode {
    /// Work in progress
    Wait,
    /// Step finished
    Ready,
    /// Cycle ended with a warning or a failure
    Error,
}

impl std::fmt::Display for StatusMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusMode::Wait => write!(f, "WAIT"),
            StatusMode::Ready => write!(f, "READY"),
            StatusMode::Error => write!(f, "ERROR"),
        }
    }
}

/// Trait for reporting load progress.
pub trait LoadProgressReporter: Send + Sync {
    /// Report a status line.
    fn report_status(&self, mode: StatusMode, message: &str);

    /// Report the result of one section as soon as it is known.
    fn report_section(&self, section: SectionKind, result: &SectionResult);

    /// Report that every displayed status must be cleared.
    fn report_cleared(&self);

    /// Report the finished cycle.
    fn report_cycle_complete(&self, report: &CycleReport);
}

/// A no-op progress reporter for contexts where progress reporting is not needed.
#[derive(Debug, Clone, Default)]
pub struct NoOpProgressReporter;

impl LoadProgressReporter for NoOpProgressReporter {
    fn report_status(&self, _mode: StatusMode, _message: &str) {
        // No-op
    }

    fn report_section(&self, _section: SectionKind, _result: &SectionResult) {
        // No-op
    }

    fn report_cleared(&self) {
        // No-op
    }

    fn report_cycle_complete(&self, _report: &CycleReport) {
        // No-op
    }
}
