//! Load cycle models.

use std::fmt;

use serde::Serialize;

use crate::permissions::GrantSet;
use crate::sections::{PermissionDenial, SectionKind, SectionResult, SectionToggles};

/// Summary shown when every section loaded without a permission note.
pub const API_DATA_LOADED: &str = "API data loaded.";

/// Prefix of the summary when one or more sections were denied.
pub const NOT_ENOUGH_PERMISSION: &str = "Not enough permission to do that";

/// Where the orchestrator is in a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "section", rename_all = "snake_case")]
pub enum LoadState {
    Idle,
    ResolvingPermissions,
    Loading(SectionKind),
    Done,
    Failed,
}

/// Inputs of one load cycle: the borrowed secret and the toggles snapshot.
#[derive(Clone)]
pub struct LoadRequest {
    pub secret: String,
    pub toggles: SectionToggles,
}

impl LoadRequest {
    pub fn new(secret: impl Into<String>, toggles: SectionToggles) -> Self {
        Self {
            secret: secret.into(),
            toggles,
        }
    }
}

impl fmt::Debug for LoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadRequest")
            .field("secret", &"<redacted>")
            .field("toggles", &self.toggles)
            .finish()
    }
}

/// Result of one section within a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub section: SectionKind,
    pub result: SectionResult,
}

/// Why a cycle stopped early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CycleFailure {
    /// The API rejected the key. All statuses are cleared.
    CredentialInvalid,
    /// The API refused a section whose scopes the key reported as granted.
    AuthorizationMismatch { section: SectionKind, detail: String },
    /// Any other fetch failure, surfaced verbatim.
    Transport {
        section: Option<SectionKind>,
        detail: String,
    },
}

impl CycleFailure {
    /// The single user-facing line for this failure.
    pub fn message(&self) -> String {
        match self {
            CycleFailure::CredentialInvalid => "Your API key is not valid.".to_string(),
            CycleFailure::AuthorizationMismatch { section, detail } => format!(
                "The API refused the {} section although the key grants its permissions: {}",
                section, detail
            ),
            CycleFailure::Transport { detail, .. } => detail.clone(),
        }
    }
}

impl fmt::Display for CycleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Terminal state of a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CycleOutcome {
    Done { denials: Vec<PermissionDenial> },
    Failed { failure: CycleFailure },
}

/// Everything a cycle produced.
///
/// On failure `sections` keeps the sections that completed before the abort,
/// except for an invalid credential, which clears them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub grants: Option<GrantSet>,
    pub sections: Vec<SectionReport>,
    pub outcome: CycleOutcome,
}

impl CycleReport {
    pub fn is_success(&self) -> bool {
        matches!(&self.outcome, CycleOutcome::Done { denials } if denials.is_empty())
    }

    pub fn section(&self, kind: SectionKind) -> Option<&SectionResult> {
        self.sections
            .iter()
            .find(|report| report.section == kind)
            .map(|report| &report.result)
    }

    /// The end-of-cycle status line.
    ///
    /// Denied sections are joined into one warning:
    /// "Not enough permission to do that - Minis need: Unlocks - Skins need: Unlocks".
    pub fn summary(&self) -> String {
        match &self.outcome {
            CycleOutcome::Done { denials } if denials.is_empty() => API_DATA_LOADED.to_string(),
            CycleOutcome::Done { denials } => {
                let notes = denials
                    .iter()
                    .map(|denial| denial.message.as_str())
                    .collect::<Vec<_>>()
                    .join(" - ");
                format!("{} - {}", NOT_ENOUGH_PERMISSION, notes)
            }
            CycleOutcome::Failed { failure } => failure.message(),
        }
    }
}
