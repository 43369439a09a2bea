//! Load cycle orchestrator.
//!
//! Resolves the grant set once, then runs the sections one after another in
//! [`SectionKind::ALL`] order. Every fetch is awaited before the next starts.

use std::sync::{Arc, Mutex};

use log::{error, info, warn};
use raidexplorer_gw2_api::{AccountApi, ApiError, FailureClass};

use super::load_cycle_model::{
    CycleFailure, CycleOutcome, CycleReport, LoadRequest, LoadState, SectionReport,
};
use super::progress::{LoadProgressReporter, StatusMode};
use crate::errors::{Error, Result};
use crate::permissions::{resolve_grants, GrantSet};
use crate::sections::{load_section, SectionKind};

/// Orchestrates one load cycle at a time.
///
/// A second [`run`](Self::run) while one is active is rejected with
/// [`Error::LoadInProgress`] instead of queueing.
///
/// # Example
///
/// ```ignore
/// let orchestrator = LoadOrchestrator::new(api, Arc::new(NoOpProgressReporter));
/// let report = orchestrator.run(LoadRequest::new(secret, toggles)).await?;
/// println!("{}", report.summary());
/// ```
pub struct LoadOrchestrator<P: LoadProgressReporter> {
    api: Arc<dyn AccountApi>,
    progress_reporter: Arc<P>,
    in_flight: tokio::sync::Mutex<()>,
    state: Mutex<LoadState>,
}

impl<P: LoadProgressReporter> LoadOrchestrator<P> {
    /// Create a new orchestrator.
    pub fn new(api: Arc<dyn AccountApi>, progress_reporter: Arc<P>) -> Self {
        Self {
            api,
            progress_reporter,
            in_flight: tokio::sync::Mutex::new(()),
            state: Mutex::new(LoadState::Idle),
        }
    }

    /// Current state of the most recent cycle.
    pub fn state(&self) -> LoadState {
        self.state
            .lock()
            .map(|state| *state)
            .unwrap_or(LoadState::Failed)
    }

    fn set_state(&self, state: LoadState) {
        if let Ok(mut current) = self.state.lock() {
            *current = state;
        }
    }

    /// Resolve the grant set of `secret` outside a load cycle.
    pub async fn resolve_permissions(&self, secret: &str) -> Result<GrantSet> {
        self.progress_reporter
            .report_status(StatusMode::Wait, "Loading API key permissions...");
        match resolve_grants(self.api.as_ref(), secret).await {
            Ok(grants) => {
                self.progress_reporter
                    .report_status(StatusMode::Ready, "Permissions loaded.");
                Ok(grants)
            }
            Err(err) => {
                let failure = classify_resolution_error(&err);
                self.progress_reporter
                    .report_status(StatusMode::Error, &failure.message());
                Err(Error::Api(err))
            }
        }
    }

    /// Run one full load cycle.
    ///
    /// Fetch failures do not surface as `Err`; they end the cycle with a
    /// [`CycleOutcome::Failed`] report so completed sections are kept.
    pub async fn run(&self, request: LoadRequest) -> Result<CycleReport> {
        let _guard = self.in_flight.try_lock().map_err(|_| {
            warn!("[LoadCycle] Rejected load request, another cycle is running");
            Error::LoadInProgress
        })?;

        info!("[LoadCycle] Starting load cycle");
        self.progress_reporter
            .report_status(StatusMode::Wait, "Loading your data...");

        let report = self.run_internal(&request).await;

        match &report.outcome {
            CycleOutcome::Done { denials } => {
                self.set_state(LoadState::Done);
                let mode = if denials.is_empty() {
                    StatusMode::Ready
                } else {
                    StatusMode::Error
                };
                info!(
                    "[LoadCycle] Finished with {} permission notes",
                    denials.len()
                );
                self.progress_reporter.report_status(mode, &report.summary());
            }
            CycleOutcome::Failed { failure } => {
                self.set_state(LoadState::Failed);
                error!("[LoadCycle] Failed: {}", failure);
                self.progress_reporter
                    .report_status(StatusMode::Error, &report.summary());
            }
        }
        self.progress_reporter.report_cycle_complete(&report);

        Ok(report)
    }

    async fn run_internal(&self, request: &LoadRequest) -> CycleReport {
        self.set_state(LoadState::ResolvingPermissions);
        let grants = match resolve_grants(self.api.as_ref(), &request.secret).await {
            Ok(grants) => grants,
            Err(err) => {
                let failure = classify_resolution_error(&err);
                if failure == CycleFailure::CredentialInvalid {
                    self.progress_reporter.report_cleared();
                }
                return CycleReport {
                    grants: None,
                    sections: Vec::new(),
                    outcome: CycleOutcome::Failed { failure },
                };
            }
        };

        let mut sections = Vec::with_capacity(SectionKind::ALL.len());
        let mut denials = Vec::new();

        for kind in SectionKind::ALL {
            self.set_state(LoadState::Loading(kind));
            self.progress_reporter
                .report_status(StatusMode::Wait, &format!("Loading {} section...", kind));

            let result = match load_section(
                kind,
                self.api.as_ref(),
                &request.secret,
                &grants,
                &request.toggles,
            )
            .await
            {
                Ok(result) => result,
                Err(err) => {
                    let failure = classify_section_error(kind, &err);
                    if failure == CycleFailure::CredentialInvalid {
                        self.progress_reporter.report_cleared();
                        sections.clear();
                    }
                    return CycleReport {
                        grants: Some(grants),
                        sections,
                        outcome: CycleOutcome::Failed { failure },
                    };
                }
            };

            if let Some(denial) = result.denial() {
                denials.push(denial.clone());
            }
            self.progress_reporter.report_section(kind, &result);
            self.progress_reporter
                .report_status(StatusMode::Ready, &format!("{} section loaded.", kind));
            sections.push(SectionReport {
                section: kind,
                result,
            });
        }

        CycleReport {
            grants: Some(grants),
            sections,
            outcome: CycleOutcome::Done { denials },
        }
    }
}

fn classify_resolution_error(err: &ApiError) -> CycleFailure {
    match err.failure_class() {
        FailureClass::InvalidCredential => CycleFailure::CredentialInvalid,
        FailureClass::InsufficientScope | FailureClass::Other => CycleFailure::Transport {
            section: None,
            detail: err.to_string(),
        },
    }
}

fn classify_section_error(section: SectionKind, err: &ApiError) -> CycleFailure {
    match err.failure_class() {
        FailureClass::InvalidCredential => CycleFailure::CredentialInvalid,
        FailureClass::InsufficientScope => CycleFailure::AuthorizationMismatch {
            section,
            detail: err.to_string(),
        },
        FailureClass::Other => CycleFailure::Transport {
            section: Some(section),
            detail: err.to_string(),
        },
    }
}
