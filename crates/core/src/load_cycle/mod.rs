//! Load cycle - permission resolution followed by every section, in order.

mod load_cycle_model;
mod orchestrator;
mod progress;


pub use load_cycle_model::{
    CycleFailure, CycleOutcome, CycleReport, LoadRequest, LoadState, SectionReport,
    API_DATA_LOADED, NOT_ENOUGH_PERMISSION,
};
pub use orchestrator::LoadOrchestrator;
pub use progress::{LoadProgressReporter, NoOpProgressReporter, StatusMode};
