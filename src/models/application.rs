//! Tracked application records and the mock lookup.

use chrono::NaiveDate;

use super::stage::{ApplicationStage, StageStatus, timeline};

/// Result of an application lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedApplication {
    pub id: String,
    pub applicant_name: String,
    pub submitted_date: NaiveDate,
    /// Index into [`ApplicationStage::ALL`] (0-3).
    pub current_stage_index: usize,
    pub estimated_completion_date: NaiveDate,
}

/// Stage index every mock record reports (In Review).
pub const MOCK_STAGE_INDEX: usize = 1;

impl TrackedApplication {
    /// The record's current stage.
    pub fn current_stage(&self) -> ApplicationStage {
        ApplicationStage::from_index(self.current_stage_index).unwrap_or(ApplicationStage::Completed)
    }

    /// Status of every stage for this record.
    pub fn timeline(&self) -> [(ApplicationStage, StageStatus); 4] {
        timeline(self.current_stage_index)
    }
}

/// Look up an application by free-text id.
///
/// Blank input yields `None`; anything else yields the same synthesized record,
/// carrying the id exactly as entered.
pub fn lookup(id: &str) -> Option<TrackedApplication> {
    if id.trim().is_empty() {
        return None;
    }

    Some(TrackedApplication {
        id: id.to_string(),
        applicant_name: "Sarah Johnson".to_string(),
        submitted_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        current_stage_index: MOCK_STAGE_INDEX,
        estimated_completion_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap_or_default(),
    })
}
