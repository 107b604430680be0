//! Application stages and the completed/current/pending timeline classification.

/// Ordered phases an application passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApplicationStage {
    Submitted,
    InReview,
    DocumentsVerified,
    Completed,
}

/// Status of one stage relative to a record's current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Current,
    Pending,
}

impl ApplicationStage {
    /// All stages in order.
    pub const ALL: [ApplicationStage; 4] = [
        ApplicationStage::Submitted,
        ApplicationStage::InReview,
        ApplicationStage::DocumentsVerified,
        ApplicationStage::Completed,
    ];

    /// Highest valid stage index.
    pub const LAST_INDEX: usize = Self::ALL.len() - 1;

    /// Position of the stage in the sequence (0-3).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stage at `index`, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get the display name for the stage.
    pub fn name(self) -> &'static str {
        match self {
            ApplicationStage::Submitted => "Submitted",
            ApplicationStage::InReview => "In Review",
            ApplicationStage::DocumentsVerified => "Documents Verified",
            ApplicationStage::Completed => "Completed",
        }
    }

    /// Classify this stage against the record's current stage index.
    pub fn status(self, current: usize) -> StageStatus {
        classify(self.index(), current)
    }

    /// Guidance shown when this is the record's current stage.
    pub fn next_steps(self) -> &'static str {
        match self {
            ApplicationStage::Submitted => {
                "Your application is currently being reviewed by our team. \
                 We'll notify you once it moves to the next stage."
            }
            ApplicationStage::InReview => {
                "We're reviewing your application and documents. \
                 This process typically takes 3-5 business days."
            }
            ApplicationStage::DocumentsVerified => {
                "Your documents have been verified! We're now processing your final application approval."
            }
            ApplicationStage::Completed => "Congratulations! Your application has been completed successfully.",
        }
    }
}

/// Classify stage `index` against `current`.
///
/// Lower indices are completed, the current index is in progress, higher ones are pending.
pub fn classify(index: usize, current: usize) -> StageStatus {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => StageStatus::Completed,
        std::cmp::Ordering::Equal => StageStatus::Current,
        std::cmp::Ordering::Greater => StageStatus::Pending,
    }
}

/// Status of every stage, in order, for a record at `current`.
pub fn timeline(current: usize) -> [(ApplicationStage, StageStatus); 4] {
    ApplicationStage::ALL.map(|stage| (stage, stage.status(current)))
}

impl StageStatus {
    /// Caption under the stage name.
    pub fn caption(self) -> &'static str {
        match self {
            StageStatus::Completed => "Completed",
            StageStatus::Current => "Currently in progress",
            StageStatus::Pending => "Pending",
        }
    }

    /// Badge text, only the current stage carries one.
    pub fn badge(self) -> Option<&'static str> {
        match self {
            StageStatus::Current => Some("In Progress"),
            _ => None,
        }
    }
}
