use std::path::PathBuf;

/// Terminal state of one path in the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Deleted,
    /// The error was logged at the failing path and swallowed there;
    /// the message is kept so callers can still inspect it.
    Failed(String),
    /// The path did not exist at classification time.
    SkippedMissing,
}

#[derive(Debug, Clone)]
pub struct EntryOutcome {
    pub path: PathBuf,
    pub is_dir: bool,
    pub outcome: Outcome,
}

/// Everything the walk touched, one entry per path. Deletion is
/// best-effort, so a report with failures still means the walk ran to
/// completion; callers decide whether partial failure matters.
#[derive(Debug, Default)]
pub struct DeleteReport {
    pub outcomes: Vec<EntryOutcome>,
}

impl DeleteReport {
    pub fn files_deleted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !o.is_dir && o.outcome == Outcome::Deleted)
            .count()
    }

    pub fn dirs_deleted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.is_dir && o.outcome == Outcome::Deleted)
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, Outcome::Failed(_)))
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}
