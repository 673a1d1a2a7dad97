use crate::fsops::{self, EntryKind};
use crate::report::{DeleteReport, EntryOutcome, Outcome};
use parking_lot::Mutex;
use std::path::Path;

struct OutcomeTracker {
    outcomes: Mutex<Vec<EntryOutcome>>,
}

impl OutcomeTracker {
    fn new() -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, path: &Path, is_dir: bool, outcome: Outcome) {
        self.outcomes.lock().push(EntryOutcome {
            path: path.to_path_buf(),
            is_dir,
            outcome,
        });
    }

    fn into_report(self) -> DeleteReport {
        DeleteReport {
            outcomes: self.outcomes.into_inner(),
        }
    }
}

/// Recursively deletes `path`, fanning out one task per child entry at
/// each directory level. Within a level, every file deletion reaches a
/// terminal state before any subdirectory deletion is dispatched.
///
/// Failures are logged at the failing path and swallowed there; the
/// walk always runs to completion. The returned report carries one
/// outcome per path touched so callers can detect partial failure.
pub fn delete_tree(path: &Path) -> DeleteReport {
    let tracker = OutcomeTracker::new();
    delete_entry(path, &tracker);
    tracker.into_report()
}

fn delete_entry(path: &Path, tracker: &OutcomeTracker) {
    match fsops::classify(path) {
        EntryKind::Directory => delete_dir(path, tracker),
        EntryKind::File => delete_file(path, tracker),
        // A path that is already gone is not an error and not logged.
        EntryKind::Missing => tracker.record(path, false, Outcome::SkippedMissing),
    }
}

fn delete_file(path: &Path, tracker: &OutcomeTracker) {
    match fsops::remove_file(path) {
        Ok(()) => {
            println!("Deleted file: {}", path.display());
            tracker.record(path, false, Outcome::Deleted);
        }
        Err(e) => {
            println!("Error deleting {}: {}", path.display(), e);
            tracker.record(path, false, Outcome::Failed(e.to_string()));
        }
    }
}

fn delete_dir(path: &Path, tracker: &OutcomeTracker) {
    let (files, dirs) = match fsops::list_children(path) {
        Ok(children) => children,
        Err(e) => {
            println!("Error deleting {}: {}", path.display(), e);
            tracker.record(path, true, Outcome::Failed(e.to_string()));
            return;
        }
    };

    // Two barriers per level: the scope join guarantees all sibling
    // files are in a terminal state before any subdirectory task starts.
    rayon::scope(|s| {
        for file in &files {
            s.spawn(move |_| delete_file(file, tracker));
        }
    });

    rayon::scope(|s| {
        for dir in &dirs {
            // Re-classify on entry: a child that vanished or changed
            // shape since the listing is handled at its own level.
            s.spawn(move |_| delete_entry(dir, tracker));
        }
    });

    match fsops::remove_dir(path) {
        Ok(()) => {
            println!("Deleted directory: {}", path.display());
            tracker.record(path, true, Outcome::Deleted);
        }
        Err(e) => {
            println!("Error deleting {}: {}", path.display(), e);
            tracker.record(path, true, Outcome::Failed(e.to_string()));
        }
    }
}
