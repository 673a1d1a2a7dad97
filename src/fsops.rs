use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What a path turned out to be at classification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Missing,
}

/// Classifies without following symlinks, so a link to a directory is
/// treated as a file-like entry and never traversed.
pub fn classify(path: &Path) -> EntryKind {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => EntryKind::Directory,
        Ok(_) => EntryKind::File,
        Err(_) => EntryKind::Missing,
    }
}

/// Single-level listing of a directory, partitioned into (files, subdirectories).
/// Symlinks land in the files bucket regardless of target.
pub fn list_children(dir: &Path) -> io::Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            dirs.push(entry.path());
        } else {
            files.push(entry.path());
        }
    }

    Ok((files, dirs))
}

pub fn remove_file(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

/// Removes a single directory, which must already be empty.
pub fn remove_dir(path: &Path) -> io::Result<()> {
    fs::remove_dir(path)
}
