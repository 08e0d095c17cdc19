//! In-place edits guarded by a backup copy.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::backup::{backup_file, backup_if_exists};
use crate::error::{FsOpsError, FsOpsResult};

const PORT_DIRECTIVE: &str = "Port";

/// Result of rewriting the SSH daemon port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortChange {
    /// Backup taken before the rewrite.
    pub backup: PathBuf,
    /// Number of `Port` lines that were dropped.
    pub removed: usize,
}

/// Drop every line whose trimmed text starts with `Port` and append `Port <port>`.
///
/// Other lines keep their original endings. Returns the new text and the number of
/// removed lines.
#[must_use]
pub fn rewrite_port_directive(contents: &str, port: &str) -> (String, usize) {
    let mut removed = 0;
    let mut output = String::with_capacity(contents.len() + 16);
    for line in contents.split_inclusive('\n') {
        if line.trim().starts_with(PORT_DIRECTIVE) {
            removed += 1;
        } else {
            output.push_str(line);
        }
    }
    output.push('\n');
    output.push_str(PORT_DIRECTIVE);
    output.push(' ');
    output.push_str(port);
    output.push('\n');
    (output, removed)
}

/// Back up `path`, then replace its `Port` directives with a single `Port <port>`.
///
/// The port is written verbatim; callers validate it first.
///
/// # Errors
///
/// Returns [`FsOpsError::Io`] if the backup, read, or write fails. A failed write
/// leaves the backup in place.
pub fn set_ssh_port(path: &Path, port: &str, backup_suffix: &str) -> FsOpsResult<PortChange> {
    let backup = backup_file(path, backup_suffix)?;
    let contents = fs::read_to_string(path).map_err(|err| FsOpsError::io("read", path, err))?;
    let (rewritten, removed) = rewrite_port_directive(&contents, port);
    fs::write(path, rewritten).map_err(|err| FsOpsError::io("write", path, err))?;
    info!(path = %path.display(), port, removed, "ssh port directive rewritten");
    Ok(PortChange { backup, removed })
}

/// Back up `path` when it exists, then append `block` on a fresh line.
///
/// The file is created when missing. Returns the backup path if one was taken.
///
/// # Errors
///
/// Returns [`FsOpsError::Io`] if the backup, open, or append fails.
pub fn append_block(path: &Path, block: &str, backup_suffix: &str) -> FsOpsResult<Option<PathBuf>> {
    let backup = backup_if_exists(path, backup_suffix)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| FsOpsError::io("open", path, err))?;
    writeln!(file, "\n{block}").map_err(|err| FsOpsError::io("append", path, err))?;
    info!(path = %path.display(), backup = backup.is_some(), "block appended");
    Ok(backup)
}
