//! Backup copies placed next to their target.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{FsOpsError, FsOpsResult};

/// Path of the backup for `target`: the target path with `suffix` appended.
#[must_use]
pub fn backup_path(target: &Path, suffix: &str) -> PathBuf {
    let mut raw = OsString::from(target.as_os_str());
    raw.push(suffix);
    PathBuf::from(raw)
}

/// Copy `target` to its backup path, replacing any previous backup.
///
/// # Errors
///
/// Returns [`FsOpsError::Io`] if the copy fails, including when `target` is missing.
pub fn backup_file(target: &Path, suffix: &str) -> FsOpsResult<PathBuf> {
    let destination = backup_path(target, suffix);
    fs::copy(target, &destination).map_err(|err| FsOpsError::io("backup", target, err))?;
    info!(
        target = %target.display(),
        backup = %destination.display(),
        "backup created"
    );
    Ok(destination)
}

/// Like [`backup_file`] but skips targets that do not exist yet.
///
/// # Errors
///
/// Returns [`FsOpsError::Io`] if the existence probe or the copy fails.
pub fn backup_if_exists(target: &Path, suffix: &str) -> FsOpsResult<Option<PathBuf>> {
    let exists = target
        .try_exists()
        .map_err(|err| FsOpsError::io("probe", target, err))?;
    if exists {
        backup_file(target, suffix).map(Some)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_path_appends_suffix_to_file_name() {
        assert_eq!(
            backup_path(Path::new("/etc/ssh/sshd_config"), ".bak"),
            PathBuf::from("/etc/ssh/sshd_config.bak")
        );
        assert_eq!(
            backup_path(Path::new("gai.conf"), ".orig"),
            PathBuf::from("gai.conf.orig")
        );
    }

    #[test]
    fn backup_file_copies_content_and_overwrites_previous() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("sshd_config");
        fs::write(&target, "Port 22\n")?;
        fs::write(backup_path(&target, ".bak"), "stale")?;

        let backup = backup_file(&target, ".bak")?;

        assert_eq!(fs::read_to_string(backup)?, "Port 22\n");
        Ok(())
    }

    #[test]
    fn backup_file_reports_missing_target() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("missing");

        let err = backup_file(&target, ".bak").expect_err("missing target should fail");

        assert!(matches!(
            err,
            FsOpsError::Io {
                operation: "backup",
                ..
            }
        ));
        Ok(())
    }

    #[test]
    fn backup_if_exists_skips_absent_targets() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("gai.conf");

        assert_eq!(backup_if_exists(&target, ".bak")?, None);
        assert!(!backup_path(&target, ".bak").exists());

        fs::write(&target, "label ::1/128 0\n")?;
        let backup = backup_if_exists(&target, ".bak")?;
        assert_eq!(backup, Some(backup_path(&target, ".bak")));
        Ok(())
    }
}
