//! Validation helpers for resolved settings.

use std::path::Path;

use crate::error::{ConfigError, ConfigResult};
use crate::model::Settings;

const RETENTION_UNITS: &[char] = &['s', 'm', 'h', 'd', 'w'];

/// Validate every field of `settings`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] naming the first field that fails.
pub fn validate_settings(settings: &Settings) -> ConfigResult<()> {
    validate_absolute_path("sshd_config", &settings.sshd_config)?;
    validate_absolute_path("gai_conf", &settings.gai_conf)?;
    validate_absolute_path("tty_device", &settings.tty_device)?;
    validate_absolute_path("shell", &settings.shell)?;
    validate_backup_suffix(&settings.backup_suffix)?;
    validate_retention(&settings.journal_retention)
}

fn validate_absolute_path(field: &'static str, path: &Path) -> ConfigResult<()> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::invalid(field, "must not be empty", None));
    }
    if !path.is_absolute() {
        return Err(ConfigError::invalid(
            field,
            "must be an absolute path",
            path.display().to_string(),
        ));
    }
    Ok(())
}

/// Reject suffixes that would place the backup somewhere other than next to its target.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for empty suffixes or ones containing `/`.
pub fn validate_backup_suffix(suffix: &str) -> ConfigResult<()> {
    if suffix.is_empty() {
        return Err(ConfigError::invalid("backup_suffix", "must not be empty", None));
    }
    if suffix.contains('/') {
        return Err(ConfigError::invalid(
            "backup_suffix",
            "must not contain '/'",
            suffix.to_string(),
        ));
    }
    Ok(())
}

/// Accept `journalctl` time spans of the form `<digits><unit>`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the span is malformed.
pub fn validate_retention(retention: &str) -> ConfigResult<()> {
    let invalid = || {
        ConfigError::invalid(
            "journal_retention",
            "must be a number followed by one of s, m, h, d, w",
            retention.to_string(),
        )
    };

    let Some(unit) = retention.chars().last() else {
        return Err(invalid());
    };
    let amount = &retention[..retention.len() - unit.len_utf8()];
    if !RETENTION_UNITS.contains(&unit)
        || amount.is_empty()
        || !amount.chars().all(|ch| ch.is_ascii_digit())
    {
        return Err(invalid());
    }
    Ok(())
}
