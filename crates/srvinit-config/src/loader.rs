//! Layered settings resolution: compiled defaults, optional JSON document, environment.
//!
//! # Design
//! - Resolution is driven by a lookup closure so callers and tests never touch
//!   process-wide environment state.
//! - Empty environment values are treated as unset.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::{Settings, SettingsDocument};
use crate::validate::validate_settings;

/// Names a JSON settings document to overlay on the defaults.
pub const CONFIG_PATH_ENV: &str = "SRVINIT_CONFIG";
/// Overrides [`Settings::sshd_config`].
pub const SSHD_CONFIG_ENV: &str = "SRVINIT_SSHD_CONFIG";
/// Overrides [`Settings::gai_conf`].
pub const GAI_CONF_ENV: &str = "SRVINIT_GAI_CONF";
/// Overrides [`Settings::tty_device`].
pub const TTY_DEVICE_ENV: &str = "SRVINIT_TTY";
/// Overrides [`Settings::shell`].
pub const SHELL_ENV: &str = "SRVINIT_SHELL";
/// Overrides [`Settings::backup_suffix`].
pub const BACKUP_SUFFIX_ENV: &str = "SRVINIT_BACKUP_SUFFIX";
/// Overrides [`Settings::journal_retention`].
pub const JOURNAL_RETENTION_ENV: &str = "SRVINIT_JOURNAL_RETENTION";

/// Resolve settings from the process environment.
///
/// # Errors
///
/// Returns an error if the settings document cannot be read or parsed, or if the
/// resolved settings fail validation.
pub fn load_from_env() -> ConfigResult<Settings> {
    load_with(|name| std::env::var(name).ok())
}

/// Resolve settings using `lookup` in place of the process environment.
///
/// # Errors
///
/// Returns an error if the settings document cannot be read or parsed, or if the
/// resolved settings fail validation.
pub fn load_with<F>(lookup: F) -> ConfigResult<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
    let mut settings = Settings::default();

    if let Some(path) = lookup(CONFIG_PATH_ENV) {
        let document = read_document(Path::new(&path))?;
        settings.apply_document(document);
        debug!(path = %path, "applied settings document");
    }

    let overrides = SettingsDocument {
        sshd_config: lookup(SSHD_CONFIG_ENV).map(PathBuf::from),
        gai_conf: lookup(GAI_CONF_ENV).map(PathBuf::from),
        tty_device: lookup(TTY_DEVICE_ENV).map(PathBuf::from),
        shell: lookup(SHELL_ENV).map(PathBuf::from),
        backup_suffix: lookup(BACKUP_SUFFIX_ENV),
        journal_retention: lookup(JOURNAL_RETENTION_ENV),
    };
    settings.apply_document(overrides);

    validate_settings(&settings)?;
    Ok(settings)
}

/// Read and parse a settings document.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
pub fn read_document(path: &Path) -> ConfigResult<SettingsDocument> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let settings = load_with(|_| None).expect("defaults should load");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn environment_overrides_individual_fields() {
        let settings = load_with(lookup_from(&[
            (SSHD_CONFIG_ENV, "/srv/ssh/sshd_config"),
            (JOURNAL_RETENTION_ENV, "1w"),
            (TTY_DEVICE_ENV, "   "),
        ]))
        .expect("overrides should load");

        assert_eq!(
            settings.sshd_config,
            PathBuf::from("/srv/ssh/sshd_config")
        );
        assert_eq!(settings.journal_retention, "1w");
        assert_eq!(settings.tty_device, PathBuf::from("/dev/tty"));
    }

    #[test]
    fn invalid_override_is_reported() {
        let err = load_with(lookup_from(&[(BACKUP_SUFFIX_ENV, "dir/.bak")]))
            .expect_err("suffix with slash should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "backup_suffix",
                ..
            }
        ));
    }

    #[test]
    fn missing_document_is_a_read_error() {
        let err = load_with(lookup_from(&[(
            CONFIG_PATH_ENV,
            "/definitely/missing/srvinit.json",
        )]))
        .expect_err("missing document should fail");
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
