//! Typed settings and the on-disk document that can override them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Resolved runtime settings, built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// SSH daemon configuration file edited by the port action.
    pub sshd_config: PathBuf,
    /// Address selection policy file appended to by the precedence action.
    pub gai_conf: PathBuf,
    /// Terminal device read for every interactive answer.
    pub tty_device: PathBuf,
    /// Shell interpreter that runs command lines (`<shell> -c <line>`).
    pub shell: PathBuf,
    /// Suffix appended to a file name to form its backup.
    pub backup_suffix: String,
    /// Retention window handed to `journalctl --vacuum-time`.
    pub journal_retention: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sshd_config: PathBuf::from(defaults::SSHD_CONFIG),
            gai_conf: PathBuf::from(defaults::GAI_CONF),
            tty_device: PathBuf::from(defaults::TTY_DEVICE),
            shell: PathBuf::from(defaults::SHELL),
            backup_suffix: defaults::BACKUP_SUFFIX.to_string(),
            journal_retention: defaults::JOURNAL_RETENTION.to_string(),
        }
    }
}

impl Settings {
    /// Overlay every field present in `document`.
    pub fn apply_document(&mut self, document: SettingsDocument) {
        let SettingsDocument {
            sshd_config,
            gai_conf,
            tty_device,
            shell,
            backup_suffix,
            journal_retention,
        } = document;

        if let Some(value) = sshd_config {
            self.sshd_config = value;
        }
        if let Some(value) = gai_conf {
            self.gai_conf = value;
        }
        if let Some(value) = tty_device {
            self.tty_device = value;
        }
        if let Some(value) = shell {
            self.shell = value;
        }
        if let Some(value) = backup_suffix {
            self.backup_suffix = value;
        }
        if let Some(value) = journal_retention {
            self.journal_retention = value;
        }
    }
}

/// Partial settings read from the JSON document named by `SRVINIT_CONFIG`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsDocument {
    /// Override for [`Settings::sshd_config`].
    #[serde(default)]
    pub sshd_config: Option<PathBuf>,
    /// Override for [`Settings::gai_conf`].
    #[serde(default)]
    pub gai_conf: Option<PathBuf>,
    /// Override for [`Settings::tty_device`].
    #[serde(default)]
    pub tty_device: Option<PathBuf>,
    /// Override for [`Settings::shell`].
    #[serde(default)]
    pub shell: Option<PathBuf>,
    /// Override for [`Settings::backup_suffix`].
    #[serde(default)]
    pub backup_suffix: Option<String>,
    /// Override for [`Settings::journal_retention`].
    #[serde(default)]
    pub journal_retention: Option<String>,
}
