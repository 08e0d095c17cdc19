//! Default locations and retention policies.
//!
//! # Design
//! - Keep every path the tool touches in one place so test fixtures can override them.

/// SSH daemon configuration file.
pub(crate) const SSHD_CONFIG: &str = "/etc/ssh/sshd_config";
/// Address selection policy file consulted by `getaddrinfo`.
pub(crate) const GAI_CONF: &str = "/etc/gai.conf";
/// Controlling terminal device used for interactive prompts.
pub(crate) const TTY_DEVICE: &str = "/dev/tty";
/// Shell interpreter used to run command lines.
pub(crate) const SHELL: &str = "/bin/sh";
/// Suffix appended to a configuration file to name its backup.
pub(crate) const BACKUP_SUFFIX: &str = ".bak";
/// Journal retention window passed to `journalctl --vacuum-time`.
pub(crate) const JOURNAL_RETENTION: &str = "3d";
