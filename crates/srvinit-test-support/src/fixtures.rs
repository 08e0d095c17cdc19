//! Temporary host files and matching settings.

use std::fs;
use std::path::{Path, PathBuf};

use srvinit_config::Settings;
use tempfile::TempDir;

/// Default `sshd_config` body used by fixtures.
pub const SAMPLE_SSHD_CONFIG: &str = "\
Include /etc/ssh/sshd_config.d/*.conf
Port 22
#Port 2222
PermitRootLogin prohibit-password
UsePAM yes
";

/// Temporary directory standing in for `/etc`.
pub struct HostFixture {
    dir: TempDir,
    settings: Settings,
}

impl HostFixture {
    /// Create a fixture with a sample `sshd_config` and no `gai.conf`.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory or files cannot be created.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_sshd_config(SAMPLE_SSHD_CONFIG)
    }

    /// Create a fixture whose `sshd_config` contains `contents`.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory or files cannot be created.
    pub fn with_sshd_config(contents: &str) -> anyhow::Result<Self> {
        let dir = tempfile::Builder::new().prefix("srvinit-").tempdir()?;
        let ssh_dir = dir.path().join("ssh");
        fs::create_dir_all(&ssh_dir)?;
        let sshd_config = ssh_dir.join("sshd_config");
        fs::write(&sshd_config, contents)?;

        let settings = Settings {
            sshd_config,
            gai_conf: dir.path().join("gai.conf"),
            tty_device: dir.path().join("tty"),
            ..Settings::default()
        };
        Ok(Self { dir, settings })
    }

    /// Settings pointing at the fixture files.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Root of the fixture directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the fixture `sshd_config`.
    #[must_use]
    pub fn sshd_config(&self) -> &Path {
        &self.settings.sshd_config
    }

    /// Path of the fixture `gai.conf`.
    #[must_use]
    pub fn gai_conf(&self) -> &Path {
        &self.settings.gai_conf
    }

    /// Backup path for `target` under the fixture's suffix.
    #[must_use]
    pub fn backup_of(&self, target: &Path) -> PathBuf {
        let mut raw = target.as_os_str().to_owned();
        raw.push(&self.settings.backup_suffix);
        PathBuf::from(raw)
    }

    /// Write `contents` to the fixture `gai.conf`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_gai_conf(&self, contents: &str) -> anyhow::Result<()> {
        fs::write(self.gai_conf(), contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_points_settings_at_temp_files() -> anyhow::Result<()> {
        let fixture = HostFixture::new()?;
        assert!(fixture.sshd_config().starts_with(fixture.root()));
        assert_eq!(fs::read_to_string(fixture.sshd_config())?, SAMPLE_SSHD_CONFIG);
        assert!(!fixture.gai_conf().exists());
        assert_eq!(
            fixture.backup_of(fixture.gai_conf()),
            fixture.root().join("gai.conf.bak")
        );
        Ok(())
    }
}
