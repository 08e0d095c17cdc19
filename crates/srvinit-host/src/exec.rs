//! Synchronous command execution through a shell interpreter.
//!
//! # Design
//! - Command lines are handed to `<shell> -c` verbatim; failure tolerance such as
//!   `|| true` belongs in the line itself, never in the runner.
//! - Child processes inherit the standard streams so output streams live.

use std::fs::File;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use crate::error::{HostError, HostResult};

/// Runs command lines on the host.
pub trait CommandRunner {
    /// Run `command` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::CommandFailed`] on a non-zero exit and
    /// [`HostError::Spawn`] if the shell cannot be started.
    fn run(&self, command: &str) -> HostResult<()>;

    /// Run `command` with its standard input attached to the controlling terminal.
    ///
    /// # Errors
    ///
    /// As [`CommandRunner::run`], plus [`HostError::InteractionUnavailable`] when the
    /// terminal cannot be opened.
    fn run_interactive(&self, command: &str) -> HostResult<()>;
}

/// [`CommandRunner`] that spawns `<shell> -c <command>`.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: PathBuf,
    tty_device: PathBuf,
}

impl ShellRunner {
    /// Build a runner using `shell` and reading interactive input from `tty_device`.
    #[must_use]
    pub fn new(shell: impl Into<PathBuf>, tty_device: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
            tty_device: tty_device.into(),
        }
    }

    fn execute(&self, command: &str, stdin: Stdio) -> HostResult<()> {
        debug!(shell = %self.shell.display(), command, "running command");
        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(stdin)
            .status()
            .map_err(|source| HostError::Spawn {
                command: command.to_string(),
                source,
            })?;
        check_status(command, status)
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> HostResult<()> {
        self.execute(command, Stdio::inherit())
    }

    fn run_interactive(&self, command: &str) -> HostResult<()> {
        let terminal =
            File::open(&self.tty_device).map_err(|source| HostError::InteractionUnavailable {
                device: self.tty_device.clone(),
                source,
            })?;
        self.execute(command, Stdio::from(terminal))
    }
}

fn check_status(command: &str, status: ExitStatus) -> HostResult<()> {
    if status.success() {
        return Ok(());
    }
    let exit_code = status.code();
    warn!(command, exit_code, "command failed");
    Err(HostError::CommandFailed {
        command: command.to_string(),
        exit_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn runner() -> ShellRunner {
        ShellRunner::new("/bin/sh", "/definitely/missing/tty")
    }

    #[test]
    fn successful_command_is_ok() {
        assert!(runner().run("true").is_ok());
    }

    #[test]
    fn non_zero_exit_is_command_failed() {
        let err = runner().run("exit 3").expect_err("exit 3 should fail");
        match err {
            HostError::CommandFailed { command, exit_code } => {
                assert_eq!(command, "exit 3");
                assert_eq!(exit_code, Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn inline_fallback_tolerates_failure() {
        assert!(runner().run("false || true").is_ok());
    }

    #[test]
    fn missing_shell_is_spawn_error() {
        let runner = ShellRunner::new("/definitely/missing/sh", "/dev/null");
        assert!(matches!(
            runner.run("true"),
            Err(HostError::Spawn { .. })
        ));
    }

    #[test]
    fn interactive_command_reads_from_terminal_device() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let device = dir.path().join("tty");
        fs::write(&device, "secret\n")?;

        let runner = ShellRunner::new("/bin/sh", &device);
        runner.run_interactive(r#"read answer && test "$answer" = secret"#)?;
        Ok(())
    }

    #[test]
    fn interactive_command_without_terminal_is_unavailable() {
        assert!(matches!(
            runner().run_interactive("true"),
            Err(HostError::InteractionUnavailable { .. })
        ));
    }
}
