//! # Design
//!
//! - One error type for everything that touches the terminal, the shell, or the process identity.
//! - Messages are written for the operator; context lives in fields.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Failures raised while talking to the terminal or running commands.
#[derive(Debug, Error)]
pub enum HostError {
    /// The controlling terminal could not be opened.
    #[error(
        "interactive input is unavailable; download the script and run it directly instead of piping it into a shell"
    )]
    InteractionUnavailable {
        /// Terminal device that failed to open.
        device: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The terminal stream ended before a line was read.
    #[error("terminal input closed")]
    InputClosed {
        /// Terminal device that reached end of input.
        device: PathBuf,
    },
    /// Reading from or writing to the terminal failed after it was opened.
    #[error("terminal io failed")]
    TerminalIo {
        /// Terminal device involved.
        device: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A command exited unsuccessfully.
    #[error("command `{command}` failed ({})", describe_exit(.exit_code))]
    CommandFailed {
        /// Command line handed to the shell.
        command: String,
        /// Exit code, or `None` when the command was terminated by a signal.
        exit_code: Option<i32>,
    },
    /// The shell could not be started.
    #[error("failed to start shell for `{command}`")]
    Spawn {
        /// Command line that was being started.
        command: String,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The process is not running with superuser privileges.
    #[error("superuser privileges required (effective uid {euid})")]
    PrivilegeRequired {
        /// Effective uid observed at startup.
        euid: u32,
    },
}

#[allow(clippy::ref_option)]
fn describe_exit(exit_code: &Option<i32>) -> String {
    exit_code.map_or_else(
        || "terminated by signal".to_string(),
        |code| format!("exit code {code}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn command_failed_reports_exit_code_or_signal() {
        let exited = HostError::CommandFailed {
            command: "apt update".to_string(),
            exit_code: Some(100),
        };
        assert_eq!(exited.to_string(), "command `apt update` failed (exit code 100)");

        let signalled = HostError::CommandFailed {
            command: "apt upgrade -y".to_string(),
            exit_code: None,
        };
        assert_eq!(
            signalled.to_string(),
            "command `apt upgrade -y` failed (terminated by signal)"
        );
        assert!(signalled.source().is_none());
    }

    #[test]
    fn interaction_unavailable_tells_operator_what_to_do() {
        let err = HostError::InteractionUnavailable {
            device: PathBuf::from("/dev/tty"),
            source: io::Error::other("no tty"),
        };
        assert!(err.to_string().contains("run it directly"));
        assert!(err.source().is_some());
    }
}
