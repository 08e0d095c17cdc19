//! # Design
//!
//! - Actions fail with one error type so the dispatch boundary has a single thing to render.
//! - Validation problems are not errors; they are reported as rejected outcomes.

use std::io;

use srvinit_fsops::FsOpsError;
use srvinit_host::HostError;
use thiserror::Error;

/// Result alias for action handlers.
pub type ActionResult<T> = Result<T, ActionError>;

/// Failures that abort an action and surface at the dispatch boundary.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Terminal or command execution failed.
    #[error(transparent)]
    Host(#[from] HostError),
    /// Backing up or editing a configuration file failed.
    #[error(transparent)]
    FsOps(#[from] FsOpsError),
    /// Writing progress to the console failed.
    #[error("failed to write to the console")]
    Console {
        /// Underlying IO error.
        source: io::Error,
    },
}

impl ActionError {
    pub(crate) const fn console(source: io::Error) -> Self {
        Self::Console { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn host_errors_render_transparently() {
        let err = ActionError::from(HostError::CommandFailed {
            command: "ufw allow 22/tcp".to_string(),
            exit_code: Some(1),
        });
        assert_eq!(
            err.to_string(),
            "command `ufw allow 22/tcp` failed (exit code 1)"
        );
    }

    #[test]
    fn fsops_errors_render_transparently() {
        let err = ActionError::from(FsOpsError::Io {
            operation: "backup",
            path: PathBuf::from("/etc/ssh/sshd_config"),
            source: io::Error::other("denied"),
        });
        assert_eq!(err.to_string(), "backup failed for /etc/ssh/sshd_config");
    }
}
