//! Effective-uid helpers.

use nix::unistd::geteuid;

use crate::error::{HostError, HostResult};

/// Effective uid of the current process.
#[must_use]
pub fn effective_uid() -> u32 {
    geteuid().as_raw()
}

/// Require `euid` to be the superuser.
///
/// # Errors
///
/// Returns [`HostError::PrivilegeRequired`] for any uid other than 0.
pub const fn require_superuser(euid: u32) -> HostResult<()> {
    if euid == 0 {
        Ok(())
    } else {
        Err(HostError::PrivilegeRequired { euid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_uid_zero_is_accepted() {
        assert!(require_superuser(0).is_ok());
        assert!(matches!(
            require_superuser(1000),
            Err(HostError::PrivilegeRequired { euid: 1000 })
        ));
    }

    #[test]
    fn effective_uid_matches_nix() {
        assert_eq!(effective_uid(), geteuid().as_raw());
    }
}
