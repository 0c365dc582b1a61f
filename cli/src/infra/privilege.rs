//! Effective-user privilege check.

use crate::application::ports::PrivilegeCheck;

/// Checks the effective uid of the current process.
pub struct EffectiveUser;

impl PrivilegeCheck for EffectiveUser {
    #[cfg(unix)]
    fn is_elevated(&self) -> bool {
        nix::unistd::geteuid().is_root()
    }

    // No uid concept to check against; the OS enforces access on write.
    #[cfg(not(unix))]
    fn is_elevated(&self) -> bool {
        true
    }
}
