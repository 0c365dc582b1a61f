//! Filesystem infrastructure — implements `ArtifactFs` on the local disk.

use std::io;
use std::path::Path;

use tracing::trace;

use crate::application::ports::ArtifactFs;

/// Production filesystem implementation of `ArtifactFs`.
pub struct LocalFs;

impl ArtifactFs for LocalFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        trace!(path = %path.display(), "write");
        std::fs::write(path, content)
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> io::Result<()> {
        trace!(path = %path.display(), mode, "set_permissions");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))?;
        }
        Ok(())
    }
}
