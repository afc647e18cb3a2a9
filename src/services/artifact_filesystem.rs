use std::fs;
use std::path::Path;

use crate::domain::{AppError, RenderedArtifact};
use crate::ports::ArtifactStore;

/// Filesystem-based artifact store implementation.
#[derive(Debug, Clone, Default)]
pub struct FilesystemArtifactStore;

impl FilesystemArtifactStore {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn read(&self, path: &Path) -> Result<Option<String>, AppError> {
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, artifact: &RenderedArtifact) -> Result<(), AppError> {
        if let Some(parent) = artifact.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&artifact.path, &artifact.content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&artifact.path, fs::Permissions::from_mode(artifact.mode))?;
        }

        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<bool, AppError> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }
}
