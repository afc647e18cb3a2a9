use std::path::Path;

use crate::domain::{AppError, RenderedArtifact};

/// Port for reading and writing rendered artifacts on the target host.
///
/// Path semantics (which files exist and with what content) are owned by the
/// domain; this port owns only the I/O behavior.
pub trait ArtifactStore {
    /// Read the current content at `path`, or `None` if the file is absent.
    fn read(&self, path: &Path) -> Result<Option<String>, AppError>;

    /// Write the artifact's content and mode, creating parent directories.
    fn write(&self, artifact: &RenderedArtifact) -> Result<(), AppError>;

    /// Remove the file at `path`. Returns true if a file was removed.
    fn remove(&self, path: &Path) -> Result<bool, AppError>;
}
