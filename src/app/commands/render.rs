//! Render artifacts for inspection, to stdout or a staging directory.

use std::path::Path;

use crate::domain::{AppError, ConfigParameters, RenderSet, render};
use crate::ports::ArtifactStore;
use crate::services::FilesystemArtifactStore;

/// Render the artifact set; when `out` is given, write the present artifacts
/// beneath it with their absolute target paths re-rooted.
pub fn execute(params: &ConfigParameters, out: Option<&Path>) -> Result<RenderSet, AppError> {
    let set = render(params)?;

    if let Some(out_dir) = out {
        let store = FilesystemArtifactStore::new();
        for artifact in set.artifacts() {
            if artifact.present {
                store.write(&artifact.rerooted(out_dir))?;
            }
        }
    }

    Ok(set)
}
