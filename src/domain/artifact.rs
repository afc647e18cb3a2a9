//! Rendered file artifacts and the machine-readable plan view.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Target path of the daemon's INI configuration.
pub const INI_PATH: &str = "/etc/snmp/snmptt.ini";

/// Target path of the MySQL schema file.
pub const SQL_PATH: &str = "/etc/snmp/snmptt.sql";

/// A fully-rendered managed file: target path, content, and presence flag.
///
/// `present = false` means the file should not exist on the host; the content
/// is empty in that case and the path only identifies what to keep absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub path: PathBuf,
    pub content: String,
    pub mode: u32,
    pub present: bool,
}

impl RenderedArtifact {
    /// Rebase the artifact's absolute target path under `root`.
    pub fn rerooted(&self, root: &Path) -> Self {
        let relative = self.path.strip_prefix("/").unwrap_or(&self.path);
        Self { path: root.join(relative), ..self.clone() }
    }
}

/// The complete artifact set for one configuration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSet {
    pub ini: RenderedArtifact,
    pub sql: RenderedArtifact,
}

impl RenderSet {
    /// Artifacts in apply order.
    pub fn artifacts(&self) -> [&RenderedArtifact; 2] {
        [&self.ini, &self.sql]
    }
}

/// Serializable description of what an apply run would manage.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactPlan {
    pub artifacts: Vec<PlannedArtifact>,
}

/// One artifact's plan entry.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedArtifact {
    pub path: PathBuf,
    pub present: bool,
    /// Octal mode string, e.g. "0644".
    pub mode: String,
    pub content_bytes: usize,
}

impl ArtifactPlan {
    pub fn from_render_set(set: &RenderSet) -> Self {
        let artifacts = set
            .artifacts()
            .iter()
            .map(|artifact| PlannedArtifact {
                path: artifact.path.clone(),
                present: artifact.present,
                mode: format!("{:04o}", artifact.mode),
                content_bytes: artifact.content.len(),
            })
            .collect();
        Self { artifacts }
    }
}
