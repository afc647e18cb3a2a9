//! Materialize rendered artifacts onto the host.
//!
//! Ordering per run: ensure packages, write present artifacts, enforce
//! absence of non-present artifacts, restart the daemon iff the INI content
//! changed. A dry run computes the same report without side effects.

use std::fmt;
use std::path::PathBuf;

use crate::domain::{AppError, ConfigParameters, Platform, RenderedArtifact, render};
use crate::ports::{ArtifactStore, PackageInstaller, ServiceManager};

#[derive(Debug, Clone)]
pub struct ApplyOptions {
    pub platform: Platform,
    /// Re-root the absolute target paths beneath this directory.
    pub root: Option<PathBuf>,
    pub dry_run: bool,
    pub skip_packages: bool,
    pub skip_service: bool,
}

/// Outcome for a single managed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Created,
    Changed,
    Unchanged,
    Removed,
    AlreadyAbsent,
}

impl FileAction {
    fn changes_content(self) -> bool {
        matches!(self, FileAction::Created | FileAction::Changed)
    }
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAction::Created => write!(f, "created"),
            FileAction::Changed => write!(f, "changed"),
            FileAction::Unchanged => write!(f, "unchanged"),
            FileAction::Removed => write!(f, "removed"),
            FileAction::AlreadyAbsent => write!(f, "absent"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppliedFile {
    pub path: PathBuf,
    pub action: FileAction,
}

/// Result of one apply run.
#[derive(Debug, Clone)]
pub struct ApplyReport {
    pub files: Vec<AppliedFile>,
    /// Packages ensured (or, on a dry run, that would be ensured).
    pub packages: Vec<String>,
    /// Whether the daemon was restarted this run.
    pub restarted: bool,
    pub dry_run: bool,
}

pub fn execute<S, P, M>(
    params: &ConfigParameters,
    store: &S,
    installer: &P,
    services: &M,
    options: &ApplyOptions,
) -> Result<ApplyReport, AppError>
where
    S: ArtifactStore,
    P: PackageInstaller,
    M: ServiceManager,
{
    let mut packages = Vec::new();
    if !options.skip_packages {
        packages.push(options.platform.daemon_package().to_string());
        if params.enable_mysql {
            packages.push(options.platform.mysql_client_package().to_string());
        }
        if !options.dry_run {
            for package in &packages {
                installer.ensure_installed(package)?;
            }
        }
    }

    let set = render(params)?;
    let mut files = Vec::new();
    let mut ini_changed = false;

    for artifact in set.artifacts() {
        let target = match &options.root {
            Some(root) => artifact.rerooted(root),
            None => artifact.clone(),
        };

        let action = materialize(store, &target, options.dry_run)?;
        if target.path.ends_with("snmptt.ini") {
            ini_changed = action.changes_content();
        }
        files.push(AppliedFile { path: target.path, action });
    }

    let restart_needed = ini_changed && !options.skip_service;
    let restarted = restart_needed && !options.dry_run;
    if restarted {
        services.restart(options.platform.service_name())?;
    }

    Ok(ApplyReport { files, packages, restarted, dry_run: options.dry_run })
}

fn materialize<S: ArtifactStore>(
    store: &S,
    artifact: &RenderedArtifact,
    dry_run: bool,
) -> Result<FileAction, AppError> {
    let existing = store.read(&artifact.path)?;

    if artifact.present {
        let action = match &existing {
            None => FileAction::Created,
            Some(current) if *current != artifact.content => FileAction::Changed,
            Some(_) => FileAction::Unchanged,
        };
        if action.changes_content() && !dry_run {
            store.write(artifact)?;
        }
        return Ok(action);
    }

    if existing.is_none() {
        return Ok(FileAction::AlreadyAbsent);
    }
    if !dry_run {
        store.remove(&artifact.path)?;
    }
    Ok(FileAction::Removed)
}
