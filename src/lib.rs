//! snmpttctl: render and apply configuration for the snmptt trap-translator
//! daemon.
//!
//! The pure core (parameter validation and artifact rendering) lives in
//! `domain`; everything that touches the host (files, packages, the init
//! service) sits behind `ports` traits with adapters in `services`.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::commands;
use services::{CommandPackageInstaller, FilesystemArtifactStore, SystemctlServiceManager};

pub use app::commands::apply::{AppliedFile, ApplyOptions, ApplyReport, FileAction};
pub use app::commands::plan::format_text as format_plan_text;
pub use domain::{
    AppError, ArtifactPlan, ConfigParameters, Mode, Platform, RenderSet, RenderedArtifact,
};

/// Validate a parameter file, returning the typed parameter set.
pub fn validate(params_path: &Path) -> Result<ConfigParameters, AppError> {
    commands::validate::execute(params_path)
}

/// Render the artifact set for a parameter file.
///
/// When `out` is given, present artifacts are also written beneath it with
/// their target paths re-rooted.
pub fn render(params_path: &Path, out: Option<&Path>) -> Result<RenderSet, AppError> {
    let params = commands::validate::execute(params_path)?;
    commands::render::execute(&params, out)
}

/// Produce the machine-readable artifact plan for a parameter file.
pub fn plan(params_path: &Path) -> Result<ArtifactPlan, AppError> {
    let params = commands::validate::execute(params_path)?;
    commands::plan::execute(&params)
}

/// Validate, render, and materialize onto the host.
pub fn apply(params_path: &Path, options: &ApplyOptions) -> Result<ApplyReport, AppError> {
    let params = commands::validate::execute(params_path)?;

    let store = FilesystemArtifactStore::new();
    let installer = CommandPackageInstaller::new(options.platform);
    let services = SystemctlServiceManager::new();

    commands::apply::execute(&params, &store, &installer, &services, options)
}
