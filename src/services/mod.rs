pub mod artifact_filesystem;
pub mod package_command;
pub mod service_systemctl;

pub use artifact_filesystem::FilesystemArtifactStore;
pub use package_command::CommandPackageInstaller;
pub use service_systemctl::SystemctlServiceManager;
