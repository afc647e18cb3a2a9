pub mod artifact_store;
pub mod package_installer;
pub mod service_manager;

pub use artifact_store::ArtifactStore;
pub use package_installer::PackageInstaller;
pub use service_manager::ServiceManager;
