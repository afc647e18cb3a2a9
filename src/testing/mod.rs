pub mod mock_artifact_store;
pub mod recording_installer;
pub mod recording_service_manager;

pub use mock_artifact_store::MockArtifactStore;
pub use recording_installer::RecordingInstaller;
pub use recording_service_manager::RecordingServiceManager;
