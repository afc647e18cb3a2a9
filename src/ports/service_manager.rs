use crate::domain::AppError;

/// Port for controlling the daemon's init service.
pub trait ServiceManager {
    /// Restart `service` so it picks up a changed configuration.
    fn restart(&self, service: &str) -> Result<(), AppError>;
}
