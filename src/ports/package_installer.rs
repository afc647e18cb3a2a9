use crate::domain::AppError;

/// Port for ensuring host packages are installed.
pub trait PackageInstaller {
    /// Install `package` if it is not already present.
    fn ensure_installed(&self, package: &str) -> Result<(), AppError>;
}
