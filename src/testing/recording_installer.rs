use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::PackageInstaller;

/// Package installer that records requested packages without touching the host.
#[derive(Default)]
pub struct RecordingInstaller {
    pub installed: RefCell<Vec<String>>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PackageInstaller for RecordingInstaller {
    fn ensure_installed(&self, package: &str) -> Result<(), AppError> {
        self.installed.borrow_mut().push(package.to_string());
        Ok(())
    }
}
