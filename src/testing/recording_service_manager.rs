use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::ServiceManager;

/// Service manager that records restart requests without touching the host.
#[derive(Default)]
pub struct RecordingServiceManager {
    pub restarted: RefCell<Vec<String>>,
}

impl RecordingServiceManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ServiceManager for RecordingServiceManager {
    fn restart(&self, service: &str) -> Result<(), AppError> {
        self.restarted.borrow_mut().push(service.to_string());
        Ok(())
    }
}
