use std::process::Command;

use crate::domain::AppError;
use crate::ports::ServiceManager;

/// Service manager backed by systemctl.
#[derive(Debug, Clone, Default)]
pub struct SystemctlServiceManager;

impl SystemctlServiceManager {
    pub fn new() -> Self {
        Self
    }
}

impl ServiceManager for SystemctlServiceManager {
    fn restart(&self, service: &str) -> Result<(), AppError> {
        let output = Command::new("systemctl").args(["restart", service]).output().map_err(
            |e| AppError::Command {
                command: format!("systemctl restart {service}"),
                details: e.to_string(),
            },
        )?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Command {
                command: format!("systemctl restart {service}"),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(())
    }
}
