use std::process::Command;

use crate::domain::{AppError, Platform};
use crate::ports::PackageInstaller;

/// Package installer backed by the platform's package-manager binary.
#[derive(Debug, Clone)]
pub struct CommandPackageInstaller {
    platform: Platform,
}

impl CommandPackageInstaller {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl PackageInstaller for CommandPackageInstaller {
    fn ensure_installed(&self, package: &str) -> Result<(), AppError> {
        let (manager, args) = self.platform.install_command();

        let mut command = Command::new(manager);
        command.args(args).arg(package);

        let output = command.output().map_err(|e| AppError::Command {
            command: format!("{} {} {}", manager, args.join(" "), package),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Command {
                command: format!("{} {} {}", manager, args.join(" "), package),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(())
    }
}
