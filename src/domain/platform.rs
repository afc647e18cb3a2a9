//! Per-OS packaging and service lookup tables.
//!
//! Consulted only by the apply layer; the validator and renderer are
//! platform-agnostic.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Supported operating system families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    CentOs,
    Debian,
    Ubuntu,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::CentOs, Platform::Debian, Platform::Ubuntu];

    /// Package providing the trap-translator daemon.
    pub fn daemon_package(&self) -> &'static str {
        "snmptt"
    }

    /// Package providing the Perl MySQL client bindings the daemon's
    /// logging backend needs.
    pub fn mysql_client_package(&self) -> &'static str {
        match self {
            Platform::CentOs => "perl-DBD-MySQL",
            Platform::Debian | Platform::Ubuntu => "libdbd-mysql-perl",
        }
    }

    /// Init service name of the daemon.
    pub fn service_name(&self) -> &'static str {
        "snmptt"
    }

    /// Package-manager invocation for non-interactive installs.
    pub fn install_command(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Platform::CentOs => ("yum", &["install", "-y"]),
            Platform::Debian | Platform::Ubuntu => ("apt-get", &["install", "-y"]),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::CentOs => write!(f, "centos"),
            Platform::Debian => write!(f, "debian"),
            Platform::Ubuntu => write!(f, "ubuntu"),
        }
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "centos" => Ok(Platform::CentOs),
            "debian" => Ok(Platform::Debian),
            "ubuntu" => Ok(Platform::Ubuntu),
            other => Err(AppError::UnknownPlatform(other.to_string())),
        }
    }
}
