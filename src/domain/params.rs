//! Typed daemon parameters: parse, defaults, and cross-field validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Trap-handling mode for the daemon (`mode` directive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Daemon,
    Standalone,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Daemon => write!(f, "daemon"),
            Mode::Standalone => write!(f, "standalone"),
        }
    }
}

/// Validated parameter set for one configuration run.
///
/// Every omitted key takes its default; unknown keys are rejected at decode
/// time. Booleans map to the daemon's `1`/`0` INI grammar at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ConfigParameters {
    pub mode: Mode,
    pub multiple_event: bool,
    pub dns_enable: bool,
    pub strip_domain: bool,
    pub net_snmp_perl_enable: bool,
    pub net_snmp_perl_cache_enable: bool,
    pub translate_log_trap_oid: bool,
    pub log_enable: bool,
    pub log_file: String,
    pub syslog_enable: bool,
    pub unknown_trap_log_enable: bool,
    pub snmptt_conf_files: Vec<String>,
    pub spool_directory: String,
    pub enable_mysql: bool,
    pub mysql_host: String,
    pub mysql_port: u16,
    pub mysql_database: String,
    pub mysql_table: String,
    pub mysql_username: String,
    pub mysql_password: Option<String>,
}

impl Default for ConfigParameters {
    fn default() -> Self {
        Self {
            mode: Mode::Daemon,
            multiple_event: true,
            dns_enable: false,
            strip_domain: false,
            net_snmp_perl_enable: false,
            net_snmp_perl_cache_enable: true,
            translate_log_trap_oid: false,
            log_enable: true,
            log_file: "/var/log/snmptt/snmptt.log".to_string(),
            syslog_enable: true,
            unknown_trap_log_enable: false,
            snmptt_conf_files: vec!["/etc/snmp/snmptt.conf".to_string()],
            spool_directory: "/var/spool/snmptt/".to_string(),
            enable_mysql: false,
            mysql_host: "localhost".to_string(),
            mysql_port: 3306,
            mysql_database: "snmptt".to_string(),
            mysql_table: "snmptt".to_string(),
            mysql_username: "snmptt".to_string(),
            mysql_password: None,
        }
    }
}

impl ConfigParameters {
    /// Cross-field validation over a decoded parameter set.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.enable_mysql && self.mysql_password.as_deref().unwrap_or("").is_empty() {
            return Err(AppError::MissingDependentParameter {
                parameter: "enable_mysql",
                requires: "mysql_password",
            });
        }

        require_absolute("log_file", &self.log_file)?;
        require_absolute("spool_directory", &self.spool_directory)?;

        if self.snmptt_conf_files.is_empty() {
            return Err(AppError::InvalidParameterValue {
                parameter: "snmptt_conf_files",
                reason: "at least one trap definition file is required".to_string(),
            });
        }
        for conf_file in &self.snmptt_conf_files {
            require_absolute("snmptt_conf_files", conf_file)?;
        }

        Ok(())
    }
}

fn require_absolute(parameter: &'static str, path: &str) -> Result<(), AppError> {
    if path.starts_with('/') {
        return Ok(());
    }
    Err(AppError::InvalidParameterValue {
        parameter,
        reason: format!("'{path}' must be an absolute path"),
    })
}

/// Parse and validate a parameter set from TOML content.
pub fn parse_params_content(content: &str) -> Result<ConfigParameters, AppError> {
    let params: ConfigParameters = toml::from_str(content)?;
    params.validate()?;
    Ok(params)
}
