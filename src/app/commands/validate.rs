//! Validate a parameter file without producing artifacts.

use std::path::Path;

use crate::domain::{AppError, ConfigParameters};

pub fn execute(params_path: &Path) -> Result<ConfigParameters, AppError> {
    super::load_params(params_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_its_own_error() {
        let result = execute(Path::new("/nonexistent/params.toml"));
        assert!(matches!(result, Err(AppError::ParamsFileNotFound(_))));
    }

    #[test]
    fn valid_file_returns_params() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(&path, "net_snmp_perl_enable = true\n").unwrap();

        let params = execute(&path).unwrap();
        assert!(params.net_snmp_perl_enable);
    }
}
