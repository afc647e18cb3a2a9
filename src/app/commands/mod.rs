pub mod apply;
pub mod plan;
pub mod render;
pub mod validate;

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ConfigParameters, parse_params_content};

/// Load and validate a parameter file.
///
/// An absent file is its own error, not an empty parameter set.
pub(crate) fn load_params(path: &Path) -> Result<ConfigParameters, AppError> {
    if !path.exists() {
        return Err(AppError::ParamsFileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_params_content(&content)
}
