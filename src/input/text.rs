use super::LoadError;
use std::path::Path;

/// Load a plain-text file. The content is handed to the passage verbatim;
/// empty files are allowed.
pub fn load(path: &str) -> Result<String, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    Ok(std::fs::read_to_string(path)?)
}
