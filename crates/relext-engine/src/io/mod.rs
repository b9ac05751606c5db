use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the raw input text
pub fn read_input(path: &Path) -> Result<Vec<u8>, IoError> {
    ensure_exists(path)?;
    fs::read(path).map_err(IoError::Io)
}

/// Read a template fragment (`pre` or `post`)
pub fn read_template(path: &Path) -> Result<String, IoError> {
    ensure_exists(path)?;
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write the rendered output, creating parent directories as needed
pub fn write_output(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

fn ensure_exists(path: &Path) -> Result<(), IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    Ok(())
}
