use anyhow::{Context, Result};
use std::path::Path;

/// Reads `path` as text with line endings normalized to `\n`. A missing
/// file reads as an empty string.
pub fn load_file(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "Loaded file");
            Ok(normalize_newlines(&content))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "File not found, treating as empty");
            Ok(String::new())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Turns `\r\n` and lone `\r` into `\n`.
pub fn normalize_newlines(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_string();
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn save_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
