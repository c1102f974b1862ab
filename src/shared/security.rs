use crate::shared::Result;
use std::fs::Metadata;
use std::path::Path;

/// Maximum assets file size (100 MB)
/// Restore output for even very large solutions stays far below this.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks the metadata of the file `path` resolves to.
///
/// Symlinks are followed by the caller (`metadata()`), so a linked restore
/// output is judged by its target.
///
/// # Errors
/// Returns an error if:
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_file_metadata(metadata: &Metadata, path: &Path, max_size: u64) -> Result<()> {
    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
