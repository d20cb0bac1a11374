use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of an index artifact read into memory (100 MB)
pub const MAX_INDEX_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and is a regular file
///
/// Symbolic links are followed; mirrors commonly link `APKINDEX.tar.gz`
/// between release directories.
///
/// # Errors
/// Returns an error if the metadata cannot be read or the path is not a file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates that a size is within `max_size`
///
/// Used for local files before reading and for HTTP bodies after download.
pub fn validate_file_size(file_size: u64, location: &str, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            location,
            file_size,
            max_size
        );
    }
    Ok(())
}
