use crate::dependency_resolution::domain::INDEX_ARTIFACT_NAMES;
use crate::ports::outbound::FetchedIndex;
use crate::shared::error::ApkError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_INDEX_SIZE};
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// FileSystemIndexReader adapter for index artifacts on disk
///
/// Handles both a repository directory and a direct path to one artifact,
/// as well as the plain graph description files used for testing.
pub struct FileSystemIndexReader;

impl FileSystemIndexReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads from a directory or a single file, depending on what `path` is
    pub fn read_local(&self, path: &Path) -> Result<FetchedIndex> {
        if path.is_dir() {
            self.read_from_directory(path)
        } else {
            self.read_index_file(path)
        }
    }

    /// Returns the first index artifact that exists directly below `dir`
    pub fn read_from_directory(&self, dir: &Path) -> Result<FetchedIndex> {
        for artifact in INDEX_ARTIFACT_NAMES {
            let candidate = dir.join(artifact);
            if candidate.is_file() {
                return self.read_bytes(&candidate, "index file");
            }
        }

        Err(ApkError::FetchError {
            location: dir.display().to_string(),
            details: format!(
                "Neither {} nor {} exists in the directory",
                INDEX_ARTIFACT_NAMES[0], INDEX_ARTIFACT_NAMES[1]
            ),
            hint: "Point repo_url_or_path at a repository directory that contains the index".to_string(),
        }
        .into())
    }

    /// Reads a single artifact after checking its name is one we recognize
    pub fn read_index_file(&self, path: &Path) -> Result<FetchedIndex> {
        if !path.exists() {
            return Err(ApkError::IndexFileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        if !is_index_artifact(path) {
            return Err(ApkError::FetchError {
                location: path.display().to_string(),
                details: "File is not a recognized index artifact".to_string(),
                hint: "Expected a file named APKINDEX or APKINDEX.tar.gz (or any .tar.gz archive)".to_string(),
            }
            .into());
        }

        self.read_bytes(path, "index file")
    }

    /// Reads a `name: dep dep` graph description
    pub fn read_graph_file(&self, path: &Path) -> Result<FetchedIndex> {
        if !path.exists() {
            return Err(ApkError::IndexFileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        self.read_bytes(path, "graph file")
    }

    /// Reads the whole file, reporting any failure as a fetch error
    fn read_bytes(&self, path: &Path, file_type: &str) -> Result<FetchedIndex> {
        let bytes = load_bytes(path, file_type).map_err(|e| ApkError::FetchError {
            location: path.display().to_string(),
            details: format!("{:#}", e),
            hint: format!(
                "Make sure the {} is a readable regular file below the size limit",
                file_type
            ),
        })?;

        Ok(FetchedIndex::new(path.display().to_string(), bytes))
    }
}

fn load_bytes(path: &Path, file_type: &str) -> Result<Vec<u8>> {
    validate_regular_file(path, file_type)?;

    let size = fs::metadata(path)
        .with_context(|| format!("Failed to read {} metadata", file_type))?
        .len();
    validate_file_size(size, &path.display().to_string(), MAX_INDEX_SIZE)?;

    fs::read(path).with_context(|| format!("Failed to read {}: {}", file_type, path.display()))
}

impl Default for FileSystemIndexReader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_index_artifact(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    name.eq_ignore_ascii_case(INDEX_ARTIFACT_NAMES[0])
        || name.eq_ignore_ascii_case(INDEX_ARTIFACT_NAMES[1])
        || (name.len() > ".tar.gz".len() && name.ends_with(".tar.gz"))
}
