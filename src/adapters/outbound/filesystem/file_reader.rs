use crate::adapters::outbound::cyclonedx::CycloneDxParser;
use crate::policy_engine::domain::{Component, Policy};
use crate::ports::outbound::{PolicyReader, SbomReader};
use crate::shared::error::ClearbomError;
use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both SbomReader and PolicyReader ports,
/// providing file system access for the SBOM document and the policy file.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path).map_err(|e| ClearbomError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read metadata: {}", e),
        })?;

        if metadata.is_symlink() {
            return Err(ClearbomError::SecurityError {
                path: path.to_path_buf(),
                reason: "File is a symbolic link".to_string(),
                hint: "For security reasons, symbolic links are not allowed. Pass the real file path instead.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(ClearbomError::FileReadError {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        // Security check: File size limit (prevent DoS via huge files)
        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(ClearbomError::SecurityError {
                path: path.to_path_buf(),
                reason: format!(
                    "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                    file_size, MAX_FILE_SIZE
                ),
                hint: "Split the SBOM or check that the right file was passed.".to_string(),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            ClearbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Whether anything (including a dangling symlink) exists at `path`
    fn entry_exists(path: &Path) -> Result<bool> {
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ClearbomError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Failed to read metadata: {}", e),
            }
            .into()),
        }
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, sbom_path: &Path) -> Result<Vec<Component>> {
        if !Self::entry_exists(sbom_path)? {
            return Err(ClearbomError::SbomNotFound {
                path: sbom_path.to_path_buf(),
                suggestion: "Generate a CycloneDX JSON SBOM first, or point to it with the --sbom option.".to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(sbom_path)?;

        CycloneDxParser::parse(&content)
            .map_err(|e| e.with_path(sbom_path.to_path_buf()).into())
    }
}

impl PolicyReader for FileSystemReader {
    fn load_policy(&self, policy_path: &Path) -> Result<Option<Policy>> {
        if !Self::entry_exists(policy_path)? {
            return Ok(None);
        }

        let content = self.safe_read_file(policy_path)?;

        Policy::from_yaml_str(&content)
            .map(Some)
            .map_err(|e| e.with_path(policy_path.to_path_buf()).into())
    }
}
