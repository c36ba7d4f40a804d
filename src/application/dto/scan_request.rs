use crate::shared::error::ClearbomError;
use std::path::PathBuf;

/// Policy file looked up when none is given
pub const DEFAULT_POLICY_FILE: &str = ".clearbom.yml";

/// ScanRequest - Internal request DTO for the policy evaluation use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Path to the CycloneDX JSON SBOM
    pub sbom_path: PathBuf,
    /// Path to the policy file; a missing file means "no policy"
    pub policy_path: PathBuf,
}

impl ScanRequest {
    pub fn new(sbom_path: PathBuf, policy_path: PathBuf) -> Self {
        Self {
            sbom_path,
            policy_path,
        }
    }

    pub fn builder() -> ScanRequestBuilder {
        ScanRequestBuilder::default()
    }
}

/// Builder for [`ScanRequest`]
///
/// Only the SBOM path is mandatory; the policy path falls back to
/// `.clearbom.yml` in the working directory.
#[derive(Debug, Default)]
pub struct ScanRequestBuilder {
    sbom_path: Option<PathBuf>,
    policy_path: Option<PathBuf>,
}

impl ScanRequestBuilder {
    pub fn sbom_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sbom_path = Some(path.into());
        self
    }

    pub fn policy_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.policy_path = Some(path.into());
        self
    }

    /// # Errors
    /// Returns a validation error when no (or an empty) SBOM path was set
    pub fn build(self) -> Result<ScanRequest, ClearbomError> {
        let sbom_path = self
            .sbom_path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| ClearbomError::Validation {
                message: "an SBOM path is required".to_string(),
            })?;

        let policy_path = self
            .policy_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_POLICY_FILE));

        Ok(ScanRequest::new(sbom_path, policy_path))
    }
}
