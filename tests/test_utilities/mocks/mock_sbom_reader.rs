use std::path::Path;
use clearbom::prelude::*;

/// Mock SbomReader for testing
pub struct MockSbomReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockSbomReader {
    /// Serves the given CycloneDX JSON through the real parser
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, sbom_path: &Path) -> Result<Vec<Component>> {
        if self.should_fail {
            anyhow::bail!("Mock SBOM read failure");
        }
        CycloneDxParser::parse(&self.content)
            .map_err(|e| e.with_path(sbom_path.to_path_buf()).into())
    }
}
