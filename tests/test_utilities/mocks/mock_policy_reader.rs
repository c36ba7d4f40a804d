use std::path::Path;
use clearbom::prelude::*;

/// Mock PolicyReader for testing
///
/// `None` behaves like a missing policy file.
pub struct MockPolicyReader {
    pub yaml: Option<String>,
}

impl MockPolicyReader {
    pub fn new(yaml: &str) -> Self {
        Self {
            yaml: Some(yaml.to_string()),
        }
    }

    pub fn absent() -> Self {
        Self { yaml: None }
    }
}

impl PolicyReader for MockPolicyReader {
    fn load_policy(&self, policy_path: &Path) -> Result<Option<Policy>> {
        match &self.yaml {
            None => Ok(None),
            Some(yaml) => Policy::from_yaml_str(yaml)
                .map(Some)
                .map_err(|e| e.with_path(policy_path.to_path_buf()).into()),
        }
    }
}
