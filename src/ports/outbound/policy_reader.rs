use crate::policy_engine::domain::Policy;
use crate::shared::Result;
use std::path::Path;

/// PolicyReader port for loading the license policy
pub trait PolicyReader {
    /// Loads and validates the policy file
    ///
    /// # Returns
    /// `None` when no file exists at `policy_path`; a missing policy is not
    /// an error and simply imposes no constraints.
    ///
    /// # Errors
    /// Returns `InvalidPolicy` when the file exists but cannot be parsed or
    /// fails validation, or an I/O error if it cannot be read.
    fn load_policy(&self, policy_path: &Path) -> Result<Option<Policy>>;
}
