use crate::policy_engine::domain::Component;
use crate::shared::Result;
use std::path::Path;

/// SbomReader port for loading components from an SBOM document
///
/// This port abstracts where the SBOM comes from and how it is decoded,
/// handing the core a plain list of components in declaration order.
pub trait SbomReader {
    /// Reads and decodes the SBOM at the given path
    ///
    /// # Arguments
    /// * `sbom_path` - Path to a CycloneDX JSON document
    ///
    /// # Returns
    /// Components in the order the document declares them
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist (`SbomNotFound`)
    /// - The file cannot be read safely
    /// - The document is not a valid CycloneDX shape (`MalformedSbom`)
    fn read_sbom(&self, sbom_path: &Path) -> Result<Vec<Component>>;
}
