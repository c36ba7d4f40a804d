mod license_classifier;
mod license_extraction;

pub use license_classifier::LicenseClassifier;
pub use license_extraction::LicenseExtraction;
