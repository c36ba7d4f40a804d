use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse license category assigned to each component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseCategory {
    Permissive,
    Copyleft,
    Proprietary,
    Unknown,
}

impl LicenseCategory {
    /// All categories in report order
    pub const ALL: [LicenseCategory; 4] = [
        LicenseCategory::Permissive,
        LicenseCategory::Copyleft,
        LicenseCategory::Proprietary,
        LicenseCategory::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseCategory::Permissive => "permissive",
            LicenseCategory::Copyleft => "copyleft",
            LicenseCategory::Proprietary => "proprietary",
            LicenseCategory::Unknown => "unknown",
        }
    }

    /// Capitalized label for human-readable reports
    pub fn label(&self) -> &'static str {
        match self {
            LicenseCategory::Permissive => "Permissive",
            LicenseCategory::Copyleft => "Copyleft",
            LicenseCategory::Proprietary => "Proprietary",
            LicenseCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LicenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
