use crate::policy_engine::domain::LicenseCategory;

/// SPDX identifiers treated as permissive on exact match
pub const PERMISSIVE_LICENSES: &[&str] = &[
    "MIT",
    "Apache-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "ISC",
    "0BSD",
    "Unlicense",
    "WTFPL",
    "CC0-1.0",
];

/// SPDX identifiers treated as copyleft on exact match
pub const COPYLEFT_LICENSES: &[&str] = &[
    "GPL-2.0",
    "GPL-3.0",
    "LGPL-2.1",
    "LGPL-3.0",
    "AGPL-3.0",
    "MPL-2.0",
    "EPL-1.0",
    "EPL-2.0",
    "CDDL-1.0",
    "EUPL-1.2",
];

/// Proprietary sentinels (npm-style `UNLICENSED` and friends)
pub const PROPRIETARY_LICENSES: &[&str] = &["UNLICENSED", "SEE LICENSE IN <filename>", "COMMERCIAL"];

/// Substring heuristics applied to the normalized identifier, in priority order
const FUZZY_RULES: &[(&str, LicenseCategory)] = &[
    ("MIT", LicenseCategory::Permissive),
    ("APACHE", LicenseCategory::Permissive),
    ("BSD", LicenseCategory::Permissive),
    ("GPL", LicenseCategory::Copyleft),
];

/// LicenseClassifier policy mapping a license identifier to a coarse category
///
/// Classification order:
/// 1. absent or empty identifier → unknown
/// 2. exact match against the permissive, copyleft and proprietary tables
/// 3. substring heuristics on the upper-cased identifier with `-` and spaces
///    removed (`MIT`, `APACHE`, `BSD` → permissive; `GPL` → copyleft)
/// 4. unknown
///
/// The classifier does not understand SPDX expressions; callers reduce them
/// to a single identifier first (see `LicenseExtraction`).
pub struct LicenseClassifier;

impl LicenseClassifier {
    pub fn classify(license_id: Option<&str>) -> LicenseCategory {
        let Some(id) = license_id.filter(|id| !id.is_empty()) else {
            return LicenseCategory::Unknown;
        };

        if let Some(category) = Self::exact_match(id) {
            return category;
        }

        let normalized = Self::normalize(id);
        FUZZY_RULES
            .iter()
            .find(|(needle, _)| normalized.contains(needle))
            .map(|(_, category)| *category)
            .unwrap_or(LicenseCategory::Unknown)
    }

    fn exact_match(id: &str) -> Option<LicenseCategory> {
        if PERMISSIVE_LICENSES.contains(&id) {
            Some(LicenseCategory::Permissive)
        } else if COPYLEFT_LICENSES.contains(&id) {
            Some(LicenseCategory::Copyleft)
        } else if PROPRIETARY_LICENSES.contains(&id) {
            Some(LicenseCategory::Proprietary)
        } else {
            None
        }
    }

    fn normalize(id: &str) -> String {
        id.to_uppercase()
            .chars()
            .filter(|c| *c != '-' && *c != ' ')
            .collect()
    }
}
