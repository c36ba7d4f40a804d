pub mod component;
pub mod exclude_pattern;
pub mod license_category;
pub mod policy;
pub mod summary;
pub mod violation;

pub use component::{Component, LicenseClaim};
pub use exclude_pattern::ExcludePattern;
pub use license_category::LicenseCategory;
pub use policy::{LicenseRules, Policy, PolicyDocument, UnknownAction};
pub use summary::{LicenseCounts, RiskCounts, RiskLevel, Summary};
pub use violation::{Severity, Violation};
