use super::license_category::LicenseCategory;
use super::violation::{Severity, Violation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Component counts per license category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LicenseCounts {
    pub permissive: usize,
    pub copyleft: usize,
    pub proprietary: usize,
    pub unknown: usize,
}

impl LicenseCounts {
    pub fn increment(&mut self, category: LicenseCategory) {
        *self.slot_mut(category) += 1;
    }

    pub fn get(&self, category: LicenseCategory) -> usize {
        match category {
            LicenseCategory::Permissive => self.permissive,
            LicenseCategory::Copyleft => self.copyleft,
            LicenseCategory::Proprietary => self.proprietary,
            LicenseCategory::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        self.permissive + self.copyleft + self.proprietary + self.unknown
    }

    fn slot_mut(&mut self, category: LicenseCategory) -> &mut usize {
        match category {
            LicenseCategory::Permissive => &mut self.permissive,
            LicenseCategory::Copyleft => &mut self.copyleft,
            LicenseCategory::Proprietary => &mut self.proprietary,
            LicenseCategory::Unknown => &mut self.unknown,
        }
    }
}

/// Per-component risk bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    /// At least one error-severity violation
    Red,
    /// Only warning-severity violations
    Yellow,
    /// No violations
    Green,
}

impl From<Option<Severity>> for RiskLevel {
    fn from(worst: Option<Severity>) -> Self {
        match worst {
            Some(Severity::Error) => RiskLevel::Red,
            Some(Severity::Warning) => RiskLevel::Yellow,
            None => RiskLevel::Green,
        }
    }
}

/// Component counts per risk bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskCounts {
    pub red: usize,
    pub yellow: usize,
    pub green: usize,
}

impl RiskCounts {
    pub fn increment(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Red => self.red += 1,
            RiskLevel::Yellow => self.yellow += 1,
            RiskLevel::Green => self.green += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.red + self.yellow + self.green
    }
}

/// Summary read model - the result of one evaluation run
///
/// A pure projection of (components, violations); it is never mutated after
/// the aggregator builds it. Serializes to the `summary.json` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub timestamp: DateTime<Utc>,
    pub components: usize,
    pub licenses: LicenseCounts,
    pub risk: RiskCounts,
    pub violations: Vec<Violation>,
}

impl Summary {
    pub fn error_count(&self) -> usize {
        self.violations.iter().filter(|v| v.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.violations.len() - self.error_count()
    }

    /// Whether a CI gate should fail on this summary
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(Violation::is_error)
    }
}
