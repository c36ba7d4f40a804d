use serde::{Deserialize, Serialize};
use std::fmt;

/// License placeholder recorded when a component declares no usable license
pub const UNKNOWN_LICENSE: &str = "UNKNOWN";

/// Violation severity
///
/// Variant order is significant: `Warning < Error`, so the worst severity
/// for a component is simply the `max` of its violations. "No violation" is
/// modelled as `None`, which sorts below both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single policy-rule failure attributed to one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Component key, `name@version`
    pub component: String,
    /// Offending license identifier, or `UNKNOWN`
    pub license: String,
    pub reason: String,
    pub severity: Severity,
}

impl Violation {
    pub fn new(component: String, license: String, reason: String, severity: Severity) -> Self {
        Self {
            component,
            license,
            reason,
            severity,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
