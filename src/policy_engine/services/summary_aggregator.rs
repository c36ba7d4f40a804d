use crate::policy_engine::domain::{
    Component, LicenseCounts, RiskCounts, RiskLevel, Severity, Summary, Violation,
};
use crate::policy_engine::policies::{LicenseClassifier, LicenseExtraction};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// SummaryAggregator service folding a run into a `Summary`
///
/// License categories come from classifying each component; risk buckets come
/// from the worst violation severity per `name@version` key. The two counts
/// are computed independently and each sums to the component count.
pub struct SummaryAggregator;

impl SummaryAggregator {
    /// Builds a summary stamped with the current time
    pub fn summarize(components: &[Component], violations: Vec<Violation>) -> Summary {
        Self::summarize_at(components, violations, Utc::now())
    }

    /// Builds a summary with an explicit timestamp
    pub fn summarize_at(
        components: &[Component],
        violations: Vec<Violation>,
        timestamp: DateTime<Utc>,
    ) -> Summary {
        let worst = Self::worst_severity_by_key(&violations);

        let mut licenses = LicenseCounts::default();
        let mut risk = RiskCounts::default();

        for component in components {
            let license_id = LicenseExtraction::extract_license_id(component);
            licenses.increment(LicenseClassifier::classify(license_id));

            let severity = worst.get(component.key().as_str()).copied();
            risk.increment(RiskLevel::from(severity));
        }

        Summary {
            timestamp,
            components: components.len(),
            licenses,
            risk,
            violations,
        }
    }

    fn worst_severity_by_key(violations: &[Violation]) -> HashMap<&str, Severity> {
        let mut worst: HashMap<&str, Severity> = HashMap::new();
        for violation in violations {
            worst
                .entry(violation.component.as_str())
                .and_modify(|current| *current = (*current).max(violation.severity))
                .or_insert(violation.severity);
        }
        worst
    }
}
