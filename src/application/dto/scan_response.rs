use crate::policy_engine::domain::Summary;

/// ScanResponse - Internal response DTO from the policy evaluation use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResponse {
    pub summary: Summary,
    /// Whether a policy file was found and applied
    pub policy_applied: bool,
    /// Components removed by `components.exclude` before evaluation
    pub excluded_count: usize,
}

impl ScanResponse {
    pub fn new(summary: Summary, policy_applied: bool, excluded_count: usize) -> Self {
        Self {
            summary,
            policy_applied,
            excluded_count,
        }
    }

    /// Whether any error-severity violation was found
    ///
    /// Used to determine the exit code for CI integration.
    pub fn has_blocking_violations(&self) -> bool {
        self.summary.has_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy_engine::domain::{LicenseCounts, RiskCounts, Severity, Violation};
    use chrono::Utc;

    fn summary_with(severities: &[Severity]) -> Summary {
        Summary {
            timestamp: Utc::now(),
            components: severities.len(),
            licenses: LicenseCounts::default(),
            risk: RiskCounts::default(),
            violations: severities
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    Violation::new(
                        format!("c{}@1", i),
                        "X".to_string(),
                        "reason".to_string(),
                        *s,
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_no_violations_is_not_blocking() {
        let response = ScanResponse::new(summary_with(&[]), true, 0);
        assert!(!response.has_blocking_violations());
    }

    #[test]
    fn test_warnings_only_is_not_blocking() {
        let response = ScanResponse::new(summary_with(&[Severity::Warning]), true, 0);
        assert!(!response.has_blocking_violations());
    }

    #[test]
    fn test_any_error_is_blocking() {
        let response = ScanResponse::new(
            summary_with(&[Severity::Warning, Severity::Error]),
            true,
            0,
        );
        assert!(response.has_blocking_violations());
    }
}
