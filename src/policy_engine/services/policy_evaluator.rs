use crate::policy_engine::domain::violation::UNKNOWN_LICENSE;
use crate::policy_engine::domain::{
    Component, LicenseRules, Policy, Severity, UnknownAction, Violation,
};
use crate::policy_engine::policies::LicenseExtraction;

/// PolicyEvaluator service applying a policy to SBOM components
///
/// Checks run per component, in SBOM declaration order:
/// 1. deny list: one error, and no further checks for that component
/// 2. warn list: one warning
/// 3. allow list (when non-empty): one error if the license is absent or not
///    listed, unless step 2 already warned about this component
/// 4. unknown license: when no identifier could be extracted and
///    `unknown_action` is not `allow`, one error (`deny`) or warning (`warn`)
///
/// Output order follows the same component order, then check order. The
/// evaluator never fails: the policy it receives is already validated.
pub struct PolicyEvaluator;

impl PolicyEvaluator {
    /// Evaluates every component against the policy
    ///
    /// Returns an empty list when the policy has no `licenses` section.
    pub fn evaluate(components: &[Component], policy: &Policy) -> Vec<Violation> {
        let Some(rules) = policy.licenses() else {
            return Vec::new();
        };

        components
            .iter()
            .flat_map(|component| Self::evaluate_component(component, rules))
            .collect()
    }

    /// Violations for a single component, in check order
    pub fn evaluate_component(component: &Component, rules: &LicenseRules) -> Vec<Violation> {
        let key = component.key();
        let license_id = LicenseExtraction::extract_license_id(component);
        let mut violations = Vec::new();

        if let Some(id) = license_id {
            if rules.is_denied(id) {
                violations.push(Violation::new(
                    key,
                    id.to_string(),
                    format!("License {} is denied by policy", id),
                    Severity::Error,
                ));
                return violations;
            }
        }

        let warned = match license_id {
            Some(id) if rules.is_warned(id) => {
                violations.push(Violation::new(
                    key.clone(),
                    id.to_string(),
                    format!("License {} flagged for review", id),
                    Severity::Warning,
                ));
                true
            }
            _ => false,
        };

        if rules.has_allow_list() && !warned && !license_id.is_some_and(|id| rules.is_allowed(id)) {
            let license = license_id.unwrap_or(UNKNOWN_LICENSE);
            violations.push(Violation::new(
                key.clone(),
                license.to_string(),
                format!("License {} is not in allow list", license),
                Severity::Error,
            ));
        }

        if license_id.is_none() {
            let severity = match rules.unknown_action() {
                UnknownAction::Allow => None,
                UnknownAction::Deny => Some(Severity::Error),
                UnknownAction::Warn => Some(Severity::Warning),
            };
            if let Some(severity) = severity {
                violations.push(Violation::new(
                    key,
                    UNKNOWN_LICENSE.to_string(),
                    "Unknown license detected".to_string(),
                    severity,
                ));
            }
        }

        violations
    }
}
