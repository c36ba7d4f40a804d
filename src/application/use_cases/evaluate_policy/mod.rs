use crate::application::dto::{ScanRequest, ScanResponse};
use crate::policy_engine::domain::{Component, Policy};
use crate::policy_engine::services::{ComponentFilter, PolicyEvaluator, SummaryAggregator};
use crate::ports::outbound::{PolicyReader, ProgressReporter, SbomReader};
use crate::shared::Result;

/// EvaluatePolicyUseCase - Core use case for a license policy scan
///
/// This use case orchestrates the scan workflow using generic dependency
/// injection for all infrastructure dependencies:
/// read SBOM → load policy → apply exclusions → evaluate → summarize.
///
/// # Type Parameters
/// * `SR` - SbomReader implementation
/// * `POL` - PolicyReader implementation
/// * `PR` - ProgressReporter implementation
pub struct EvaluatePolicyUseCase<SR, POL, PR> {
    sbom_reader: SR,
    policy_reader: POL,
    progress_reporter: PR,
}

impl<SR, POL, PR> EvaluatePolicyUseCase<SR, POL, PR>
where
    SR: SbomReader,
    POL: PolicyReader,
    PR: ProgressReporter,
{
    /// Creates a new EvaluatePolicyUseCase with injected dependencies
    pub fn new(sbom_reader: SR, policy_reader: POL, progress_reporter: PR) -> Self {
        Self {
            sbom_reader,
            policy_reader,
            progress_reporter,
        }
    }

    /// Executes the scan
    ///
    /// # Errors
    /// Propagates SBOM read/parse failures and policy load failures; the
    /// evaluation itself cannot fail.
    pub fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Step 1: Read SBOM
        self.progress_reporter.report(&format!(
            "Reading SBOM from {}",
            request.sbom_path.display()
        ));
        let components = self.sbom_reader.read_sbom(&request.sbom_path)?;
        self.progress_reporter
            .report(&format!("Found {} component(s)", components.len()));

        // Step 2: Load policy
        let (policy, policy_applied) = self.load_policy(&request)?;

        // Step 3: Apply exclusion patterns
        let (components, excluded_count) = self.apply_exclusion_filters(components, &policy);

        // Step 4: Evaluate and summarize
        let violations = PolicyEvaluator::evaluate(&components, &policy);
        let summary = SummaryAggregator::summarize(&components, violations);

        self.progress_reporter.report(&format!(
            "Evaluated {} component(s): {} error(s), {} warning(s)",
            summary.components,
            summary.error_count(),
            summary.warning_count()
        ));

        Ok(ScanResponse::new(summary, policy_applied, excluded_count))
    }

    /// Loads the policy, falling back to an unrestricted one when absent
    ///
    /// # Returns
    /// The policy and whether it came from a file
    fn load_policy(&self, request: &ScanRequest) -> Result<(Policy, bool)> {
        match self.policy_reader.load_policy(&request.policy_path)? {
            Some(policy) => {
                self.progress_reporter.report(&format!(
                    "Loaded policy from {}",
                    request.policy_path.display()
                ));
                for field in policy.ignored_fields() {
                    self.progress_reporter.report_warning(&format!(
                        "Unknown policy field '{}' will be ignored.",
                        field
                    ));
                }
                Ok((policy, true))
            }
            None => {
                self.progress_reporter.report(&format!(
                    "No policy file found at {}, skipping license policy checks",
                    request.policy_path.display()
                ));
                Ok((Policy::unrestricted(), false))
            }
        }
    }

    /// Removes components matched by the policy's exclusion patterns
    ///
    /// # Returns
    /// The kept components and how many were excluded
    fn apply_exclusion_filters(
        &self,
        components: Vec<Component>,
        policy: &Policy,
    ) -> (Vec<Component>, usize) {
        let patterns = policy.exclude_patterns();
        if patterns.is_empty() {
            return (components, 0);
        }

        let outcome = ComponentFilter::apply(components, patterns);

        if outcome.excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "Excluded {} component(s) based on components.exclude",
                outcome.excluded_count
            ));
        }

        for pattern in &outcome.unmatched_patterns {
            self.progress_reporter.report_warning(&format!(
                "Exclude pattern '{}' did not match any component.",
                pattern
            ));
        }

        (outcome.kept, outcome.excluded_count)
    }
}

#[cfg(test)]
mod tests;
