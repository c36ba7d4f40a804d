use crate::policy_engine::domain::{Component, ExcludePattern};

/// Result of applying exclusion patterns to a component list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Components that matched no pattern, in original order
    pub kept: Vec<Component>,
    pub excluded_count: usize,
    /// Patterns that matched no component, in policy order
    pub unmatched_patterns: Vec<String>,
}

/// ComponentFilter - Removes components whose name matches an exclusion pattern
///
/// Match bookkeeping lives in the returned `FilterOutcome` rather than in the
/// patterns, so a `Policy` can be shared and filtered against repeatedly.
pub struct ComponentFilter;

impl ComponentFilter {
    /// Filters components against the given patterns
    ///
    /// # Arguments
    /// * `components` - Components as read from the SBOM
    /// * `patterns` - Validated patterns from the policy's `components.exclude`
    pub fn apply(components: Vec<Component>, patterns: &[ExcludePattern]) -> FilterOutcome {
        if patterns.is_empty() {
            return FilterOutcome {
                kept: components,
                excluded_count: 0,
                unmatched_patterns: Vec::new(),
            };
        }

        let mut matched = vec![false; patterns.len()];
        let mut kept = Vec::with_capacity(components.len());
        let mut excluded_count = 0;

        for component in components {
            let mut excluded = false;
            // Every pattern is checked so each one's match flag is accurate
            for (index, pattern) in patterns.iter().enumerate() {
                if pattern.matches(component.name()) {
                    matched[index] = true;
                    excluded = true;
                }
            }

            if excluded {
                excluded_count += 1;
            } else {
                kept.push(component);
            }
        }

        let unmatched_patterns = patterns
            .iter()
            .zip(matched)
            .filter(|(_, was_matched)| !was_matched)
            .map(|(pattern, _)| pattern.as_str().to_string())
            .collect();

        FilterOutcome {
            kept,
            excluded_count,
            unmatched_patterns,
        }
    }
}
