mod component_filter;
mod policy_evaluator;
mod summary_aggregator;

pub use component_filter::{ComponentFilter, FilterOutcome};
pub use policy_evaluator::PolicyEvaluator;
pub use summary_aggregator::SummaryAggregator;
