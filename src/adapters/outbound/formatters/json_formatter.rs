use crate::policy_engine::domain::Summary;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter rendering the summary as pretty-printed JSON
///
/// Output is byte-for-byte what gets written to `summary.json`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, summary: &Summary) -> Result<String> {
        serde_json::to_string_pretty(summary).context("Failed to serialize summary to JSON")
    }
}
