use crate::policy_engine::domain::Summary;
use crate::shared::Result;

/// ReportFormatter port for rendering a scan summary
///
/// Implementations cover the console text report, Markdown and JSON.
pub trait ReportFormatter {
    /// Renders the summary
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, summary: &Summary) -> Result<String>;
}
