use crate::policy_engine::domain::{LicenseCategory, Summary};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the license breakdown
const LICENSE_TABLE_HEADER: &str = "| Category | Components |\n";

/// Markdown table separator line for the license breakdown
const LICENSE_TABLE_SEPARATOR: &str = "|----------|------------|\n";

/// Markdown table header for the risk breakdown
const RISK_TABLE_HEADER: &str = "| Risk | Components | Meaning |\n";

/// Markdown table separator line for the risk breakdown
const RISK_TABLE_SEPARATOR: &str = "|------|------------|---------|\n";

/// Markdown table header for violations
const VIOLATION_TABLE_HEADER: &str = "| Component | License | Severity | Reason |\n";

/// Markdown table separator line for violations
const VIOLATION_TABLE_SEPARATOR: &str = "|-----------|---------|----------|--------|\n";

/// MarkdownFormatter adapter for the Markdown license report
///
/// This adapter implements the ReportFormatter port for Markdown output,
/// suitable for CI job summaries and pull request comments.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, summary: &Summary) {
        output.push_str("# License Compliance Report\n\n");
        output.push_str(&format!(
            "Generated at {} for **{}** components.\n\n",
            summary.timestamp.to_rfc3339(),
            summary.components
        ));

        let status = if summary.has_errors() {
            "❌ **Policy check failed**"
        } else if summary.violations.is_empty() {
            "✅ **Policy check passed**"
        } else {
            "⚠️ **Policy check passed with warnings**"
        };
        output.push_str(status);
        output.push_str("\n\n");
    }

    fn render_licenses(&self, output: &mut String, summary: &Summary) {
        output.push_str("## License Categories\n\n");
        output.push_str(LICENSE_TABLE_HEADER);
        output.push_str(LICENSE_TABLE_SEPARATOR);

        for category in LicenseCategory::ALL {
            output.push_str(&format!(
                "| {} | {} |\n",
                category.label(),
                summary.licenses.get(category)
            ));
        }
        output.push('\n');
    }

    fn render_risk(&self, output: &mut String, summary: &Summary) {
        output.push_str("## Risk\n\n");
        output.push_str(RISK_TABLE_HEADER);
        output.push_str(RISK_TABLE_SEPARATOR);
        output.push_str(&format!(
            "| 🔴 Red | {} | At least one error |\n",
            summary.risk.red
        ));
        output.push_str(&format!(
            "| 🟡 Yellow | {} | Warnings only |\n",
            summary.risk.yellow
        ));
        output.push_str(&format!(
            "| 🟢 Green | {} | No violations |\n",
            summary.risk.green
        ));
        output.push('\n');
    }

    fn render_violations(&self, output: &mut String, summary: &Summary) {
        output.push_str("## Violations\n\n");

        if summary.violations.is_empty() {
            output.push_str("*No policy violations*\n");
            return;
        }

        output.push_str(&format!(
            "{} error(s), {} warning(s).\n\n",
            summary.error_count(),
            summary.warning_count()
        ));
        output.push_str(VIOLATION_TABLE_HEADER);
        output.push_str(VIOLATION_TABLE_SEPARATOR);

        for violation in &summary.violations {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&violation.component),
                Self::escape_markdown_table_cell(&violation.license),
                violation.severity,
                Self::escape_markdown_table_cell(&violation.reason)
            ));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, summary: &Summary) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, summary);
        self.render_licenses(&mut output, summary);
        self.render_risk(&mut output, summary);
        self.render_violations(&mut output, summary);

        Ok(output)
    }
}
