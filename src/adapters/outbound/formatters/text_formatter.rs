use crate::policy_engine::domain::{LicenseCategory, Summary};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TextFormatter adapter for the plain console report
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, summary: &Summary) -> Result<String> {
        let mut output = String::new();

        output.push_str("📊 Summary:\n");
        output.push_str(&format!("   Components: {}\n", summary.components));
        output.push_str("   Licenses:\n");
        for category in LicenseCategory::ALL {
            output.push_str(&format!(
                "     {}: {}\n",
                category.label(),
                summary.licenses.get(category)
            ));
        }
        output.push_str("   Risk:\n");
        output.push_str(&format!("     Red: {}\n", summary.risk.red));
        output.push_str(&format!("     Yellow: {}\n", summary.risk.yellow));
        output.push_str(&format!("     Green: {}\n", summary.risk.green));

        if summary.violations.is_empty() {
            output.push_str("\nNo policy violations.\n");
        } else {
            output.push_str(&format!(
                "\nViolations ({} error(s), {} warning(s)):\n",
                summary.error_count(),
                summary.warning_count()
            ));
            for violation in &summary.violations {
                output.push_str(&format!(
                    "   [{}] {}: {}\n",
                    violation.severity, violation.component, violation.reason
                ));
            }
        }

        Ok(output)
    }
}
