use crate::policy_engine::domain::{Component, LicenseClaim};

/// Boolean operators that separate operands in an SPDX expression
const EXPRESSION_OPERATORS: &[&str] = &["OR", "AND"];

/// LicenseExtraction policy reducing a component's license claims to one identifier
///
/// Only the first declared claim is considered. Within that claim:
/// 1. structured `id`
/// 2. free-text `name`
/// 3. SPDX expression, left-most operand of the first ` OR ` / ` AND `
///
/// This is the single place where raw SBOM license shapes are turned into
/// an identifier; the classifier and evaluator only ever see its output.
pub struct LicenseExtraction;

impl LicenseExtraction {
    /// Returns the component's license identifier, if it declares one
    ///
    /// Empty strings count as absent at every step.
    pub fn extract_license_id(component: &Component) -> Option<&str> {
        let extracted = match component.licenses().first()? {
            LicenseClaim::License { id, name } => {
                non_empty(id.as_deref()).or(non_empty(name.as_deref()))
            }
            LicenseClaim::Expression(expression) => Some(Self::first_operand(expression)),
        };
        non_empty(extracted)
    }

    /// Left-hand operand of an SPDX expression
    ///
    /// The split happens at the first whitespace-delimited, upper-case `OR`
    /// or `AND`: `MIT OR Apache-2.0` yields `MIT`, while
    /// `GPL-2.0 WITH Classpath-exception-2.0` is returned untouched.
    fn first_operand(expression: &str) -> &str {
        let mut offset = 0;

        while let Some(ws) = expression[offset..].find(char::is_whitespace) {
            let run_start = offset + ws;
            let after_run = expression[run_start..].trim_start();
            if starts_with_operator(after_run) {
                return &expression[..run_start];
            }
            offset = expression.len() - after_run.len();
        }

        expression
    }
}

fn starts_with_operator(text: &str) -> bool {
    EXPRESSION_OPERATORS.iter().any(|op| {
        text.strip_prefix(op)
            .is_some_and(|rest| rest.starts_with(char::is_whitespace))
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
