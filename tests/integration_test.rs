/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;
use clearbom::prelude::*;

const SBOM: &str = r#"{
  "bomFormat": "CycloneDX",
  "specVersion": "1.6",
  "components": [
    { "name": "left-pad", "version": "1.3.0", "licenses": [{ "license": { "id": "MIT" } }] },
    { "name": "gpl-lib", "version": "2.0.0", "licenses": [{ "license": { "id": "GPL-3.0" } }] },
    { "name": "dual", "version": "0.9.1", "licenses": [{ "expression": "Apache-2.0 OR MIT" }] },
    { "name": "mystery", "version": "0.0.1" }
  ]
}"#;

fn request() -> ScanRequest {
    ScanRequest::builder()
        .sbom_path("sbom.json")
        .policy_path(".clearbom.yml")
        .build()
        .unwrap()
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn test_evaluate_policy_happy_path() {
    let policy = r#"
version: 1
licenses:
  deny: [GPL-3.0]
  unknown_action: warn
"#;
    let progress_reporter = MockProgressReporter::new();
    let use_case = EvaluatePolicyUseCase::new(
        MockSbomReader::new(SBOM),
        MockPolicyReader::new(policy),
        progress_reporter.clone(),
    );

    let response = use_case.execute(request()).unwrap();

    assert!(response.policy_applied);
    assert!(response.has_blocking_violations());

    let summary = &response.summary;
    assert_eq!(summary.components, 4);
    assert_eq!(summary.licenses.permissive, 2);
    assert_eq!(summary.licenses.copyleft, 1);
    assert_eq!(summary.licenses.unknown, 1);
    assert_eq!(summary.risk.red, 1);
    assert_eq!(summary.risk.yellow, 1);
    assert_eq!(summary.risk.green, 2);

    assert_eq!(summary.violations.len(), 2);
    assert_eq!(summary.violations[0].component, "gpl-lib@2.0.0");
    assert_eq!(summary.violations[0].severity, Severity::Error);
    assert_eq!(summary.violations[1].component, "mystery@0.0.1");
    assert_eq!(summary.violations[1].license, "UNKNOWN");
    assert_eq!(summary.violations[1].severity, Severity::Warning);

    let messages = progress_reporter.get_messages();
    assert!(messages.iter().any(|m| m.contains("Found 4 component(s)")));
    assert!(messages.iter().any(|m| m.contains("Loaded policy from")));
}

#[test]
fn test_evaluate_policy_without_policy_file() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = EvaluatePolicyUseCase::new(
        MockSbomReader::new(SBOM),
        MockPolicyReader::absent(),
        progress_reporter.clone(),
    );

    let response = use_case.execute(request()).unwrap();

    assert!(!response.policy_applied);
    assert!(response.summary.violations.is_empty());
    assert_eq!(response.summary.risk.green, 4);
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("skipping license policy checks")));
}

#[test]
fn test_evaluate_policy_allow_list_rejects_everything_else() {
    let policy = "licenses:\n  allow: [MIT]\n  unknown_action: allow\n";
    let use_case = EvaluatePolicyUseCase::new(
        MockSbomReader::new(SBOM),
        MockPolicyReader::new(policy),
        MockProgressReporter::new(),
    );

    let response = use_case.execute(request()).unwrap();

    let rejected: Vec<(&str, &str)> = response
        .summary
        .violations
        .iter()
        .map(|v| (v.component.as_str(), v.license.as_str()))
        .collect();
    assert_eq!(
        rejected,
        vec![
            ("gpl-lib@2.0.0", "GPL-3.0"),
            ("dual@0.9.1", "Apache-2.0"),
            ("mystery@0.0.1", "UNKNOWN"),
        ]
    );
    assert!(response
        .summary
        .violations
        .iter()
        .all(|v| v.reason.contains("not in allow list")));
}

#[test]
fn test_evaluate_policy_exclusions_and_unmatched_pattern_warning() {
    let policy = r#"
licenses:
  deny: [GPL-3.0]
components:
  exclude:
    - "gpl-*"
    - "does-not-exist"
"#;
    let progress_reporter = MockProgressReporter::new();
    let use_case = EvaluatePolicyUseCase::new(
        MockSbomReader::new(SBOM),
        MockPolicyReader::new(policy),
        progress_reporter.clone(),
    );

    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.excluded_count, 1);
    assert_eq!(response.summary.components, 3);
    assert!(!response.has_blocking_violations());
    assert_eq!(
        progress_reporter.warnings(),
        vec!["Exclude pattern 'does-not-exist' did not match any component.".to_string()]
    );
}

#[test]
fn test_evaluate_policy_malformed_sbom_is_attributed_to_path() {
    let use_case = EvaluatePolicyUseCase::new(
        MockSbomReader::new(r#"{"components": [{"version": "1.0"}]}"#),
        MockPolicyReader::absent(),
        MockProgressReporter::new(),
    );

    let err = use_case.execute(request()).unwrap_err();

    match err.downcast_ref::<ClearbomError>() {
        Some(ClearbomError::MalformedSbom { path, details }) => {
            assert_eq!(path, &PathBuf::from("sbom.json"));
            assert!(details.contains("components[0]"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_evaluate_policy_sbom_reader_failure() {
    let use_case = EvaluatePolicyUseCase::new(
        MockSbomReader::with_failure(),
        MockPolicyReader::absent(),
        MockProgressReporter::new(),
    );

    let result = use_case.execute(request());
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Mock SBOM read failure"));
}

#[test]
fn test_evaluate_policy_with_filesystem_fixtures() {
    let fixtures = fixtures_path();
    let use_case = EvaluatePolicyUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        MockProgressReporter::new(),
    );

    let request = ScanRequest::builder()
        .sbom_path(fixtures.join("sample-sbom.json"))
        .policy_path(fixtures.join("strict-policy.yml"))
        .build()
        .unwrap();
    let response = use_case.execute(request).unwrap();

    assert_eq!(response.excluded_count, 1);
    assert_eq!(response.summary.components, 4);
    assert_eq!(response.summary.error_count(), 1);
    assert_eq!(response.summary.warning_count(), 1);
    assert_eq!(response.summary.violations[0].component, "readline@8.2");
    assert_eq!(response.summary.violations[1].component, "chardet@5.2.0");
}

#[test]
fn test_formatters_render_use_case_output() {
    let use_case = EvaluatePolicyUseCase::new(
        MockSbomReader::new(SBOM),
        MockPolicyReader::new("licenses:\n  deny: [GPL-3.0]\n"),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(request()).unwrap();

    let markdown = FormatterFactory::create(ReportFormat::Markdown)
        .format(&response.summary)
        .unwrap();
    assert!(markdown.starts_with("# License Compliance Report"));
    assert!(markdown.contains("gpl-lib@2.0.0"));

    let json = FormatterFactory::create(ReportFormat::Json)
        .format(&response.summary)
        .unwrap();
    let parsed: Summary = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, response.summary);

    let text = FormatterFactory::create(ReportFormat::Text)
        .format(&response.summary)
        .unwrap();
    assert!(text.contains("Components: 4"));
}
